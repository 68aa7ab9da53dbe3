use crate::constants::PLACEHOLDER_URL;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GenerationRequest {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub issue: String,
}

impl GenerationRequest {
    pub fn new(city: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            issue: issue.into(),
        }
    }
}

/// One provider's outcome. `error` is set exactly when `url` is the placeholder.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProviderResult {
    pub provider: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProviderResult {
    pub fn success(provider: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            url: url.into(),
            error: None,
        }
    }

    pub fn failure(provider: impl Into<String>, error: impl Display) -> Self {
        Self {
            provider: provider.into(),
            url: PLACEHOLDER_URL.to_string(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.url == PLACEHOLDER_URL
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && !self.is_placeholder()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationResponse {
    pub images: Vec<ProviderResult>,
}
