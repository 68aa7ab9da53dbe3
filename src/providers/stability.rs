//! Stability AI text-to-image adapter.

use crate::error::ProviderError;
use crate::images::{StabilityApiResponse, StabilityRequestBody, StabilityTextPrompt};
use crate::prompt::Prompt;
use crate::provider::{check_status, ImageProvider};
use crate::utils::{build_headers, to_data_uri};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const CONTENT_FILTERED: &str = "CONTENT_FILTERED";

pub struct StabilityImageProvider {
    id: String,
    api_key: Option<String>,
    api_url: String,
    client: Client,
}

impl StabilityImageProvider {
    pub fn new(
        id: impl Into<String>,
        engine: &str,
        api_key: Option<String>,
        base_url: &str,
        client: Client,
    ) -> Self {
        Self {
            id: id.into(),
            api_key,
            api_url: format!(
                "{}/v1/generation/{}/text-to-image",
                base_url.trim_end_matches('/'),
                engine
            ),
            client,
        }
    }

    pub fn build_request(&self, prompt: &Prompt) -> StabilityRequestBody {
        StabilityRequestBody {
            text_prompts: vec![StabilityTextPrompt {
                text: prompt.as_str().to_string(),
                weight: 1.0,
            }],
            cfg_scale: 7,
            height: 768,
            width: 1344,
            samples: 1,
            steps: 30,
        }
    }
}

#[async_trait]
impl ImageProvider for StabilityImageProvider {
    fn name(&self) -> &str {
        &self.id
    }

    async fn request_image(
        &self,
        prompt: &Prompt,
        timeout: Duration,
    ) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::MissingApiKey(self.id.clone()))?;

        let response = self
            .client
            .post(&self.api_url)
            .headers(build_headers(api_key)?)
            .timeout(timeout)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, timeout))?;
        let response = check_status(response).await?;

        let api_response = response
            .json::<StabilityApiResponse>()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, timeout))?;
        let artifact = api_response.artifacts.into_iter().next().ok_or_else(|| {
            ProviderError::MalformedResponse("no artifacts in response".to_string())
        })?;

        if artifact.finish_reason.as_deref() == Some(CONTENT_FILTERED) {
            return Err(ProviderError::ContentFiltered);
        }
        to_data_uri(&artifact.base64)
    }
}
