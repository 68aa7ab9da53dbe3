//! OpenAI Images API adapter (DALL·E models).

use crate::constants::{DALLE3_MODEL, OPENAI_IMAGES_PATH};
use crate::error::ProviderError;
use crate::images::{DalleApiResponse, OpenAiDalleRequestBody};
use crate::prompt::Prompt;
use crate::provider::{check_status, ImageProvider};
use crate::utils::{build_headers, to_data_uri};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct OpenAiImageProvider {
    id: String,
    model: String,
    api_key: Option<String>,
    api_url: String,
    client: Client,
}

impl OpenAiImageProvider {
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        base_url: &str,
        client: Client,
    ) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            api_key,
            api_url: format!("{}{}", base_url.trim_end_matches('/'), OPENAI_IMAGES_PATH),
            client,
        }
    }

    pub fn build_request(&self, prompt: &Prompt) -> OpenAiDalleRequestBody {
        let (size, quality) = if self.model == DALLE3_MODEL {
            ("1792x1024", Some("hd".to_string()))
        } else {
            ("1024x1024", None)
        };
        OpenAiDalleRequestBody {
            model: self.model.clone(),
            prompt: prompt.as_str().to_string(),
            n: 1,
            size: size.to_string(),
            quality,
        }
    }
}

#[async_trait]
impl ImageProvider for OpenAiImageProvider {
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
        let headers = build_headers(api_key)?;

        let response = self
            .client
            .post(&self.api_url)
            .headers(headers)
            .timeout(timeout)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, timeout))?;
        let response = check_status(response).await?;

        let response_body = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, timeout))?;
        let api_response: DalleApiResponse = serde_json::from_str(&response_body)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let image = api_response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("no image in response".to_string()))?;
        match (image.url, image.b64_json) {
            (Some(url), _) if !url.trim().is_empty() => Ok(url),
            (_, Some(b64)) => to_data_uri(&b64),
            _ => Err(ProviderError::MalformedResponse(
                "image has neither url nor b64_json".to_string(),
            )),
        }
    }
}
