//! Image provider capability shared by every backend adapter.

use crate::error::ProviderError;
use crate::models::ProviderResult;
use crate::prompt::Prompt;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{header::RETRY_AFTER, Response, StatusCode};
use std::time::Duration;

/// One external image-generation backend.
///
/// Adapters implement [`ImageProvider::request_image`], which performs exactly
/// one outbound call and returns an image reference (remote URL or `data:` URI).
/// Callers use [`ImageProvider::generate`], which never fails: every error
/// class ends up in the `error` field of the returned [`ProviderResult`].
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Stable identifier reported in each result entry.
    fn name(&self) -> &str;

    async fn request_image(&self, prompt: &Prompt, timeout: Duration)
        -> Result<String, ProviderError>;

    async fn generate(&self, prompt: &Prompt, timeout: Duration) -> ProviderResult {
        let outcome = match tokio::time::timeout(timeout, self.request_image(prompt, timeout)).await
        {
            Ok(Ok(url)) if url.trim().is_empty() => Err(ProviderError::MalformedResponse(
                "empty image reference".to_string(),
            )),
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            }),
        };

        match outcome {
            Ok(url) => {
                debug!("{} produced an image", self.name());
                ProviderResult::success(self.name(), url)
            }
            Err(err) => {
                warn!("{} failed: {}", self.name(), err);
                ProviderResult::failure(self.name(), err)
            }
        }
    }
}

/// Maps a non-success HTTP status onto the provider error taxonomy.
pub async fn check_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ProviderError::Unauthorized {
            status: status.as_u16(),
        }),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after_secs = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok());
            Err(ProviderError::RateLimited { retry_after_secs })
        }
        _ => {
            let message = response.text().await.unwrap_or_default();
            Err(ProviderError::Api {
                status: status.as_u16(),
                message: truncate(&message, 200),
            })
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        trimmed.to_string()
    } else {
        let mut cut: String = trimmed.chars().take(max_chars).collect();
        cut.push('…');
        cut
    }
}
