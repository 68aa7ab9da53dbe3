pub mod openai;
pub mod stability;

use crate::config::{ProviderConfig, ProviderKind};
use crate::provider::ImageProvider;
use reqwest::Client;
use std::sync::Arc;

pub use openai::OpenAiImageProvider;
pub use stability::StabilityImageProvider;

pub fn build_provider(config: &ProviderConfig, client: &Client) -> Arc<dyn ImageProvider> {
    match config.kind {
        ProviderKind::OpenAi => Arc::new(OpenAiImageProvider::new(
            config.id.clone(),
            config.model.clone(),
            config.api_key.clone(),
            &config.base_url,
            client.clone(),
        )),
        ProviderKind::Stability => Arc::new(StabilityImageProvider::new(
            config.id.clone(),
            &config.model,
            config.api_key.clone(),
            &config.base_url,
            client.clone(),
        )),
    }
}
