//! Fans one generation request out to every configured provider.

use crate::aggregator::aggregate;
use crate::config::Config;
use crate::error::{GenerationError, ProviderError};
use crate::models::{GenerationRequest, GenerationResponse, ProviderResult};
use crate::prompt::{self, Prompt};
use crate::provider::ImageProvider;
use crate::providers::build_provider;
use futures::future::join_all;
use log::{error, info, warn};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct ProviderSlot {
    provider: Arc<dyn ImageProvider>,
    timeout: Duration,
}

#[derive(Default)]
pub struct Orchestrator {
    slots: Vec<ProviderSlot>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config, client: &Client) -> Self {
        config
            .providers
            .iter()
            .fold(Self::new(), |orchestrator, provider| {
                orchestrator.with_provider(build_provider(provider, client), provider.timeout)
            })
    }

    /// Appends a provider; result order follows the order of these calls.
    pub fn with_provider(mut self, provider: Arc<dyn ImageProvider>, timeout: Duration) -> Self {
        self.slots.push(ProviderSlot { provider, timeout });
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.slots.iter().map(|slot| slot.provider.name()).collect()
    }

    /// Validates the request, then queries every provider concurrently.
    ///
    /// Only an invalid request or a broken aggregation contract fails the call;
    /// provider failures are reported on their own entries. Dropping the
    /// returned future cancels every in-flight provider call.
    pub async fn orchestrate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let prompt = prompt::build_for(request)?;
        info!(
            "generating '{}' / '{}' across {} providers",
            request.city,
            request.issue,
            self.slots.len()
        );

        let started = Instant::now();
        let results = join_all(
            self.slots
                .iter()
                .map(|slot| run_slot(slot, &prompt, started)),
        )
        .await;

        let response = aggregate(&self.provider_names(), results).map_err(|err| {
            error!("{}", err);
            err
        })?;

        let succeeded = response.images.iter().filter(|r| r.is_success()).count();
        info!(
            "generation finished in {}ms: {}/{} providers succeeded",
            started.elapsed().as_millis(),
            succeeded,
            response.images.len()
        );
        Ok(response)
    }
}

async fn run_slot(slot: &ProviderSlot, prompt: &Prompt, started: Instant) -> ProviderResult {
    let name = slot.provider.name();
    let result = match tokio::time::timeout(slot.timeout, slot.provider.generate(prompt, slot.timeout))
        .await
    {
        Ok(result) => result,
        Err(_) => {
            let err = ProviderError::Timeout {
                timeout_ms: slot.timeout.as_millis() as u64,
            };
            warn!("{} failed: {}", name, err);
            ProviderResult::failure(name, err)
        }
    };
    info!(
        "{} settled after {}ms ({})",
        name,
        started.elapsed().as_millis(),
        if result.error.is_none() { "ok" } else { "error" }
    );
    result
}
