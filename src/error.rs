use std::time::Duration;
use thiserror::Error;

/// Rejection of a `{city, issue}` pair before any provider is contacted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidInputError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unsupported city: {0}")]
    UnknownCity(String),

    #[error("issue '{issue}' is not available for {city}")]
    IssueNotForCity { city: String, issue: String },
}

/// Failure of a single provider call. Always reported in-band on that
/// provider's result entry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("no API key configured for {0}")]
    MissingApiKey(String),

    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("authentication rejected ({status})")]
    Unauthorized { status: u16 },

    #[error("rate limited{}", retry_hint(.retry_after_secs))]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("network error: {0}")]
    Network(String),

    #[error("timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("image rejected by the provider's content filter")]
    ContentFiltered,
}

impl ProviderError {
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            }
        } else if err.is_decode() {
            ProviderError::MalformedResponse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

fn retry_hint(retry_after_secs: &Option<u64>) -> String {
    match retry_after_secs {
        Some(secs) => format!(", retry after {}s", secs),
        None => String::new(),
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("aggregation contract violated: {0}")]
pub struct AggregationContractError(pub String);

#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Aggregation(#[from] AggregationContractError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown provider '{0}' (expected dall-e-3, dall-e-2, stable-diffusion or id=openai:<model> / id=stability:<engine>)")]
    UnknownProvider(String),

    #[error("provider '{0}' is configured more than once")]
    DuplicateProvider(String),

    #[error("no providers configured")]
    EmptyProviderList,

    #[error("invalid timeout for {key}: '{value}'")]
    InvalidTimeout { key: String, value: String },

    #[error("invalid bind address '{0}'")]
    InvalidBind(String),

    #[error("failed to read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenv::Error,
    },
}
