//! Process-wide configuration, read once at startup.

use crate::constants::{
    BIND_VAR, DALLE2_MODEL, DALLE3_MODEL, DEFAULT_BIND, DEFAULT_PROVIDERS,
    DEFAULT_PROVIDER_TIMEOUT, OPENAI_API_BASE, OPENAI_BASE_VAR, OPENAI_KEY_VAR, PROVIDERS_VAR,
    PROVIDER_TIMEOUT_VAR, STABILITY_API_BASE, STABILITY_BASE_VAR, STABILITY_ENGINE,
    STABILITY_KEY_VAR, TIMEOUT_OVERRIDE_PREFIX,
};
use crate::error::ConfigError;
use std::collections::{HashMap, HashSet};
use std::env;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Stability,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub id: String,
    pub kind: ProviderKind,
    /// OpenAI model name or Stability engine id.
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub providers: Vec<ProviderConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Values from the file take precedence over the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let env_file_error = |source: dotenv::Error| ConfigError::EnvFile {
            path: path.display().to_string(),
            source,
        };

        let mut values = HashMap::new();
        // from_path_iter reads the file without touching the process environment
        #[allow(deprecated)]
        let items = dotenv::from_path_iter(path).map_err(env_file_error)?;
        for item in items {
            let (key, value) = item.map_err(env_file_error)?;
            values.insert(key, value);
        }

        Self::from_lookup(|key| values.get(key).cloned().or_else(|| env::var(key).ok()))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_value = get(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_value.clone()))?;

        let default_timeout = match get(PROVIDER_TIMEOUT_VAR) {
            Some(value) => parse_timeout(PROVIDER_TIMEOUT_VAR, &value)?,
            None => DEFAULT_PROVIDER_TIMEOUT,
        };

        let openai_key = get(OPENAI_KEY_VAR);
        let openai_base = get(OPENAI_BASE_VAR).unwrap_or_else(|| OPENAI_API_BASE.to_string());
        let stability_key = get(STABILITY_KEY_VAR);
        let stability_base =
            get(STABILITY_BASE_VAR).unwrap_or_else(|| STABILITY_API_BASE.to_string());

        let list = get(PROVIDERS_VAR).unwrap_or_else(|| DEFAULT_PROVIDERS.to_string());
        let mut seen = HashSet::new();
        let mut providers = Vec::new();
        for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (id, kind, model) = parse_provider_entry(entry)?;
            if !seen.insert(id.clone()) {
                return Err(ConfigError::DuplicateProvider(id));
            }

            let override_key = timeout_override_key(&id);
            let timeout = match get(&override_key) {
                Some(value) => parse_timeout(&override_key, &value)?,
                None => default_timeout,
            };

            let (api_key, base_url) = match kind {
                ProviderKind::OpenAi => (openai_key.clone(), openai_base.clone()),
                ProviderKind::Stability => (stability_key.clone(), stability_base.clone()),
            };

            providers.push(ProviderConfig {
                id,
                kind,
                model,
                api_key,
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout,
            });
        }

        if providers.is_empty() {
            return Err(ConfigError::EmptyProviderList);
        }

        Ok(Config { bind, providers })
    }
}

/// Accepts a preset name or `id=openai:<model>` / `id=stability:<engine>`.
pub fn parse_provider_entry(entry: &str) -> Result<(String, ProviderKind, String), ConfigError> {
    let unknown = || ConfigError::UnknownProvider(entry.to_string());

    if let Some((id, target)) = entry.split_once('=') {
        let (kind, model) = target.split_once(':').ok_or_else(unknown)?;
        let (id, model) = (id.trim(), model.trim());
        if id.is_empty() || model.is_empty() {
            return Err(unknown());
        }
        let kind = match kind.trim().to_ascii_lowercase().as_str() {
            "openai" => ProviderKind::OpenAi,
            "stability" => ProviderKind::Stability,
            _ => return Err(unknown()),
        };
        return Ok((id.to_string(), kind, model.to_string()));
    }

    match entry {
        DALLE3_MODEL => Ok((entry.to_string(), ProviderKind::OpenAi, DALLE3_MODEL.to_string())),
        DALLE2_MODEL => Ok((entry.to_string(), ProviderKind::OpenAi, DALLE2_MODEL.to_string())),
        "stable-diffusion" => Ok((
            entry.to_string(),
            ProviderKind::Stability,
            STABILITY_ENGINE.to_string(),
        )),
        _ => Err(unknown()),
    }
}

pub fn timeout_override_key(id: &str) -> String {
    let suffix: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    format!("{}{}", TIMEOUT_OVERRIDE_PREFIX, suffix)
}

fn parse_timeout(key: &str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
