use std::time::Duration;

pub const PLACEHOLDER_URL: &str = "/placeholder.png";

pub const OPENAI_API_BASE: &str = "https://api.openai.com";
pub const OPENAI_IMAGES_PATH: &str = "/v1/images/generations";
pub const DALLE3_MODEL: &str = "dall-e-3";
pub const DALLE2_MODEL: &str = "dall-e-2";

pub const STABILITY_API_BASE: &str = "https://api.stability.ai";
pub const STABILITY_ENGINE: &str = "stable-diffusion-xl-1024-v1-0";

pub const DEFAULT_PROVIDERS: &str = "dall-e-3,stable-diffusion";
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

pub const CMD_SERVE: &str = "serve";
pub const CMD_GENERATE: &str = "generate";
pub const CMD_CITIES: &str = "cities";

pub const ENV_FILE_VAR: &str = "VISIONS_ENV_FILE";
pub const BIND_VAR: &str = "VISIONS_BIND";
pub const PROVIDERS_VAR: &str = "VISIONS_PROVIDERS";
pub const PROVIDER_TIMEOUT_VAR: &str = "VISIONS_PROVIDER_TIMEOUT_SECS";
pub const TIMEOUT_OVERRIDE_PREFIX: &str = "VISIONS_TIMEOUT_";
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_VAR: &str = "OPENAI_API_BASE";
pub const STABILITY_KEY_VAR: &str = "STABILITY_API_KEY";
pub const STABILITY_BASE_VAR: &str = "STABILITY_API_BASE";
