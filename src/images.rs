use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct OpenAiDalleRequestBody {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DalleImageGeneration {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DalleApiResponse {
    pub data: Vec<DalleImageGeneration>,
}

#[derive(Debug, Serialize)]
pub struct StabilityTextPrompt {
    pub text: String,
    pub weight: f32,
}

#[derive(Debug, Serialize)]
pub struct StabilityRequestBody {
    pub text_prompts: Vec<StabilityTextPrompt>,
    pub cfg_scale: u8,
    pub height: u32,
    pub width: u32,
    pub samples: u8,
    pub steps: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilityArtifact {
    pub base64: String,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StabilityApiResponse {
    pub artifacts: Vec<StabilityArtifact>,
}
