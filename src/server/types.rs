use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub text: String,
    pub sentiment: String,
    pub confidence: f64,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default = "default_max_length")]
    pub max_length: i64,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub prompt: String,
    pub generated_text: String,
}

#[derive(Debug, Serialize)]
pub struct BloomPreviewResponse {
    pub content: String,
    pub bloom_level: &'static str,
    pub generated_question: String,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub models_loaded: ModelsLoaded,
    pub system_info: SystemInfo,
}

#[derive(Debug, Serialize)]
pub struct ModelsLoaded {
    pub bert_classifier: bool,
    pub t5_generator: bool,
}

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub api_version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub docs: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub analyze: &'static str,
    pub generate: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn default_max_length() -> i64 {
    50
}
