use super::types::{
    AnalyzeRequest, AnalyzeResponse, BloomPreviewResponse, Endpoints, ErrorResponse,
    GenerateRequest, GenerateResponse, HealthResponse, ModelsLoaded, RootResponse, SystemInfo,
};
use crate::{
    Error,
    pipeline::{GenerationPipeline, ModelSlot, SentimentPipeline},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

const CLASSIFIER_NAME: &str = "sentiment classifier";
const GENERATOR_NAME: &str = "text generator";

// TODO: derive the Bloom level from the content once a taxonomy classifier
// exists; until then every preview is tagged as the lowest level.
pub const BLOOM_LEVEL_PLACEHOLDER: &str = "recordar";
const PREVIEW_NOTE: &str = "Preview - full functionality in development";

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<ModelSlot<Arc<dyn SentimentPipeline>>>,
    pub generator: Arc<ModelSlot<Arc<dyn GenerationPipeline>>>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Maps a pipeline failure onto the wire: an unavailable model is a 503 with
/// a static message, anything else a 500 carrying the error text.
fn failure(context: &str, err: Error) -> HandlerError {
    match &err {
        Error::ModelUnavailable { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("{}: {}", context, err),
            }),
        ),
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Bloom API - question generation with AI",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        docs: "/docs",
        endpoints: Endpoints {
            health: "/health",
            analyze: "/analyze",
            generate: "/generate",
        },
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let classifier_ready = state.classifier.is_ready();
    let generator_ready = state.generator.is_ready();

    Json(HealthResponse {
        status: if classifier_ready && generator_ready {
            "healthy"
        } else {
            "partial"
        },
        models_loaded: ModelsLoaded {
            bert_classifier: classifier_ready,
            t5_generator: generator_ready,
        },
        system_info: SystemInfo {
            api_version: env!("CARGO_PKG_VERSION"),
        },
    })
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, HandlerError> {
    info!("Received analysis request ({} bytes)", request.text.len());

    let classifier = state
        .classifier
        .get(CLASSIFIER_NAME)
        .map_err(|e| failure("Analysis error", e))?;

    match classifier.classify(&request.text).await {
        Ok(classification) => Ok(Json(AnalyzeResponse {
            text: request.text,
            sentiment: classification.label,
            confidence: round4(classification.score),
        })),
        Err(e) => {
            error!("Analysis failed: {}", e);
            Err(failure("Analysis error", e))
        }
    }
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, HandlerError> {
    info!(
        "Received generation request (max_length: {})",
        request.max_length
    );

    let generator = state
        .generator
        .get(GENERATOR_NAME)
        .map_err(|e| failure("Generation error", e))?;

    match generator.generate(&request.prompt, request.max_length).await {
        Ok(generated_text) => Ok(Json(GenerateResponse {
            prompt: request.prompt,
            generated_text,
        })),
        Err(e) => {
            error!("Generation failed: {}", e);
            Err(failure("Generation error", e))
        }
    }
}

pub async fn bloom_preview(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<BloomPreviewResponse>, HandlerError> {
    info!("Received bloom preview request");

    let generator = state
        .generator
        .get(GENERATOR_NAME)
        .map_err(|e| failure("Error", e))?;

    let bloom_prompt = format!("generate question: {}", request.prompt);

    match generator.generate(&bloom_prompt, request.max_length).await {
        Ok(generated_question) => Ok(Json(BloomPreviewResponse {
            content: request.prompt,
            bloom_level: BLOOM_LEVEL_PLACEHOLDER,
            generated_question,
            note: PREVIEW_NOTE,
        })),
        Err(e) => {
            error!("Bloom preview failed: {}", e);
            Err(failure("Error", e))
        }
    }
}
