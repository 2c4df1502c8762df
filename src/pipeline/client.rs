use super::types::Classification;
use crate::{Error, Result, config::ModelsConfig};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

#[async_trait]
pub trait SentimentPipeline: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Classification>;
}

#[async_trait]
pub trait GenerationPipeline: Send + Sync {
    /// Produces one continuation for the prompt. `max_length` is forwarded
    /// to the backend uninterpreted; out-of-range values fail downstream.
    async fn generate(&self, prompt: &str, max_length: i64) -> Result<String>;
}

/// Shared plumbing for one hosted-inference model endpoint.
#[derive(Debug)]
struct InferenceEndpoint {
    client: reqwest::Client,
    url: String,
}

impl InferenceEndpoint {
    fn new(endpoint: &str, model: &str, api_token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = api_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| Error::config(format!("Invalid API token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let url = format!("{}/models/{}", endpoint.trim_end_matches('/'), model);
        // Unparseable endpoints must fail at load time, not on the first request
        url.parse::<reqwest::Url>()
            .map_err(|e| Error::config(format!("Invalid inference URL '{url}': {e}")))?;

        Ok(Self { client, url })
    }

    async fn post(&self, body: serde_json::Value) -> Result<serde_json::Value> {
        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::inference(format!(
                "Inference backend returned {status}: {body}"
            )));
        }

        Ok(response.json().await?)
    }
}

/// Sentiment classifier backed by a hosted text-classification model.
pub struct HfSentimentPipeline {
    endpoint: InferenceEndpoint,
    model: String,
}

impl HfSentimentPipeline {
    pub fn new(config: &ModelsConfig) -> Result<Self> {
        let endpoint = InferenceEndpoint::new(
            &config.endpoint,
            &config.classifier.model,
            config.api_token.as_deref(),
        )?;

        Ok(Self {
            endpoint,
            model: config.classifier.model.clone(),
        })
    }
}

#[async_trait]
impl SentimentPipeline for HfSentimentPipeline {
    async fn classify(&self, text: &str) -> Result<Classification> {
        debug!("Classifying {} bytes of text with {}", text.len(), self.model);

        let value = self.endpoint.post(json!({ "inputs": text })).await?;
        parse_classification(&value)
    }
}

/// Text-to-text generator backed by a hosted text2text-generation model.
pub struct HfGenerationPipeline {
    endpoint: InferenceEndpoint,
    model: String,
}

impl HfGenerationPipeline {
    pub fn new(config: &ModelsConfig) -> Result<Self> {
        let endpoint = InferenceEndpoint::new(
            &config.endpoint,
            &config.generator.model,
            config.api_token.as_deref(),
        )?;

        Ok(Self {
            endpoint,
            model: config.generator.model.clone(),
        })
    }
}

#[async_trait]
impl GenerationPipeline for HfGenerationPipeline {
    async fn generate(&self, prompt: &str, max_length: i64) -> Result<String> {
        debug!(
            "Generating with {} (max_length: {})",
            self.model, max_length
        );

        let value = self
            .endpoint
            .post(json!({
                "inputs": prompt,
                "parameters": {
                    "max_length": max_length,
                    "num_return_sequences": 1,
                },
            }))
            .await?;
        parse_generation(&value)
    }
}

/// The classifier answers with one score list per input, best label first:
/// `[[{"label": "POSITIVE", "score": 0.99}, ...]]`. Some deployments flatten
/// the outer list for single inputs; both shapes are accepted.
fn parse_classification(value: &serde_json::Value) -> Result<Classification> {
    if let Ok(nested) = serde_json::from_value::<Vec<Vec<Classification>>>(value.clone()) {
        return nested
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| Error::inference("Classifier returned no predictions"));
    }

    let flat: Vec<Classification> = serde_json::from_value(value.clone())
        .map_err(|_| Error::inference(format!("Unexpected classifier response: {value}")))?;

    flat.into_iter()
        .next()
        .ok_or_else(|| Error::inference("Classifier returned no predictions"))
}

#[derive(Debug, Deserialize)]
struct GeneratedSequence {
    generated_text: String,
}

/// The generator answers `[{"generated_text": "..."}]`, one entry per
/// requested sequence.
fn parse_generation(value: &serde_json::Value) -> Result<String> {
    let sequences: Vec<GeneratedSequence> = serde_json::from_value(value.clone())
        .map_err(|_| Error::inference(format!("Unexpected generator response: {value}")))?;

    sequences
        .into_iter()
        .next()
        .map(|s| s.generated_text)
        .ok_or_else(|| Error::inference("Generator returned no sequences"))
}
