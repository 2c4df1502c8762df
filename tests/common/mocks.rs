use async_trait::async_trait;
use bloom_api::{
    Error, Result,
    pipeline::{Classification, GenerationPipeline, SentimentPipeline},
};
use std::sync::{Arc, Mutex};

/// Stub sentiment pipeline returning a fixed prediction or a fixed error.
pub struct StubClassifier {
    label: String,
    score: f64,
    error: Option<String>,
}

impl StubClassifier {
    pub fn returning(label: &str, score: f64) -> Self {
        Self {
            label: label.to_string(),
            score,
            error: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            label: String::new(),
            score: 0.0,
            error: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl SentimentPipeline for StubClassifier {
    async fn classify(&self, _text: &str) -> Result<Classification> {
        match &self.error {
            Some(message) => Err(Error::inference(message.clone())),
            None => Ok(Classification {
                label: self.label.clone(),
                score: self.score,
            }),
        }
    }
}

/// Stub generation pipeline that records the prompts and lengths it was
/// called with, so tests can assert what the handlers forwarded.
pub struct StubGenerator {
    output: String,
    error: Option<String>,
    pub requests: Arc<Mutex<Vec<(String, i64)>>>,
}

impl StubGenerator {
    pub fn returning(output: &str) -> Self {
        Self {
            output: output.to_string(),
            error: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            output: String::new(),
            error: Some(message.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl GenerationPipeline for StubGenerator {
    async fn generate(&self, prompt: &str, max_length: i64) -> Result<String> {
        self.requests
            .lock()
            .unwrap()
            .push((prompt.to_string(), max_length));

        match &self.error {
            Some(message) => Err(Error::inference(message.clone())),
            None => Ok(self.output.clone()),
        }
    }
}
