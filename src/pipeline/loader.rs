use super::{
    client::{GenerationPipeline, HfGenerationPipeline, HfSentimentPipeline, SentimentPipeline},
    types::ModelSlot,
};
use crate::config::ModelsConfig;
use std::sync::Arc;
use tracing::{error, info};

/// Constructs the sentiment classifier handle. A failure is recorded in the
/// slot rather than aborting startup; the process serves whatever loaded.
pub fn load_classifier(config: &ModelsConfig) -> ModelSlot<Arc<dyn SentimentPipeline>> {
    match HfSentimentPipeline::new(config) {
        Ok(pipeline) => {
            info!("Sentiment classifier ready: {}", config.classifier.model);
            ModelSlot::Ready(Arc::new(pipeline))
        }
        Err(e) => {
            error!("Failed to load sentiment classifier: {}", e);
            ModelSlot::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

pub fn load_generator(config: &ModelsConfig) -> ModelSlot<Arc<dyn GenerationPipeline>> {
    match HfGenerationPipeline::new(config) {
        Ok(pipeline) => {
            info!("Text generator ready: {}", config.generator.model);
            ModelSlot::Ready(Arc::new(pipeline))
        }
        Err(e) => {
            error!("Failed to load text generator: {}", e);
            ModelSlot::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}
