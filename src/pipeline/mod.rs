mod client;
mod loader;
mod types;

pub use client::{
    GenerationPipeline, HfGenerationPipeline, HfSentimentPipeline, SentimentPipeline,
};
pub use loader::{load_classifier, load_generator};
pub use types::{Classification, ModelSlot};
