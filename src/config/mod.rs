mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Reads the gateway configuration from `CONFIG_PATH` (or `config.yaml`).
pub async fn load() -> Result<Config> {
    let config_path =
        env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path)
        .await
        .map_err(|e| Error::config(format!("Cannot read '{config_path}': {e}")))?;

    Ok(serde_yaml::from_str(&config_str)?)
}
