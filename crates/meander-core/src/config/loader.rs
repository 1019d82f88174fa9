//! YAML configuration loading

use crate::config::types::MeanderConfig;
use crate::errors::{MeanderError, Result};
use std::path::Path;
use tokio::fs;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<MeanderConfig> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            MeanderError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        log::debug!("Loaded config file {}", path.display());
        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<MeanderConfig> {
        // serde_yaml rejects an empty document; treat it as all defaults
        if content.trim().is_empty() {
            return Ok(MeanderConfig::default());
        }

        let config: MeanderConfig = serde_yaml::from_str(content).map_err(|e| {
            MeanderError::config_error(format!("Failed to parse YAML config: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }
}
