//! Configuration management for the portal access layer
//!
//! This module handles loading and validation of all configuration.

pub mod models;
pub mod validation;

pub use models::{ApiConfig, LoaderConfig, PortalConfig};
pub use validation::Validate;

use crate::utils::error::{PortalError, Result};
use std::path::Path;
use tracing::{debug, info};

impl PortalConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PortalError::Config(format!("Failed to read config file: {}", e)))?;

        let config: PortalConfig = serde_yaml::from_str(&content)
            .map_err(|e| PortalError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file when present, then the `PORTAL_*` variables.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        dotenvy::dotenv().ok();

        let mut config = PortalConfig::default();

        if let Ok(base_url) = std::env::var("PORTAL_API_BASE_URL") {
            config.api.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("PORTAL_REQUEST_TIMEOUT_SECS") {
            config.api.request_timeout_secs = timeout.parse().map_err(|e| {
                PortalError::Config(format!("Invalid PORTAL_REQUEST_TIMEOUT_SECS: {}", e))
            })?;
        }
        if let Ok(buffer) = std::env::var("PORTAL_EVENT_BUFFER") {
            config.loader.event_buffer = buffer
                .parse()
                .map_err(|e| PortalError::Config(format!("Invalid PORTAL_EVENT_BUFFER: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }
}
