//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::{ApiConfig, LoaderConfig, PortalConfig};
use crate::utils::error::{PortalError, Result};
use tracing::debug;
use url::Url;

/// Validation pass over a configuration structure
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for PortalConfig {
    fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.loader.validate()?;
        debug!("Configuration validated");
        Ok(())
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(PortalError::Validation(
                "api.base_url must not be empty".to_string(),
            ));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| PortalError::Validation(format!("api.base_url is invalid: {}", e)))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(PortalError::Validation(format!(
                    "api.base_url must use http:// or https://, got: {}",
                    scheme
                )));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(PortalError::Validation(
                "api.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        validate_paths("api.roles_paths", &self.roles_paths)?;
        validate_paths("api.permissions_paths", &self.permissions_paths)?;
        validate_paths("api.current_user_paths", &self.current_user_paths)?;

        Ok(())
    }
}

/// Candidate paths are appended to the base URL verbatim, so a missing
/// leading slash would silently mash the URL together.
fn validate_paths(field: &str, paths: &[String]) -> Result<()> {
    if paths.is_empty() {
        return Err(PortalError::Validation(format!(
            "{} must list at least one path",
            field
        )));
    }
    for path in paths {
        if !path.starts_with('/') {
            return Err(PortalError::Validation(format!(
                "{} entries must start with '/', got: {:?}",
                field, path
            )));
        }
    }
    Ok(())
}

impl Validate for LoaderConfig {
    fn validate(&self) -> Result<()> {
        if self.event_buffer == 0 {
            return Err(PortalError::Validation(
                "loader.event_buffer must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
