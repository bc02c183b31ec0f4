//! Configuration models

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration for the portal access layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Backend API endpoints
    pub api: ApiConfig,
    /// Claims loader tuning
    pub loader: LoaderConfig,
}

/// Backend API configuration
///
/// Each concern carries an ordered list of candidate paths. Deployments
/// that still serve a legacy path keep it at the end of the list; paths
/// are probed in order until one answers (see `claims::ClaimsClient`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend REST API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Candidate paths for the roles listing
    pub roles_paths: Vec<String>,
    /// Candidate paths for the caller's permission codes
    pub permissions_paths: Vec<String>,
    /// Candidate paths for the current user record
    pub current_user_paths: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 15,
            roles_paths: vec!["/api/roles/".to_string()],
            permissions_paths: vec!["/api/permissions/my".to_string()],
            current_user_paths: vec!["/api/users/me".to_string(), "/api/auth/me".to_string()],
        }
    }
}

impl ApiConfig {
    /// Per-request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Claims loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Capacity of the snapshot broadcast channel
    pub event_buffer: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { event_buffer: 64 }
    }
}
