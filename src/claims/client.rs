//! HTTP client for the claims endpoints
//!
//! Each concern carries an ordered list of candidate paths; providers are
//! probed in sequence and each answers with a typed value or a typed
//! "not found", so the caller never nests its own fallback handling.
//! Exhausting the list is not an error here: the loader treats it as the
//! fail-closed empty result.

use crate::config::ApiConfig;
use crate::session::CachedUser;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::wire::{PermissionEntry, RoleRecord};

/// Outcome of probing a single provider path
enum Fetch<T> {
    Found(T),
    NotFound,
}

/// Thin `reqwest` wrapper over the claims endpoints
#[derive(Debug, Clone)]
pub struct ClaimsClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl ClaimsClient {
    /// Create a client for the configured API
    pub fn new(api: &ApiConfig) -> Result<Self> {
        // Parse up front so a bad base URL fails at construction,
        // not on the first probe.
        Url::parse(&api.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(api.request_timeout())
            .build()?;

        Ok(Self {
            http,
            api: api.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<Fetch<T>> {
        let mut request = self.http.get(self.endpoint(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Ok(Fetch::NotFound);
        }
        Ok(Fetch::Found(response.json::<T>().await?))
    }

    /// Probe the candidate paths in order, returning the first answer
    async fn probe<T: DeserializeOwned>(
        &self,
        paths: &[String],
        token: Option<&str>,
        what: &str,
    ) -> Option<T> {
        for path in paths {
            match self.get_json(path, token).await {
                Ok(Fetch::Found(value)) => return Some(value),
                Ok(Fetch::NotFound) => {
                    debug!("{} provider {} answered non-success, trying next", what, path);
                }
                Err(e) => {
                    warn!("{} fetch via {} failed: {}", what, path, e);
                }
            }
        }
        None
    }

    /// Fetch the roles listing; failures degrade to an empty list
    pub async fn fetch_roles(&self, token: Option<&str>) -> Vec<RoleRecord> {
        self.probe(&self.api.roles_paths, token, "roles")
            .await
            .unwrap_or_default()
    }

    /// Fetch the caller's permission codes; failures degrade to none
    pub async fn fetch_permissions(&self, token: &str) -> Vec<String> {
        let entries: Option<Vec<PermissionEntry>> = self
            .probe(&self.api.permissions_paths, Some(token), "permissions")
            .await;
        entries
            .map(|list| list.into_iter().map(PermissionEntry::into_code).collect())
            .unwrap_or_default()
    }

    /// Fetch the current user record; failures degrade to `None`
    pub async fn fetch_current_user(&self, token: &str) -> Option<CachedUser> {
        self.probe(&self.api.current_user_paths, Some(token), "current user")
            .await
    }
}
