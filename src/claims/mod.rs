//! Session/claims loading
//!
//! Obtains the authoritative permission set and role names for the
//! current session, on demand and whenever the session store signals a
//! change. Every failure path resolves to less access, never more:
//! a missing token, an unreachable backend or a non-success status all
//! yield the empty permission set.

pub mod client;
pub mod snapshot;
pub mod wire;

pub use client::ClaimsClient;
pub use snapshot::ClaimsSnapshot;
pub use wire::{PermissionEntry, RoleRecord};

use crate::authz::PermissionSet;
use crate::config::PortalConfig;
use crate::session::{CachedUser, SessionStore, UNKNOWN_USER, keys};
use crate::utils::error::Result;
use arc_swap::ArcSwap;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Loads and holds the current [`ClaimsSnapshot`]
///
/// Reads the bearer token and cached user from the injected
/// [`SessionStore`], fetches roles/permissions/user from the backend, and
/// atomically publishes the result. Several views can observe one loader;
/// each completed refresh replaces the snapshot wholesale (last-fetch-wins,
/// no merging), which makes concurrent refreshes idempotent.
pub struct ClaimsLoader {
    store: Arc<dyn SessionStore>,
    client: ClaimsClient,
    current: ArcSwap<ClaimsSnapshot>,
    events: broadcast::Sender<Arc<ClaimsSnapshot>>,
}

impl ClaimsLoader {
    /// Create a loader over the given store
    pub fn new(config: &PortalConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        info!("Initializing claims loader");
        let client = ClaimsClient::new(&config.api)?;
        let (events, _) = broadcast::channel(config.loader.event_buffer);

        Ok(Self {
            store,
            client,
            current: ArcSwap::from_pointee(ClaimsSnapshot::unauthenticated()),
            events,
        })
    }

    /// The most recently published snapshot
    pub fn current(&self) -> Arc<ClaimsSnapshot> {
        self.current.load_full()
    }

    /// Subscribe to snapshot replacements
    ///
    /// Observers re-derive their classification from each received
    /// snapshot; claims may arrive after domain data, so views recompute
    /// reactively rather than once.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<ClaimsSnapshot>> {
        self.events.subscribe()
    }

    async fn cached_user(&self) -> Option<CachedUser> {
        // Two historically inconsistent key spellings, checked in order.
        for key in keys::USER_KEYS {
            if let Some(raw) = self.store.get(key).await {
                match serde_json::from_str(&raw) {
                    Ok(user) => return Some(user),
                    Err(e) => warn!("Ignoring malformed cached user under {:?}: {}", key, e),
                }
            }
        }
        None
    }

    /// Re-read the session and fetch fresh claims
    ///
    /// Roles and permissions fail independently: a dead roles endpoint
    /// only costs role names (raw ids are shown instead), while a failed
    /// permission fetch costs all access. The finished snapshot replaces
    /// the previous one atomically and is broadcast to subscribers.
    pub async fn refresh(&self) -> Arc<ClaimsSnapshot> {
        let token = self.store.get(keys::ACCESS_TOKEN).await;
        if token.is_none() {
            debug!("No access token present, resolving to unauthenticated claims");
        }

        // Role names are decorative, so a failure here must not abort
        // the permission fetch below.
        let roles = self.client.fetch_roles(token.as_deref()).await;

        let user = match self.cached_user().await {
            Some(user) => Some(user),
            None => match &token {
                Some(token) => self.client.fetch_current_user(token).await,
                None => None,
            },
        };
        let current_user = user
            .as_ref()
            .map(CachedUser::display_name)
            .unwrap_or_else(|| UNKNOWN_USER.to_string());

        // Permission codes are load-bearing. No token, or any fetch
        // failure, resolves to the empty set, never to a prior value.
        let permissions: PermissionSet = match &token {
            Some(token) => self.client.fetch_permissions(token).await.into(),
            None => PermissionSet::new(),
        };

        let role_names = resolve_role_names(user.as_ref(), &roles);

        let snapshot = Arc::new(ClaimsSnapshot {
            permissions,
            current_user,
            role_names,
            roles,
            fetched_at: Utc::now(),
            loaded: true,
        });

        debug!(
            "Claims refreshed: user={}, {} permission codes, {} roles",
            snapshot.current_user,
            snapshot.permissions.len(),
            snapshot.role_names.len()
        );

        self.current.store(snapshot.clone());
        let _ = self.events.send(snapshot.clone());
        snapshot
    }

    /// Spawn a task that reloads claims on session changes
    ///
    /// Reacts to writes of the token, the cached user (either spelling),
    /// and the administrative "permissions changed" marker. A lagged
    /// receiver refreshes once to catch up; a closed store ends the task.
    pub fn watch(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        let mut rx = self.store.subscribe();
        let loader = self;

        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        if keys::WATCHED_KEYS.contains(&event.key.as_str()) {
                            debug!("Session change on {:?}, reloading claims", event.key);
                            let _ = loader.refresh().await;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        debug!("Missed {} session events, reloading claims", skipped);
                        let _ = loader.refresh().await;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

/// Map the user's role ids to names via the roles listing
///
/// An id with no matching record falls back to displaying the raw id.
fn resolve_role_names(user: Option<&CachedUser>, roles: &[RoleRecord]) -> Vec<String> {
    let Some(user) = user else {
        return Vec::new();
    };
    user.role_idents()
        .iter()
        .map(|id| {
            roles
                .iter()
                .find(|record| &record.id == id)
                .map(|record| record.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .collect()
}
