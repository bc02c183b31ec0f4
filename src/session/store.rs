//! Session store trait and in-memory implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tokio::sync::broadcast;
use tracing::debug;

/// A change notification for one store key
#[derive(Debug, Clone)]
pub struct StoreEvent {
    /// The key that was written or removed
    pub key: String,
}

/// Persistent key/value store holding session state
///
/// Writers are the login/logout flow and the administrative role-editing
/// flow; this crate only reads the keys in [`crate::session::keys`] and
/// reacts to their change events. Single-key reads are atomic; there is
/// no multi-key transaction and none is needed, because the claims loader
/// replaces its whole snapshot on every reload.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read one key
    async fn get(&self, key: &str) -> Option<String>;

    /// Write one key, notifying subscribers
    async fn set(&self, key: &str, value: &str);

    /// Remove one key, notifying subscribers
    async fn remove(&self, key: &str);

    /// Subscribe to change events for all keys
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}

/// In-process store backed by a `HashMap`
///
/// The default store, and the substitute used by tests in place of
/// browser-persisted storage.
#[derive(Debug)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    events: broadcast::Sender<StoreEvent>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            entries: RwLock::new(HashMap::new()),
            events,
        }
    }

    fn notify(&self, key: &str) {
        // No subscribers is fine; events are best-effort.
        let _ = self.events.send(StoreEvent {
            key: key.to_string(),
        });
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        debug!("Session store write: {}", key);
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        self.notify(key);
    }

    async fn remove(&self, key: &str) {
        debug!("Session store remove: {}", key);
        self.entries.write().remove(key);
        self.notify(key);
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
