//! Optimistic write overlay
//!
//! Status edits show their new value immediately while the backend
//! catches up. An optimistic value is valid until the next successful
//! authoritative refetch supersedes it, with a bounded time-to-live as a
//! backstop when no refetch arrives. No eviction beyond the timestamp
//! check.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

struct OverrideEntry<V> {
    value: V,
    written_at: Instant,
    expires_at: Instant,
}

/// Time-boxed overlay of locally written values keyed by record id
pub struct OverrideCache<V> {
    ttl: Duration,
    entries: RwLock<HashMap<String, OverrideEntry<V>>>,
}

impl<V: Clone> OverrideCache<V> {
    /// Create a cache whose entries live at most `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Record an optimistic write for `id`
    pub fn put<S: Into<String>>(&self, id: S, value: V) {
        let now = Instant::now();
        self.entries.write().insert(
            id.into(),
            OverrideEntry {
                value,
                written_at: now,
                expires_at: now + self.ttl,
            },
        );
    }

    /// The optimistic value for `id`, if still live
    pub fn get(&self, id: &str) -> Option<V> {
        let entries = self.entries.read();
        entries
            .get(id)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone())
    }

    /// The value to display: the live override, else the authoritative one
    pub fn overlay(&self, id: &str, authoritative: V) -> V {
        self.get(id).unwrap_or(authoritative)
    }

    /// Drop entries superseded by an authoritative refetch
    ///
    /// A fetch that started after an entry was written has observed the
    /// backend's own view of that write; the entry is no longer needed.
    /// Expired entries are dropped as well.
    pub fn reconcile(&self, fetch_started_at: Instant) {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.written_at > fetch_started_at && entry.expires_at > now);
        let dropped = before - entries.len();
        if dropped > 0 {
            debug!("Reconciled {} optimistic overrides", dropped);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }
}
