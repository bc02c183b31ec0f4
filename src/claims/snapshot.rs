//! Claims snapshot

use crate::authz::{PermissionSet, RoleClassification, classify};
use crate::session::UNKNOWN_USER;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire::RoleRecord;

/// One complete, immutable read of the session's claims
///
/// A refresh builds a whole new snapshot and atomically replaces the
/// previous one; partial or merged state is never constructed, so
/// concurrent reloads are idempotent and the last completed fetch wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimsSnapshot {
    /// Authoritative permission codes; the only input to access decisions
    pub permissions: PermissionSet,
    /// Display name of the actor, or the "Unknown User" sentinel
    pub current_user: String,
    /// Resolved role names, display only; raw ids where no name matched
    pub role_names: Vec<String>,
    /// The roles listing as fetched, for administrative display
    pub roles: Vec<RoleRecord>,
    /// When this snapshot was taken
    pub fetched_at: DateTime<Utc>,
    /// False only for the placeholder published before the first refresh
    ///
    /// Lets views render a neutral loading state instead of flashing the
    /// no-access variant while the first fetch is in flight.
    pub loaded: bool,
}

impl ClaimsSnapshot {
    /// The empty, fail-closed snapshot
    ///
    /// Used before the first load and whenever no token is present, so an
    /// actor with stale or unreachable permissions gets zero access
    /// rather than cached or elevated access.
    pub fn unauthenticated() -> Self {
        Self {
            permissions: PermissionSet::new(),
            current_user: UNKNOWN_USER.to_string(),
            role_names: Vec::new(),
            roles: Vec::new(),
            fetched_at: Utc::now(),
            loaded: false,
        }
    }

    /// Classify this snapshot's claims into role flags
    pub fn classification(&self) -> RoleClassification {
        classify(&self.permissions, &self.role_names)
    }
}
