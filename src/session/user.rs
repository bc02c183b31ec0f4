//! Cached user record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display sentinel for an unknown or unauthenticated actor
pub const UNKNOWN_USER: &str = "Unknown User";

/// A role identifier as the backend serializes it
///
/// Older deployments use numeric ids, newer ones strings; both compare
/// against [`crate::claims::RoleRecord::id`] for name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleId::Int(id) => write!(f, "{}", id),
            RoleId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// The `roles` field as written by the various login flows over time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RolesField {
    Many(Vec<RoleId>),
    One(String),
}

/// Last-known user record persisted client-side
///
/// May be stale relative to the backend; it feeds display and role-id
/// lookup only, never access decisions. Deserialization is tolerant of
/// the historical field shapes (`role_ids`, `roles` as id list, name
/// list, or a single string).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CachedUser {
    /// Stable user id
    #[serde(default)]
    pub id: Option<RoleId>,
    /// Full display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Login name
    #[serde(default)]
    pub username: Option<String>,
    /// Attached role ids, preferred field
    #[serde(default)]
    role_ids: Option<Vec<RoleId>>,
    /// Attached roles, legacy field
    #[serde(default)]
    roles: Option<RolesField>,
}

impl CachedUser {
    /// Name to display for this user
    pub fn display_name(&self) -> String {
        self.full_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.username.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(UNKNOWN_USER)
            .to_string()
    }

    /// Role identifiers attached to this user
    ///
    /// `role_ids` wins when present and non-empty; otherwise the legacy
    /// `roles` field is flattened. Order is preserved for display.
    pub fn role_idents(&self) -> Vec<RoleId> {
        if let Some(ids) = &self.role_ids {
            if !ids.is_empty() {
                return ids.clone();
            }
        }
        match &self.roles {
            Some(RolesField::Many(ids)) => ids.clone(),
            Some(RolesField::One(name)) => vec![RoleId::Text(name.clone())],
            None => Vec::new(),
        }
    }
}
