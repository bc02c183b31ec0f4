//! Wire shapes of the external endpoints
//!
//! The backend owns these contracts; this module only mirrors them.

use crate::session::RoleId;
use serde::{Deserialize, Serialize};

/// One entry from the roles listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecord {
    /// Role identifier, matched against the cached user's role ids
    pub id: RoleId,
    /// Human-readable role name, display only
    pub name: String,
}

/// One entry from the permissions endpoint
///
/// Older backends return plain strings, newer ones `{ "code": ... }`
/// objects; both appear in the wild, sometimes mixed in one response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionEntry {
    Coded { code: String },
    Plain(String),
}

impl PermissionEntry {
    /// The permission code carried by this entry
    pub fn into_code(self) -> String {
        match self {
            PermissionEntry::Coded { code } => code,
            PermissionEntry::Plain(code) => code,
        }
    }
}
