//! Permission sets and role classification
//!
//! Permission codes are the only authoritative input to access decisions;
//! role names decorate the UI and act as a fallback signal only where the
//! codes are silent. The classification logic lives in exactly one place,
//! [`classify`], so every page resolves its view through the same rules.

pub mod classify;
pub mod permission_set;

pub use classify::{PrimaryRole, RoleClassification, classify};
pub use permission_set::PermissionSet;
