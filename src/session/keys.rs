//! Well-known session store keys

/// Bearer credential for the backend API
pub const ACCESS_TOKEN: &str = "access_token";

/// Cached user record, current spelling
pub const USER: &str = "user";

/// Cached user record, legacy spelling still written by older flows
pub const CURRENT_USER: &str = "currentUser";

/// Marker written when an administrator edits roles or permissions.
/// Only the write event matters; the value is not interpreted.
pub const PERMISSIONS_UPDATED: &str = "permissions_updated";

/// Keys checked for the cached user record, in order
pub const USER_KEYS: [&str; 2] = [USER, CURRENT_USER];

/// Keys whose writes must trigger a claims reload
pub const WATCHED_KEYS: [&str; 4] = [ACCESS_TOKEN, USER, CURRENT_USER, PERMISSIONS_UPDATED];
