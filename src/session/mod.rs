//! Session persistence and change signals
//!
//! The portal keeps its session state (bearer token, cached user record,
//! and an administrative "permissions changed" marker) in a key/value
//! store shared by every open view. This module abstracts that store
//! behind a trait so the claims loader can be fed by a browser-backed
//! store in production and an in-memory fake in tests.

pub mod keys;
pub mod store;
pub mod user;

pub use store::{MemoryStore, SessionStore, StoreEvent};
pub use user::{CachedUser, RoleId, UNKNOWN_USER};
