//! # portal-access-rs
//!
//! Role resolution and view routing for a business administration portal.
//!
//! The portal backend exposes opaque permission codes (`"hr:access"`,
//! `"admin:manage"`, ...) and named roles per user. This crate turns that
//! raw data into the decisions the UI layer needs:
//!
//! - **Claims loading**: fetch the authoritative permission set and role
//!   list for the current session, fail-closed on any error.
//! - **Role classification**: a pure projection of permission codes (and,
//!   as a fallback, role names) into a small set of role flags with a
//!   strict precedence order.
//! - **View resolution**: pick which variant of a shared page to render
//!   and which actions are enabled, from the classification alone.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portal_access::{ClaimsLoader, MemoryStore, PortalConfig, SessionStore, session};
//! use portal_access::authz::classify;
//! use portal_access::view::{resolve, Page, PageContext};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PortalConfig::default();
//!     let store = Arc::new(MemoryStore::new());
//!     store.set(session::keys::ACCESS_TOKEN, "bearer-token").await;
//!
//!     let loader = Arc::new(ClaimsLoader::new(&config, store)?);
//!     let snapshot = loader.refresh().await;
//!
//!     let roles = classify(&snapshot.permissions, &snapshot.role_names);
//!     let view = resolve(Page::Tickets, &roles, &PageContext::default());
//!     println!("variant: {:?}, actions: {:?}", view.variant, view.actions);
//!
//!     // React to token changes and administrative permission edits.
//!     loader.clone().watch();
//!     Ok(())
//! }
//! ```
//!
//! ## Fail-Closed Policy
//!
//! A missing token, an unreachable backend, or a non-success status all
//! resolve to the empty permission set and the customer-default
//! classification. Stale or cached permissions are never reused.

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod authz;
pub mod claims;
pub mod config;
pub mod session;
pub mod utils;
pub mod view;

// Re-export main types
pub use authz::{PermissionSet, PrimaryRole, RoleClassification, classify};
pub use claims::{ClaimsLoader, ClaimsSnapshot, RoleRecord};
pub use config::PortalConfig;
pub use session::{CachedUser, MemoryStore, SessionStore, StoreEvent};
pub use utils::error::{PortalError, Result};
pub use view::{Action, Page, PageContext, ViewResolution, ViewVariant, resolve};
