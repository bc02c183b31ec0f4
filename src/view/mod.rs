//! View resolution
//!
//! Maps a role classification and a logical page to the concrete view
//! variant to mount and the actions that view enables. Deterministic over
//! its inputs; nothing here talks to the backend.

pub mod menu;
pub mod optimistic;
pub mod page;
pub mod resolver;

pub use menu::{MenuEntry, Requirement, default_menu, visible_entries};
pub use optimistic::OverrideCache;
pub use page::Page;
pub use resolver::{Action, PageContext, ViewResolution, ViewVariant, resolve, resolve_key};
