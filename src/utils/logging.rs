//! Logging setup for library consumers
//!
//! The crate itself only emits `tracing` events; initializing a subscriber
//! is left to the host application. These helpers cover the common cases.

use tracing_subscriber::EnvFilter;

/// Initialize a formatted subscriber with an env-filter.
///
/// Reads `RUST_LOG` when set, otherwise defaults to `info`. Safe to call
/// more than once; subsequent calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}

/// Initialize a JSON subscriber for structured log collection.
pub fn init_json_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
