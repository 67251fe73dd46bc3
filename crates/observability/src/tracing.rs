//! Tracing/logging initialization for processes embedding the workflow core.

use tracing_subscriber::EnvFilter;

/// Initialize JSON logging with the standard default (`info`).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default("info");
}

/// Initialize JSON logging with an explicit default filter directive, used
/// when `RUST_LOG` is unset (e.g. `"coachflow=debug"` in tests).
pub fn init_with_default(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_target(false)
        .try_init();
}
