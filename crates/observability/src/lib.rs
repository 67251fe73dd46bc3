//! `coachflow-observability` — process-level logging setup.

pub mod tracing;

pub use tracing::{init, init_with_default};
