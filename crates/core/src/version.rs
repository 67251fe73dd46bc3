//! Optimistic-concurrency primitive for purchase mutations.

use crate::error::{WorkflowError, WorkflowResult};

/// Version expectation for a purchase write.
///
/// Concurrent callers racing to advance the same purchase both read the same
/// snapshot version; the repository checks this expectation on commit so that
/// exactly one write wins and the loser surfaces `StaleState` to its caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Skip version checking (useful for migrations and seeding).
    Any,
    /// Require the purchase to be at an exact version.
    Exact(u64),
}

impl ExpectedVersion {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Exact(v) => v == actual,
        }
    }

    pub fn check(self, actual: u64) -> WorkflowResult<()> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(WorkflowError::stale_state(format!(
                "optimistic concurrency check failed (expected: {self:?}, actual: {actual})"
            )))
        }
    }
}
