//! Workflow error model.

use thiserror::Error;

/// Result type used across the workflow core.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Workflow-level error.
///
/// Keep this focused on deterministic, business-rule failures. Infrastructure
/// concerns (side-effect delivery) live in the dispatch layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// Requested next-status is not permitted from the current status.
    ///
    /// Always a caller bug or a stale-UI race; never retried automatically.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Repository-level conflict: the purchase was mutated concurrently.
    ///
    /// Callers should reload the purchase and retry.
    #[error("stale state: {0}")]
    StaleState(String),

    /// Transition context failed validation (e.g. missing meeting details).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The purchase is unknown to the repository.
    #[error("purchase not found")]
    NotFound,
}

impl WorkflowError {
    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn stale_state(msg: impl Into<String>) -> Self {
        Self::StaleState(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
