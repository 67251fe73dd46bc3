//! `coachflow-core` — foundation building blocks for the engagement workflow.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod version;

pub use error::{WorkflowError, WorkflowResult};
pub use id::{MeetingId, PlanId, PurchaseId, TaskId, UserId};
pub use version::ExpectedVersion;
