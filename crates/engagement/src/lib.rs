//! `coachflow-engagement` — the professional-engagement workflow.
//!
//! A purchase moves through a fixed, closed status graph from payment to
//! finalization. This crate owns that graph: status metadata, the transition
//! table, and the engine that validates a requested transition and emits the
//! side effects it requires. The engine is pure; executing side effects and
//! persisting the new status belong to the dispatch layer.

pub mod engine;
pub mod intent;
pub mod meeting;
pub mod purchase;
pub mod status;

pub use engine::{TransitionContext, TransitionOutcome, WorkflowEngine};
pub use intent::{DietParams, MeetingDetails, Notification, SideEffectIntent, TrainingWeekParams};
pub use meeting::{Meeting, MeetingStatus};
pub use purchase::Purchase;
pub use status::{PurchaseStatus, StatusInfo};
