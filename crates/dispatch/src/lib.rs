//! `coachflow-dispatch` — the boundary between the workflow core and its
//! external collaborators.
//!
//! The engine decides; this crate executes. It maps each side-effect intent to
//! exactly one collaborator call, enforces the optimistic version check on
//! status writes, and orchestrates the load → advance → commit → dispatch
//! pipeline.
//!
//! Delivery policy is **at-least-once**: a status transition that has been
//! committed is never rolled back because a side effect failed. Statuses are
//! the source of truth for workflow progress; failed intents are reported to
//! the caller for manual retry ("status updated, but notification failed"),
//! never hidden and never used to revert state.

pub mod collaborators;
pub mod dispatcher;
pub mod repository;
pub mod service;

pub use collaborators::{
    CollaboratorError, DietComposer, MeetingScheduler, Notifier, TrainingPlanner,
};
pub use dispatcher::{DispatchError, IntentOutcome, SideEffectDispatcher};
pub use repository::{InMemoryPurchaseRepository, PurchaseRepository};
pub use service::{AdvanceReport, WorkflowService};
