//! `coachflow-tasks` — derived task list for professionals.
//!
//! Tasks are projections: recomputed from purchase/meeting state on every
//! read, never stored as the source of truth. The projector is a pure
//! function of its inputs so the dashboard stays consistent after any
//! transition, and task ids are derived deterministically so re-projection
//! never changes task identity.

pub mod projector;

pub use projector::{project, project_now, Task, TaskKind, TaskPriority};
