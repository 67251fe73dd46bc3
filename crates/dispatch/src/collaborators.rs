//! External collaborator contracts.
//!
//! One trait per outbound surface: meeting scheduling, diet creation,
//! training-week creation, notification delivery. Production code implements
//! these against the real HTTP/calendar/mail services; tests use in-memory
//! fakes.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use coachflow_engagement::{DietParams, Meeting, MeetingDetails, Notification, TrainingWeekParams};

/// Failure reported by an external collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("collaborator call failed: {0}")]
pub struct CollaboratorError(pub String);

impl CollaboratorError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Meeting-scheduling collaborator (e.g. a calendar/video-call service).
pub trait MeetingScheduler: Send + Sync {
    fn create_meeting(&self, details: &MeetingDetails) -> Result<Meeting, CollaboratorError>;
}

/// Diet-creation collaborator.
pub trait DietComposer: Send + Sync {
    fn create_diet(&self, params: &DietParams) -> Result<Uuid, CollaboratorError>;
}

/// Training-week-creation collaborator.
pub trait TrainingPlanner: Send + Sync {
    fn create_training_week(
        &self,
        params: &TrainingWeekParams,
    ) -> Result<Uuid, CollaboratorError>;
}

/// Notification collaborator (title, message, recipient, optional link).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> Result<(), CollaboratorError>;
}
