//! Side-effect intents: descriptions of external work a transition requires.
//!
//! The engine returns intents; it never executes them. The dispatch layer maps
//! each intent to exactly one external collaborator call, so partial failure
//! (e.g. meeting created but notification failed) stays visible and retryable
//! by the caller instead of being hidden inside the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coachflow_core::{PurchaseId, UserId};

/// Details for a meeting the scheduling collaborator should create.
///
/// `purchase_id` links the meeting back to its purchase; the engine stamps it
/// from the snapshot being advanced, so the task projector can later match
/// the meeting to the purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingDetails {
    pub purchase_id: PurchaseId,
    pub student: UserId,
    pub professional: UserId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub link: Option<String>,
}

/// Parameters for the diet-creation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietParams {
    pub student: UserId,
    pub title: String,
    pub notes: Option<String>,
}

/// Parameters for the training-week-creation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingWeekParams {
    pub student: UserId,
    pub title: String,
    pub notes: Option<String>,
}

/// Message for the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub recipient: UserId,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    /// Caller-supplied free text, forwarded unmodified.
    pub note: Option<String>,
}

/// One side effect a committed transition requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SideEffectIntent {
    CreateMeeting(MeetingDetails),
    CreateDiet(DietParams),
    CreateTrainingWeek(TrainingWeekParams),
    Notify(Notification),
}
