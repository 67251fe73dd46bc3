//! Meeting snapshot, created as a side effect of scheduling transitions and
//! updated externally by the scheduling collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coachflow_core::{MeetingId, PurchaseId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingStatus {
    Scheduled,
    Completed,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    pub purchase_id: Option<PurchaseId>,
    pub student: UserId,
    pub professional: UserId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: MeetingStatus,
    pub link: Option<String>,
}

impl Meeting {
    /// A meeting whose window has passed but is still marked `Scheduled` has
    /// happened without being processed by the professional.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.ends_at < now
    }
}
