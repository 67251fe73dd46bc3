//! Purchase snapshot: the unit the workflow tracks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coachflow_core::{PlanId, PurchaseId, UserId};

use crate::status::PurchaseStatus;

/// A student's paid engagement with a professional under a specific plan.
///
/// Owned by the purchase repository; the engine treats it as an immutable
/// snapshot per call. `version` increments on every committed mutation and
/// backs the optimistic-concurrency check on writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: PurchaseId,
    pub buyer: UserId,
    pub professional: UserId,
    pub plan: PlanId,
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: u64,
    pub status: PurchaseStatus,
    pub version: u64,
    pub created_at: DateTime<Utc>,
}

impl Purchase {
    /// New purchase as created by the payment collaborator.
    pub fn new(
        id: PurchaseId,
        buyer: UserId,
        professional: UserId,
        plan: PlanId,
        amount_cents: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            buyer,
            professional,
            plan,
            amount_cents,
            status: PurchaseStatus::WaitingPayment,
            version: 0,
            created_at,
        }
    }
}
