//! Purchase repository seam.
//!
//! Statuses are mutated exclusively through version-checked commits, so two
//! concurrent callers advancing the same purchase from the same snapshot can
//! never both win: the second commit fails with `StaleState` and its side
//! effects are never dispatched.

use std::collections::HashMap;
use std::sync::RwLock;

use coachflow_core::{ExpectedVersion, PurchaseId, WorkflowError, WorkflowResult};
use coachflow_engagement::{Purchase, PurchaseStatus};

pub trait PurchaseRepository: Send + Sync {
    /// Load a fresh snapshot of the purchase.
    fn load(&self, id: PurchaseId) -> WorkflowResult<Purchase>;

    /// Persist a new status, enforcing the version expectation.
    ///
    /// Returns the committed snapshot (version incremented) or `StaleState`
    /// when the purchase moved since the caller's read.
    fn commit(
        &self,
        id: PurchaseId,
        expected: ExpectedVersion,
        new_status: PurchaseStatus,
    ) -> WorkflowResult<Purchase>;
}

/// In-memory repository for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryPurchaseRepository {
    purchases: RwLock<HashMap<PurchaseId, Purchase>>,
}

impl InMemoryPurchaseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, purchase: Purchase) {
        if let Ok(mut purchases) = self.purchases.write() {
            purchases.insert(purchase.id, purchase);
        }
    }
}

impl PurchaseRepository for InMemoryPurchaseRepository {
    fn load(&self, id: PurchaseId) -> WorkflowResult<Purchase> {
        let purchases = self
            .purchases
            .read()
            .map_err(|_| WorkflowError::stale_state("purchase store lock poisoned"))?;
        purchases.get(&id).cloned().ok_or(WorkflowError::NotFound)
    }

    fn commit(
        &self,
        id: PurchaseId,
        expected: ExpectedVersion,
        new_status: PurchaseStatus,
    ) -> WorkflowResult<Purchase> {
        let mut purchases = self
            .purchases
            .write()
            .map_err(|_| WorkflowError::stale_state("purchase store lock poisoned"))?;
        let purchase = purchases.get_mut(&id).ok_or(WorkflowError::NotFound)?;

        expected.check(purchase.version)?;

        purchase.status = new_status;
        purchase.version += 1;
        Ok(purchase.clone())
    }
}
