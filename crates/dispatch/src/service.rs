//! Workflow orchestration pipeline.
//!
//! ```text
//! AdvancePurchase
//!   ↓
//! 1. Load purchase snapshot (repository)
//!   ↓
//! 2. Validate transition, derive intents (engine, pure)
//!   ↓
//! 3. Commit new status (repository, optimistic version check)
//!   ↓
//! 4. Execute intents (dispatcher, at-least-once)
//! ```
//!
//! Steps 1-3 are all-or-nothing: an invalid transition or a stale snapshot
//! aborts before any side effect runs. Step 4 never aborts the commit; failed
//! intents are reported for manual retry.

use tracing::info;

use coachflow_core::{ExpectedVersion, PurchaseId, WorkflowResult};
use coachflow_engagement::{
    Purchase, PurchaseStatus, SideEffectIntent, TransitionContext, WorkflowEngine,
};

use crate::dispatcher::{DispatchError, IntentOutcome, SideEffectDispatcher};
use crate::repository::PurchaseRepository;

/// Result of an advance request: the committed purchase plus per-intent
/// side-effect outcomes.
#[derive(Debug)]
pub struct AdvanceReport {
    pub purchase: Purchase,
    pub executed: Vec<IntentOutcome>,
    pub failed: Vec<(SideEffectIntent, DispatchError)>,
}

impl AdvanceReport {
    /// True when every required side effect ran. When false, the status
    /// commit still stands; `failed` lists the intents to retry.
    pub fn is_fully_applied(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Application service tying repository, engine, and dispatcher together.
pub struct WorkflowService<R: PurchaseRepository> {
    repository: R,
    dispatcher: SideEffectDispatcher,
}

impl<R: PurchaseRepository> WorkflowService<R> {
    pub fn new(repository: R, dispatcher: SideEffectDispatcher) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Advance a purchase to `requested`, committing the new status and
    /// executing the transition's side effects.
    pub fn advance_purchase(
        &self,
        id: PurchaseId,
        requested: PurchaseStatus,
        ctx: &TransitionContext,
    ) -> WorkflowResult<AdvanceReport> {
        let snapshot = self.repository.load(id)?;
        let outcome = WorkflowEngine::advance(&snapshot, requested, ctx)?;

        let purchase = self.repository.commit(
            id,
            ExpectedVersion::Exact(snapshot.version),
            outcome.new_status,
        )?;

        info!(
            purchase = %id,
            from = %snapshot.status,
            to = %purchase.status,
            intents = outcome.intents.len(),
            "purchase transition committed"
        );

        let mut executed = Vec::new();
        let mut failed = Vec::new();
        for (intent, result) in self.dispatcher.execute_all(&outcome.intents) {
            match result {
                Ok(outcome) => executed.push(outcome),
                Err(err) => failed.push((intent, err)),
            }
        }

        Ok(AdvanceReport {
            purchase,
            executed,
            failed,
        })
    }
}
