//! Workflow engine: validates a requested transition and emits the side
//! effects it requires.

use serde::{Deserialize, Serialize};

use coachflow_core::{WorkflowError, WorkflowResult};

use crate::intent::{DietParams, MeetingDetails, Notification, SideEffectIntent, TrainingWeekParams};
use crate::purchase::Purchase;
use crate::status::PurchaseStatus;

/// Caller-supplied context for a transition.
///
/// Meeting-creating transitions require `meeting_details`; the spreadsheet
/// transition requires `diet_params` and `training_params`. `note` is free
/// text forwarded unmodified inside the notification intent, when the
/// transition emits one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionContext {
    pub meeting_details: Option<MeetingDetails>,
    pub diet_params: Option<DietParams>,
    pub training_params: Option<TrainingWeekParams>,
    pub note: Option<String>,
}

/// Result of a validated transition: the status to persist plus the side
/// effects the dispatcher must run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub new_status: PurchaseStatus,
    pub intents: Vec<SideEffectIntent>,
}

/// Stateless transition validator.
///
/// `advance` is pure: it reads the purchase snapshot, checks the transition
/// table, and returns the new status plus intents. Persisting the status and
/// executing intents belong to the caller. A request re-sent after its
/// transition committed fails with `InvalidTransition`, because the snapshot
/// has already moved past the requested status; side effects are never
/// silently re-applied.
pub struct WorkflowEngine;

impl WorkflowEngine {
    pub fn advance(
        purchase: &Purchase,
        requested: PurchaseStatus,
        ctx: &TransitionContext,
    ) -> WorkflowResult<TransitionOutcome> {
        if !purchase.status.can_transition_to(requested) {
            return Err(WorkflowError::invalid_transition(purchase.status, requested));
        }

        let intents = Self::intents_for(purchase, purchase.status, requested, ctx)?;
        Ok(TransitionOutcome {
            new_status: requested,
            intents,
        })
    }

    /// Side effects per transition pair. Pairs outside the table were already
    /// rejected by the caller.
    fn intents_for(
        purchase: &Purchase,
        from: PurchaseStatus,
        to: PurchaseStatus,
        ctx: &TransitionContext,
    ) -> WorkflowResult<Vec<SideEffectIntent>> {
        use PurchaseStatus::*;

        let intents = match (from, to) {
            // Payment confirmed; informational only.
            (WaitingPayment, ScheduleMeeting) => Vec::new(),

            (ScheduleMeeting, ScheduledMeeting) | (ScheduleReturn, ScheduledMeeting) => {
                let mut details = ctx.meeting_details.clone().ok_or_else(|| {
                    WorkflowError::validation("meeting details are required to schedule a meeting")
                })?;
                // The engine owns the purchase link; whatever the caller put
                // there is overwritten with the snapshot being advanced.
                details.purchase_id = purchase.id;
                let link = details.link.clone();
                vec![
                    SideEffectIntent::CreateMeeting(details),
                    SideEffectIntent::Notify(Self::notify(
                        purchase,
                        "Meeting scheduled",
                        "Your meeting has been scheduled.",
                        link,
                        ctx,
                    )),
                ]
            }

            // Waiting state; nothing to do until the meeting happens.
            (ScheduledMeeting, WaitingSpreadsheet) => Vec::new(),

            (WaitingSpreadsheet, SpreadsheetSent) => {
                let diet = ctx.diet_params.clone().ok_or_else(|| {
                    WorkflowError::validation("diet parameters are required to send a spreadsheet")
                })?;
                let training = ctx.training_params.clone().ok_or_else(|| {
                    WorkflowError::validation(
                        "training week parameters are required to send a spreadsheet",
                    )
                })?;
                vec![
                    SideEffectIntent::CreateDiet(diet),
                    SideEffectIntent::CreateTrainingWeek(training),
                    SideEffectIntent::Notify(Self::notify(
                        purchase,
                        "Spreadsheet sent",
                        "Your diet and training spreadsheet is ready.",
                        None,
                        ctx,
                    )),
                ]
            }

            (SpreadsheetSent, ScheduleReturn) => vec![SideEffectIntent::Notify(Self::notify(
                purchase,
                "Status updated",
                "Your engagement moved to the return-scheduling stage.",
                None,
                ctx,
            ))],

            (ScheduleReturn, Finalized) => vec![SideEffectIntent::Notify(Self::notify(
                purchase,
                "Engagement finalized",
                "Your engagement has been finalized. Thank you!",
                None,
                ctx,
            ))],

            (from, to) => unreachable!(
                "transition {from} -> {to} is outside the table and rejected before intent derivation"
            ),
        };

        Ok(intents)
    }

    fn notify(
        purchase: &Purchase,
        title: &str,
        message: &str,
        link: Option<String>,
        ctx: &TransitionContext,
    ) -> Notification {
        Notification {
            recipient: purchase.buyer,
            title: title.to_string(),
            message: message.to_string(),
            link,
            note: ctx.note.clone(),
        }
    }
}
