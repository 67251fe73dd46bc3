//! Side-effect execution: one intent, one collaborator call.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use coachflow_core::MeetingId;
use coachflow_engagement::SideEffectIntent;

use crate::collaborators::{
    CollaboratorError, DietComposer, MeetingScheduler, Notifier, TrainingPlanner,
};

/// What a successfully executed intent produced. Serialized into the
/// partial-success report the UI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentOutcome {
    MeetingCreated(MeetingId),
    DietCreated(Uuid),
    TrainingWeekCreated(Uuid),
    NotificationSent,
}

/// A specific side effect failed. The status transition has already
/// committed; the caller surfaces a partial-success warning and may retry
/// just this intent.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchError {
    #[error("meeting scheduling failed: {0}")]
    Meeting(CollaboratorError),

    #[error("diet creation failed: {0}")]
    Diet(CollaboratorError),

    #[error("training week creation failed: {0}")]
    Training(CollaboratorError),

    #[error("notification failed: {0}")]
    Notification(CollaboratorError),
}

/// Executes intents against the external collaborators.
///
/// Each intent type maps to exactly one collaborator call. Execution is
/// best-effort and at-least-once: a failed intent never rolls back the
/// committed status, and retrying a delivery may duplicate it.
pub struct SideEffectDispatcher {
    meetings: Arc<dyn MeetingScheduler>,
    diets: Arc<dyn DietComposer>,
    trainings: Arc<dyn TrainingPlanner>,
    notifier: Arc<dyn Notifier>,
}

impl SideEffectDispatcher {
    pub fn new(
        meetings: Arc<dyn MeetingScheduler>,
        diets: Arc<dyn DietComposer>,
        trainings: Arc<dyn TrainingPlanner>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            meetings,
            diets,
            trainings,
            notifier,
        }
    }

    pub fn execute(&self, intent: &SideEffectIntent) -> Result<IntentOutcome, DispatchError> {
        match intent {
            SideEffectIntent::CreateMeeting(details) => self
                .meetings
                .create_meeting(details)
                .map(|meeting| IntentOutcome::MeetingCreated(meeting.id))
                .map_err(DispatchError::Meeting),
            SideEffectIntent::CreateDiet(params) => self
                .diets
                .create_diet(params)
                .map(IntentOutcome::DietCreated)
                .map_err(DispatchError::Diet),
            SideEffectIntent::CreateTrainingWeek(params) => self
                .trainings
                .create_training_week(params)
                .map(IntentOutcome::TrainingWeekCreated)
                .map_err(DispatchError::Training),
            SideEffectIntent::Notify(notification) => self
                .notifier
                .notify(notification)
                .map(|()| IntentOutcome::NotificationSent)
                .map_err(DispatchError::Notification),
        }
    }

    /// Run every intent, returning a per-intent result.
    ///
    /// One failure does not stop the rest: partial failure stays visible so
    /// the caller can retry exactly the intents that failed.
    pub fn execute_all(
        &self,
        intents: &[SideEffectIntent],
    ) -> Vec<(SideEffectIntent, Result<IntentOutcome, DispatchError>)> {
        intents
            .iter()
            .map(|intent| {
                let result = self.execute(intent);
                if let Err(ref err) = result {
                    warn!(%err, "side effect failed; status commit stands");
                }
                (intent.clone(), result)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::sync::Mutex;

    use coachflow_core::{PurchaseId, UserId};
    use coachflow_engagement::{
        DietParams, Meeting, MeetingDetails, MeetingStatus, Notification, TrainingWeekParams,
    };

    struct FakeScheduler;

    impl MeetingScheduler for FakeScheduler {
        fn create_meeting(&self, details: &MeetingDetails) -> Result<Meeting, CollaboratorError> {
            Ok(Meeting {
                id: MeetingId::new(),
                purchase_id: Some(details.purchase_id),
                student: details.student,
                professional: details.professional,
                starts_at: details.starts_at,
                ends_at: details.ends_at,
                status: MeetingStatus::Scheduled,
                link: details.link.clone(),
            })
        }
    }

    struct FakeComposer;

    impl DietComposer for FakeComposer {
        fn create_diet(&self, _params: &DietParams) -> Result<Uuid, CollaboratorError> {
            Ok(Uuid::now_v7())
        }
    }

    struct FakePlanner;

    impl TrainingPlanner for FakePlanner {
        fn create_training_week(
            &self,
            _params: &TrainingWeekParams,
        ) -> Result<Uuid, CollaboratorError> {
            Ok(Uuid::now_v7())
        }
    }

    struct RecordingNotifier {
        sent: Mutex<Vec<Notification>>,
        fail: bool,
    }

    impl RecordingNotifier {
        fn new(fail: bool) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: &Notification) -> Result<(), CollaboratorError> {
            if self.fail {
                return Err(CollaboratorError::new("smtp unreachable"));
            }
            self.sent.lock().unwrap().push(notification.clone());
            Ok(())
        }
    }

    fn dispatcher(notifier: Arc<RecordingNotifier>) -> SideEffectDispatcher {
        SideEffectDispatcher::new(
            Arc::new(FakeScheduler),
            Arc::new(FakeComposer),
            Arc::new(FakePlanner),
            notifier,
        )
    }

    fn sample_intents() -> Vec<SideEffectIntent> {
        let student = UserId::new();
        let starts_at = Utc::now() + Duration::days(1);
        vec![
            SideEffectIntent::CreateMeeting(MeetingDetails {
                purchase_id: PurchaseId::new(),
                student,
                professional: UserId::new(),
                starts_at,
                ends_at: starts_at + Duration::hours(1),
                link: None,
            }),
            SideEffectIntent::Notify(Notification {
                recipient: student,
                title: "Meeting scheduled".to_string(),
                message: "Your meeting has been scheduled.".to_string(),
                link: None,
                note: None,
            }),
        ]
    }

    #[test]
    fn each_intent_maps_to_its_collaborator() {
        let notifier = Arc::new(RecordingNotifier::new(false));
        let dispatcher = dispatcher(notifier.clone());

        let results = dispatcher.execute_all(&sample_intents());

        assert!(matches!(
            results[0].1,
            Ok(IntentOutcome::MeetingCreated(_))
        ));
        assert!(matches!(results[1].1, Ok(IntentOutcome::NotificationSent)));
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn one_failure_does_not_stop_the_rest() {
        let notifier = Arc::new(RecordingNotifier::new(true));
        let dispatcher = dispatcher(notifier);

        let results = dispatcher.execute_all(&sample_intents());

        assert!(results[0].1.is_ok());
        assert!(matches!(results[1].1, Err(DispatchError::Notification(_))));
    }
}
