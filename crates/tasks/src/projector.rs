//! Task projection rules.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use coachflow_core::{PurchaseId, TaskId, UserId};
use coachflow_engagement::{Meeting, MeetingStatus, Purchase, PurchaseStatus};

/// Namespace for derived task ids (UUIDv5 over purchase id + kind tag).
const TASK_ID_NAMESPACE: Uuid = Uuid::from_u128(0x5f1c_9b4e_a2d3_4c8b_9e61_7a0d_2f4b_8c35);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Meeting,
    Diet,
    Other,
}

impl TaskKind {
    fn tag(self) -> &'static str {
        match self {
            TaskKind::Meeting => "meeting",
            TaskKind::Diet => "diet",
            TaskKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// A derived, non-authoritative reminder surfaced to a professional.
///
/// `completed` is always projected `false`: completion is an external overlay
/// keyed by the derived task id, not state this core owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub due_date: DateTime<Utc>,
    pub priority: TaskPriority,
    pub student: UserId,
    pub kind: TaskKind,
    pub completed: bool,
}

/// Deterministic task id: the same purchase and task kind always derive the
/// same id, so re-projection is idempotent.
fn derive_task_id(purchase_id: PurchaseId, kind: TaskKind) -> TaskId {
    let name = format!("{}:{}", purchase_id, kind.tag());
    TaskId::from_uuid(Uuid::new_v5(&TASK_ID_NAMESPACE, name.as_bytes()))
}

fn task(
    purchase: &Purchase,
    kind: TaskKind,
    priority: TaskPriority,
    title: &str,
    due_in: Duration,
    now: DateTime<Utc>,
) -> Task {
    Task {
        id: derive_task_id(purchase.id, kind),
        title: title.to_string(),
        due_date: now + due_in,
        priority,
        student: purchase.buyer,
        kind,
        completed: false,
    }
}

/// Build the outstanding-task list from the current snapshot.
///
/// Pure and deterministic: identical inputs (including `now`) produce
/// identical output. Rules:
///
/// - `ScheduleMeeting` → meeting task, high priority, due in 3 days.
/// - `ScheduledMeeting` with a linked meeting whose window has passed but is
///   still `Scheduled` → "Send spreadsheet" diet task, high, due in 2 days
///   (a completed-but-unprocessed meeting).
/// - `WaitingSpreadsheet` → "Send spreadsheet" diet task, high, due in 2 days.
/// - `ScheduleReturn` → "Schedule return" meeting task, medium, due in 5 days.
/// - All other statuses → no task.
pub fn project(purchases: &[Purchase], meetings: &[Meeting], now: DateTime<Utc>) -> Vec<Task> {
    let mut tasks = Vec::new();

    for purchase in purchases {
        match purchase.status {
            PurchaseStatus::ScheduleMeeting => tasks.push(task(
                purchase,
                TaskKind::Meeting,
                TaskPriority::High,
                "Schedule meeting",
                Duration::days(3),
                now,
            )),
            PurchaseStatus::ScheduledMeeting => {
                let stale_meeting = meetings.iter().any(|m| {
                    m.purchase_id == Some(purchase.id)
                        && m.status == MeetingStatus::Scheduled
                        && m.has_ended(now)
                });
                if stale_meeting {
                    tasks.push(task(
                        purchase,
                        TaskKind::Diet,
                        TaskPriority::High,
                        "Send spreadsheet",
                        Duration::days(2),
                        now,
                    ));
                }
            }
            PurchaseStatus::WaitingSpreadsheet => tasks.push(task(
                purchase,
                TaskKind::Diet,
                TaskPriority::High,
                "Send spreadsheet",
                Duration::days(2),
                now,
            )),
            PurchaseStatus::ScheduleReturn => tasks.push(task(
                purchase,
                TaskKind::Meeting,
                TaskPriority::Medium,
                "Schedule return",
                Duration::days(5),
                now,
            )),
            PurchaseStatus::WaitingPayment
            | PurchaseStatus::SpreadsheetSent
            | PurchaseStatus::Finalized => {}
        }
    }

    tasks
}

/// Projection at the current instant. The only place wall-clock time enters.
pub fn project_now(purchases: &[Purchase], meetings: &[Meeting]) -> Vec<Task> {
    project(purchases, meetings, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coachflow_core::{MeetingId, PlanId};

    fn purchase_in(status: PurchaseStatus) -> Purchase {
        let mut purchase = Purchase::new(
            PurchaseId::new(),
            UserId::new(),
            UserId::new(),
            PlanId::new(),
            20_000,
            Utc::now(),
        );
        purchase.status = status;
        purchase
    }

    fn meeting_for(purchase: &Purchase, ends_at: DateTime<Utc>, status: MeetingStatus) -> Meeting {
        Meeting {
            id: MeetingId::new(),
            purchase_id: Some(purchase.id),
            student: purchase.buyer,
            professional: purchase.professional,
            starts_at: ends_at - Duration::hours(1),
            ends_at,
            status,
            link: None,
        }
    }

    #[test]
    fn schedule_meeting_emits_high_priority_meeting_task() {
        let purchase = purchase_in(PurchaseStatus::ScheduleMeeting);
        let now = Utc::now();

        let tasks = project(&[purchase.clone()], &[], now);

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].kind, TaskKind::Meeting);
        assert_eq!(tasks[0].priority, TaskPriority::High);
        assert_eq!(tasks[0].due_date, now + Duration::days(3));
        assert_eq!(tasks[0].student, purchase.buyer);
        assert!(!tasks[0].completed);
    }

    #[test]
    fn overdue_scheduled_meeting_emits_send_spreadsheet_task() {
        let purchase = purchase_in(PurchaseStatus::ScheduledMeeting);
        let now = Utc::now();
        let meeting = meeting_for(&purchase, now - Duration::hours(3), MeetingStatus::Scheduled);

        let tasks = project(&[purchase], &[meeting], now);

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].kind, TaskKind::Diet);
        assert_eq!(tasks[0].title, "Send spreadsheet");
        assert_eq!(tasks[0].due_date, now + Duration::days(2));
    }

    #[test]
    fn upcoming_or_processed_meetings_emit_nothing() {
        let purchase = purchase_in(PurchaseStatus::ScheduledMeeting);
        let now = Utc::now();

        let upcoming = meeting_for(&purchase, now + Duration::hours(3), MeetingStatus::Scheduled);
        assert!(project(&[purchase.clone()], &[upcoming], now).is_empty());

        let processed = meeting_for(&purchase, now - Duration::hours(3), MeetingStatus::Completed);
        assert!(project(&[purchase], &[processed], now).is_empty());
    }

    #[test]
    fn waiting_spreadsheet_emits_diet_task_without_any_meeting() {
        let purchase = purchase_in(PurchaseStatus::WaitingSpreadsheet);
        let now = Utc::now();

        let tasks = project(&[purchase], &[], now);

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].kind, TaskKind::Diet);
        assert_eq!(tasks[0].priority, TaskPriority::High);
    }

    #[test]
    fn schedule_return_emits_medium_priority_task_due_in_five_days() {
        let purchase = purchase_in(PurchaseStatus::ScheduleReturn);
        let now = Utc::now();

        let tasks = project(&[purchase], &[], now);

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Schedule return");
        assert_eq!(tasks[0].priority, TaskPriority::Medium);
        assert_eq!(tasks[0].due_date, now + Duration::days(5));
    }

    #[test]
    fn quiet_statuses_emit_no_tasks() {
        let now = Utc::now();
        for status in [
            PurchaseStatus::WaitingPayment,
            PurchaseStatus::SpreadsheetSent,
            PurchaseStatus::Finalized,
        ] {
            assert!(project(&[purchase_in(status)], &[], now).is_empty(), "{status:?}");
        }
    }

    #[test]
    fn projection_is_deterministic() {
        let purchases = vec![
            purchase_in(PurchaseStatus::ScheduleMeeting),
            purchase_in(PurchaseStatus::WaitingSpreadsheet),
            purchase_in(PurchaseStatus::ScheduleReturn),
        ];
        let now = Utc::now();

        let first = project(&purchases, &[], now);
        let second = project(&purchases, &[], now);

        assert_eq!(first, second);
    }

    #[test]
    fn task_id_is_stable_across_projections_but_varies_by_kind() {
        let purchase = purchase_in(PurchaseStatus::ScheduleMeeting);
        let a = derive_task_id(purchase.id, TaskKind::Meeting);
        let b = derive_task_id(purchase.id, TaskKind::Meeting);
        let c = derive_task_id(purchase.id, TaskKind::Diet);
        let other = derive_task_id(PurchaseId::new(), TaskKind::Meeting);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, other);
    }
}
