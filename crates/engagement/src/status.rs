//! Purchase status lifecycle: the closed status set, display metadata, and
//! the transition table.

use serde::{Deserialize, Serialize};

/// Status of a purchase within the engagement workflow.
///
/// Exactly one of these values is active per purchase at any time. The set is
/// closed: no purchase may hold an undefined status, and every transition
/// between statuses is validated against [`PurchaseStatus::allowed_next`].
///
/// The original data carried `SCHEDULE RETURN` with a literal space; the tag
/// here serializes as `SCHEDULE_RETURN` and the human label comes from
/// [`PurchaseStatus::describe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseStatus {
    WaitingPayment,
    ScheduleMeeting,
    ScheduledMeeting,
    WaitingSpreadsheet,
    SpreadsheetSent,
    ScheduleReturn,
    Finalized,
}

/// Display metadata for a status, rendered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub label: &'static str,
    pub color_class: &'static str,
    pub progress_percent: u8,
}

impl PurchaseStatus {
    /// Every status in the workflow, in logical order.
    pub const ALL: [PurchaseStatus; 7] = [
        PurchaseStatus::WaitingPayment,
        PurchaseStatus::ScheduleMeeting,
        PurchaseStatus::ScheduledMeeting,
        PurchaseStatus::WaitingSpreadsheet,
        PurchaseStatus::SpreadsheetSent,
        PurchaseStatus::ScheduleReturn,
        PurchaseStatus::Finalized,
    ];

    /// Display metadata per status.
    ///
    /// Exhaustive match: a status cannot exist without a catalog entry.
    pub fn describe(self) -> StatusInfo {
        match self {
            PurchaseStatus::WaitingPayment => StatusInfo {
                label: "Waiting payment",
                color_class: "amber",
                progress_percent: 10,
            },
            PurchaseStatus::ScheduleMeeting => StatusInfo {
                label: "Schedule meeting",
                color_class: "blue",
                progress_percent: 25,
            },
            PurchaseStatus::ScheduledMeeting => StatusInfo {
                label: "Scheduled meeting",
                color_class: "indigo",
                progress_percent: 40,
            },
            PurchaseStatus::WaitingSpreadsheet => StatusInfo {
                label: "Waiting spreadsheet",
                color_class: "orange",
                progress_percent: 60,
            },
            PurchaseStatus::SpreadsheetSent => StatusInfo {
                label: "Spreadsheet sent",
                color_class: "purple",
                progress_percent: 75,
            },
            PurchaseStatus::ScheduleReturn => StatusInfo {
                label: "Schedule return",
                color_class: "cyan",
                progress_percent: 90,
            },
            PurchaseStatus::Finalized => StatusInfo {
                label: "Finalized",
                color_class: "green",
                progress_percent: 100,
            },
        }
    }

    /// Allowed next statuses from this one.
    ///
    /// `ScheduleReturn` is the only branching state: book a follow-up meeting
    /// or end the engagement. `Finalized` is terminal.
    pub fn allowed_next(self) -> &'static [PurchaseStatus] {
        match self {
            PurchaseStatus::WaitingPayment => &[PurchaseStatus::ScheduleMeeting],
            PurchaseStatus::ScheduleMeeting => &[PurchaseStatus::ScheduledMeeting],
            PurchaseStatus::ScheduledMeeting => &[PurchaseStatus::WaitingSpreadsheet],
            PurchaseStatus::WaitingSpreadsheet => &[PurchaseStatus::SpreadsheetSent],
            PurchaseStatus::SpreadsheetSent => &[PurchaseStatus::ScheduleReturn],
            PurchaseStatus::ScheduleReturn => {
                &[PurchaseStatus::ScheduledMeeting, PurchaseStatus::Finalized]
            }
            PurchaseStatus::Finalized => &[],
        }
    }

    pub fn can_transition_to(self, next: PurchaseStatus) -> bool {
        self.allowed_next().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_next().is_empty()
    }
}

impl core::fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.describe().label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_mapping_is_exact() {
        let expected = [
            (PurchaseStatus::WaitingPayment, 10),
            (PurchaseStatus::ScheduleMeeting, 25),
            (PurchaseStatus::ScheduledMeeting, 40),
            (PurchaseStatus::WaitingSpreadsheet, 60),
            (PurchaseStatus::SpreadsheetSent, 75),
            (PurchaseStatus::ScheduleReturn, 90),
            (PurchaseStatus::Finalized, 100),
        ];
        for (status, percent) in expected {
            assert_eq!(status.describe().progress_percent, percent, "{status:?}");
        }
    }

    #[test]
    fn transition_table_is_exact() {
        use PurchaseStatus::*;
        let expected: [(PurchaseStatus, &[PurchaseStatus]); 7] = [
            (WaitingPayment, &[ScheduleMeeting]),
            (ScheduleMeeting, &[ScheduledMeeting]),
            (ScheduledMeeting, &[WaitingSpreadsheet]),
            (WaitingSpreadsheet, &[SpreadsheetSent]),
            (SpreadsheetSent, &[ScheduleReturn]),
            (ScheduleReturn, &[ScheduledMeeting, Finalized]),
            (Finalized, &[]),
        ];
        for (status, next) in expected {
            assert_eq!(status.allowed_next(), next, "{status:?}");
        }
    }

    #[test]
    fn finalized_is_the_only_terminal_status() {
        for status in PurchaseStatus::ALL {
            assert_eq!(status.is_terminal(), status == PurchaseStatus::Finalized);
        }
    }

    #[test]
    fn schedule_return_is_the_only_branching_status() {
        for status in PurchaseStatus::ALL {
            let branches = status.allowed_next().len() > 1;
            assert_eq!(branches, status == PurchaseStatus::ScheduleReturn);
        }
    }

    #[test]
    fn serde_tag_has_no_embedded_space() {
        let json = serde_json::to_string(&PurchaseStatus::ScheduleReturn).unwrap();
        assert_eq!(json, "\"SCHEDULE_RETURN\"");
        let back: PurchaseStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PurchaseStatus::ScheduleReturn);
    }

    #[test]
    fn labels_render_through_display() {
        assert_eq!(PurchaseStatus::ScheduleReturn.to_string(), "Schedule return");
        assert_eq!(PurchaseStatus::WaitingPayment.to_string(), "Waiting payment");
    }
}
