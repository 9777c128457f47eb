//! Statement lifecycle state transitions.
//!
//! Stateless validation of the statement state machine. All methods are
//! associated functions that check preconditions and return the resulting
//! `StatementAction` with audit data; persistence happens in the db crate
//! inside the same transaction that re-reads the current status.

use chrono::Utc;
use uuid::Uuid;

use crate::statement::error::StatementError;
use crate::statement::types::{StatementAction, StatementStatus};

/// Presence flags for the fields submit requires.
///
/// The repository fills this from the loaded record; the service only
/// decides, it never touches storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitChecklist {
    /// `period_start` is populated.
    pub has_period_start: bool,
    /// `period_end` is populated.
    pub has_period_end: bool,
    /// A theoretical balance has been computed and captured.
    pub has_theoretical_balance: bool,
    /// The count sheet exists (one line per catalog denomination).
    pub has_counts: bool,
}

impl SubmitChecklist {
    /// Names of the missing required fields, in a fixed order.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_period_start {
            missing.push("period_start");
        }
        if !self.has_period_end {
            missing.push("period_end");
        }
        if !self.has_theoretical_balance {
            missing.push("theoretical_balance");
        }
        if !self.has_counts {
            missing.push("cash_counts");
        }
        missing
    }
}

/// Stateless service for statement lifecycle transitions.
pub struct StatementService;

impl StatementService {
    /// Submit a draft statement for validation.
    ///
    /// Freezes the statement's mutable fields: after this transition only
    /// signatures may be added.
    ///
    /// # Errors
    ///
    /// * `StatementError::InvalidTransition` if not in `Draft`
    /// * `StatementError::IncompleteStatement` if required fields are missing
    pub fn submit(
        current_status: StatementStatus,
        checklist: SubmitChecklist,
        submitted_by: Uuid,
    ) -> Result<StatementAction, StatementError> {
        if current_status != StatementStatus::Draft {
            return Err(StatementError::InvalidTransition {
                from: current_status,
                to: StatementStatus::PendingValidation,
            });
        }

        let missing = checklist.missing();
        if !missing.is_empty() {
            return Err(StatementError::IncompleteStatement {
                missing: missing.join(", "),
            });
        }

        Ok(StatementAction::Submit {
            new_status: StatementStatus::PendingValidation,
            submitted_by,
            submitted_at: Utc::now(),
        })
    }

    /// Reject a pending statement.
    ///
    /// Caller authorization (president eligibility) is checked by the
    /// repository against the employee directory before this is applied.
    ///
    /// # Errors
    ///
    /// * `StatementError::RejectionReasonRequired` if the reason is blank
    /// * `StatementError::InvalidTransition` if not in `PendingValidation`
    pub fn reject(
        current_status: StatementStatus,
        rejected_by: Uuid,
        reason: String,
    ) -> Result<StatementAction, StatementError> {
        if reason.trim().is_empty() {
            return Err(StatementError::RejectionReasonRequired);
        }

        if current_status != StatementStatus::PendingValidation {
            return Err(StatementError::InvalidTransition {
                from: current_status,
                to: StatementStatus::Rejected,
            });
        }

        Ok(StatementAction::Reject {
            new_status: StatementStatus::Rejected,
            rejected_by,
            rejected_at: Utc::now(),
            reason,
        })
    }

    /// Check that a draft mutation (counts, discrepancies, notes, balance)
    /// is allowed in the current status.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::NotEditable` unless the statement is a draft.
    pub fn check_editable(current_status: StatementStatus) -> Result<(), StatementError> {
        if current_status.is_editable() {
            Ok(())
        } else {
            Err(StatementError::NotEditable {
                status: current_status,
            })
        }
    }

    /// Check that deletion is allowed in the current status.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::InvalidTransition` unless the statement is a
    /// draft. The target status in the error is the current one; there is no
    /// "deleted" state, deletion simply removes the draft.
    pub fn check_deletable(current_status: StatementStatus) -> Result<(), StatementError> {
        if current_status == StatementStatus::Draft {
            Ok(())
        } else {
            Err(StatementError::InvalidTransition {
                from: current_status,
                to: current_status,
            })
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Draft → PendingValidation (submit)
    /// - PendingValidation → Validated (third signature)
    /// - PendingValidation → Rejected (reject)
    #[must_use]
    pub fn is_valid_transition(from: StatementStatus, to: StatementStatus) -> bool {
        matches!(
            (from, to),
            (StatementStatus::Draft, StatementStatus::PendingValidation)
                | (
                    StatementStatus::PendingValidation,
                    StatementStatus::Validated | StatementStatus::Rejected
                )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete_checklist() -> SubmitChecklist {
        SubmitChecklist {
            has_period_start: true,
            has_period_end: true,
            has_theoretical_balance: true,
            has_counts: true,
        }
    }

    #[test]
    fn test_submit_from_draft() {
        let result =
            StatementService::submit(StatementStatus::Draft, complete_checklist(), Uuid::new_v4());
        assert!(result.is_ok());
        assert_eq!(
            result.unwrap().new_status(),
            StatementStatus::PendingValidation
        );
    }

    #[test]
    fn test_submit_from_non_draft_fails() {
        for status in [
            StatementStatus::PendingValidation,
            StatementStatus::Validated,
            StatementStatus::Rejected,
        ] {
            let result = StatementService::submit(status, complete_checklist(), Uuid::new_v4());
            assert!(matches!(
                result,
                Err(StatementError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_submit_missing_period_end_fails() {
        // Scenario D: submit without period_end stays in draft.
        let checklist = SubmitChecklist {
            has_period_end: false,
            ..complete_checklist()
        };
        let result = StatementService::submit(StatementStatus::Draft, checklist, Uuid::new_v4());
        match result {
            Err(StatementError::IncompleteStatement { missing }) => {
                assert_eq!(missing, "period_end");
            }
            other => panic!("Expected IncompleteStatement, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_reports_all_missing_fields() {
        let result = StatementService::submit(
            StatementStatus::Draft,
            SubmitChecklist::default(),
            Uuid::new_v4(),
        );
        match result {
            Err(StatementError::IncompleteStatement { missing }) => {
                assert_eq!(
                    missing,
                    "period_start, period_end, theoretical_balance, cash_counts"
                );
            }
            other => panic!("Expected IncompleteStatement, got {other:?}"),
        }
    }

    #[test]
    fn test_reject_from_pending() {
        let result = StatementService::reject(
            StatementStatus::PendingValidation,
            Uuid::new_v4(),
            "Counts do not match the safe".to_string(),
        );
        assert!(result.is_ok());
        assert_eq!(result.unwrap().new_status(), StatementStatus::Rejected);
    }

    #[test]
    fn test_reject_empty_reason_fails() {
        let result = StatementService::reject(
            StatementStatus::PendingValidation,
            Uuid::new_v4(),
            "   ".to_string(),
        );
        assert!(matches!(
            result,
            Err(StatementError::RejectionReasonRequired)
        ));
    }

    #[test]
    fn test_reject_from_draft_fails() {
        let result = StatementService::reject(
            StatementStatus::Draft,
            Uuid::new_v4(),
            "reason".to_string(),
        );
        assert!(matches!(
            result,
            Err(StatementError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_check_editable() {
        assert!(StatementService::check_editable(StatementStatus::Draft).is_ok());
        for status in [
            StatementStatus::PendingValidation,
            StatementStatus::Validated,
            StatementStatus::Rejected,
        ] {
            assert!(matches!(
                StatementService::check_editable(status),
                Err(StatementError::NotEditable { .. })
            ));
        }
    }

    #[test]
    fn test_delete_only_from_draft() {
        assert!(StatementService::check_deletable(StatementStatus::Draft).is_ok());
        for status in [
            StatementStatus::PendingValidation,
            StatementStatus::Validated,
            StatementStatus::Rejected,
        ] {
            assert!(matches!(
                StatementService::check_deletable(status),
                Err(StatementError::InvalidTransition { .. })
            ));
        }
    }

    #[rstest]
    #[case(StatementStatus::Draft, StatementStatus::PendingValidation, true)]
    #[case(StatementStatus::PendingValidation, StatementStatus::Validated, true)]
    #[case(StatementStatus::PendingValidation, StatementStatus::Rejected, true)]
    // No backwards or skipping transitions.
    #[case(StatementStatus::Draft, StatementStatus::Validated, false)]
    #[case(StatementStatus::Draft, StatementStatus::Rejected, false)]
    #[case(StatementStatus::Validated, StatementStatus::Draft, false)]
    #[case(StatementStatus::Rejected, StatementStatus::PendingValidation, false)]
    #[case(StatementStatus::Validated, StatementStatus::Rejected, false)]
    fn test_transition_table(
        #[case] from: StatementStatus,
        #[case] to: StatementStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(StatementService::is_valid_transition(from, to), allowed);
    }
}
