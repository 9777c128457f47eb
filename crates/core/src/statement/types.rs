//! Statement domain types for the cash statement lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Statement status in the reconciliation workflow.
///
/// Statements progress through these states from preparation to validation.
/// The valid transitions are:
/// - Draft → PendingValidation (submit)
/// - PendingValidation → Validated (third signature, coordinator-driven)
/// - PendingValidation → Rejected (explicit reject)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementStatus {
    /// Statement is being prepared and can be modified.
    Draft,
    /// Statement has been submitted and awaits the three signatures.
    PendingValidation,
    /// All three roles signed; the statement is legally validated (immutable).
    Validated,
    /// Statement was refused (immutable).
    Rejected,
}

impl StatementStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::PendingValidation => "pending_validation",
            Self::Validated => "validated",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "pending_validation" => Some(Self::PendingValidation),
            "validated" => Some(Self::Validated),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if the statement's fields can still be modified.
    ///
    /// Only drafts are editable; pending statements accept signatures only.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true if the statement is in a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Validated | Self::Rejected)
    }
}

impl fmt::Display for StatementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle action representing a state transition with audit data.
#[derive(Debug, Clone)]
pub enum StatementAction {
    /// Submit a draft for validation.
    Submit {
        /// The new status after submission.
        new_status: StatementStatus,
        /// The employee who submitted the statement.
        submitted_by: Uuid,
        /// When the statement was submitted.
        submitted_at: DateTime<Utc>,
    },
    /// Reject a pending statement.
    Reject {
        /// The new status after rejection.
        new_status: StatementStatus,
        /// The employee who rejected the statement.
        rejected_by: Uuid,
        /// When the statement was rejected.
        rejected_at: DateTime<Utc>,
        /// The reason for rejection.
        reason: String,
    },
}

impl StatementAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub const fn new_status(&self) -> StatementStatus {
        match self {
            Self::Submit { new_status, .. } | Self::Reject { new_status, .. } => *new_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(StatementStatus::Draft.as_str(), "draft");
        assert_eq!(
            StatementStatus::PendingValidation.as_str(),
            "pending_validation"
        );
        assert_eq!(StatementStatus::Validated.as_str(), "validated");
        assert_eq!(StatementStatus::Rejected.as_str(), "rejected");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(StatementStatus::parse("draft"), Some(StatementStatus::Draft));
        assert_eq!(
            StatementStatus::parse("PENDING_VALIDATION"),
            Some(StatementStatus::PendingValidation)
        );
        assert_eq!(
            StatementStatus::parse("Validated"),
            Some(StatementStatus::Validated)
        );
        assert_eq!(StatementStatus::parse("archived"), None);
    }

    #[test]
    fn test_only_draft_is_editable() {
        assert!(StatementStatus::Draft.is_editable());
        assert!(!StatementStatus::PendingValidation.is_editable());
        assert!(!StatementStatus::Validated.is_editable());
        assert!(!StatementStatus::Rejected.is_editable());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!StatementStatus::Draft.is_terminal());
        assert!(!StatementStatus::PendingValidation.is_terminal());
        assert!(StatementStatus::Validated.is_terminal());
        assert!(StatementStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(
            format!("{}", StatementStatus::PendingValidation),
            "pending_validation"
        );
    }
}
