//! Statement error types for the cash statement lifecycle.

use thiserror::Error;
use uuid::Uuid;

use crate::statement::types::StatementStatus;

/// Errors that can occur during statement lifecycle operations.
#[derive(Debug, Error)]
pub enum StatementError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: StatementStatus,
        /// The attempted target status.
        to: StatementStatus,
    },

    /// Attempted to modify a statement that is no longer a draft.
    #[error("Statement is {status} and can no longer be modified")]
    NotEditable {
        /// The current status.
        status: StatementStatus,
    },

    /// Submit was called before all required fields were populated.
    #[error("Statement is incomplete: missing {missing}")]
    IncompleteStatement {
        /// Comma-separated names of the missing fields.
        missing: String,
    },

    /// Rejection requires a non-empty reason.
    #[error("Rejection reason is required")]
    RejectionReasonRequired,

    /// Only employees eligible for the president role may reject.
    #[error("Employee {employee_id} is not authorized to reject statements")]
    NotAuthorizedToReject {
        /// The employee who attempted the rejection.
        employee_id: Uuid,
    },

    /// Statement not found.
    #[error("Statement {0} not found")]
    StatementNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl StatementError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } | Self::NotEditable { .. } => 409,
            Self::IncompleteStatement { .. } | Self::RejectionReasonRequired => 400,
            Self::NotAuthorizedToReject { .. } => 403,
            Self::StatementNotFound(_) => 404,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::NotEditable { .. } => "STATEMENT_NOT_EDITABLE",
            Self::IncompleteStatement { .. } => "INCOMPLETE_STATEMENT",
            Self::RejectionReasonRequired => "REJECTION_REASON_REQUIRED",
            Self::NotAuthorizedToReject { .. } => "NOT_AUTHORIZED_TO_REJECT",
            Self::StatementNotFound(_) => "STATEMENT_NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_error() {
        let err = StatementError::InvalidTransition {
            from: StatementStatus::Validated,
            to: StatementStatus::Draft,
        };
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("validated"));
    }

    #[test]
    fn test_incomplete_statement_error() {
        let err = StatementError::IncompleteStatement {
            missing: "period_end".to_string(),
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INCOMPLETE_STATEMENT");
        assert!(err.to_string().contains("period_end"));
    }

    #[test]
    fn test_not_authorized_to_reject_error() {
        let err = StatementError::NotAuthorizedToReject {
            employee_id: Uuid::nil(),
        };
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "NOT_AUTHORIZED_TO_REJECT");
    }

    #[test]
    fn test_not_found_error() {
        let err = StatementError::StatementNotFound(Uuid::nil());
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "STATEMENT_NOT_FOUND");
    }
}
