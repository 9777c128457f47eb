//! Signature error types.

use thiserror::Error;
use uuid::Uuid;

use crate::signature::types::SignatureRole;
use crate::statement::types::StatementStatus;

/// Errors that can occur while signing a statement.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The statement is not awaiting signatures.
    #[error("Statement is {status}, signatures are only accepted while pending validation")]
    InvalidState {
        /// The current status.
        status: StatementStatus,
    },

    /// The role already carries a signature on this statement.
    #[error("Role {role} has already signed this statement")]
    AlreadySigned {
        /// The role that was signed twice.
        role: SignatureRole,
    },

    /// The employee is not eligible to sign for the role.
    #[error("Employee {employee_id} is not eligible to sign as {role}")]
    RoleIneligible {
        /// The employee who attempted to sign.
        employee_id: Uuid,
        /// The role they attempted to sign for.
        role: SignatureRole,
    },

    /// The role string could not be parsed.
    #[error("Unknown signature role: {0}")]
    UnknownRole(String),

    /// Statement not found.
    #[error("Statement {0} not found")]
    StatementNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl SignatureError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidState { .. } | Self::AlreadySigned { .. } => 409,
            Self::UnknownRole(_) => 400,
            Self::RoleIneligible { .. } => 403,
            Self::StatementNotFound(_) => 404,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState { .. } => "INVALID_STATE",
            Self::AlreadySigned { .. } => "ALREADY_SIGNED",
            Self::RoleIneligible { .. } => "ROLE_INELIGIBLE",
            Self::UnknownRole(_) => "UNKNOWN_ROLE",
            Self::StatementNotFound(_) => "STATEMENT_NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_error() {
        let err = SignatureError::InvalidState {
            status: StatementStatus::Draft,
        };
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "INVALID_STATE");
        assert!(err.to_string().contains("draft"));
    }

    #[test]
    fn test_already_signed_error() {
        let err = SignatureError::AlreadySigned {
            role: SignatureRole::Treasurer,
        };
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "ALREADY_SIGNED");
    }

    #[test]
    fn test_role_ineligible_error() {
        let err = SignatureError::RoleIneligible {
            employee_id: Uuid::nil(),
            role: SignatureRole::President,
        };
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "ROLE_INELIGIBLE");
    }

    #[test]
    fn test_unknown_role_error() {
        let err = SignatureError::UnknownRole("mayor".to_string());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "UNKNOWN_ROLE");
        assert!(err.to_string().contains("mayor"));
    }
}
