//! Frozen statement snapshot for the document renderer.
//!
//! The renderer is an external collaborator; the core's only obligation is
//! to hand it an internally consistent, immutable view of a validated
//! statement. Snapshot construction fails unless the statement is validated
//! and carries all three signatures.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::reconciliation::types::{CashCount, DiscrepancyEntry};
use crate::signature::types::{SignatureRole, SignatureSet};
use crate::statement::types::StatementStatus;

/// Errors that can occur while building an export snapshot.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Only validated statements can be exported.
    #[error("Statement is {status}, only validated statements can be exported")]
    NotValidated {
        /// The current status.
        status: StatementStatus,
    },

    /// A validated statement without three signatures is corrupt.
    #[error("Validated statement is missing the {role} signature")]
    MissingSignature {
        /// The role without a signature.
        role: SignatureRole,
    },

    /// The rendering service failed or is unreachable. Retryable.
    #[error("Document renderer unavailable: {0}")]
    RendererUnavailable(String),
}

impl ExportError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotValidated { .. } => 409,
            Self::MissingSignature { .. } => 500,
            Self::RendererUnavailable(_) => 503,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotValidated { .. } => "NOT_VALIDATED",
            Self::MissingSignature { .. } => "MISSING_SIGNATURE",
            Self::RendererUnavailable(_) => "RENDERER_UNAVAILABLE",
        }
    }
}

/// One signature line on the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSignature {
    /// The signing role.
    pub role: SignatureRole,
    /// The employee who signed.
    pub employee_id: Uuid,
    /// When the signature was recorded.
    pub signed_at: DateTime<Utc>,
}

/// Immutable view of a validated statement, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementSnapshot {
    /// Statement identifier.
    pub id: Uuid,
    /// Human-facing statement number (e.g. `PV-2026-0012`).
    pub statement_number: String,
    /// Date the statement was drawn up.
    pub statement_date: NaiveDate,
    /// First day of the reconciled period.
    pub period_start: NaiveDate,
    /// Last day of the reconciled period.
    pub period_end: NaiveDate,
    /// Ledger-implied balance for the period.
    pub theoretical_balance: Decimal,
    /// The frozen calculation breakdown, as captured at computation time.
    pub calculation_details: serde_json::Value,
    /// The counted lines, in counting-sheet order.
    pub cash_counts: Vec<CashCount>,
    /// Sum of the count line amounts.
    pub physical_balance: Decimal,
    /// Manual annotations explaining the gap.
    pub discrepancies: Vec<DiscrepancyEntry>,
    /// `physical_balance - theoretical_balance`.
    pub total_discrepancy: Decimal,
    /// Free-text notes.
    pub notes: Option<String>,
    /// All three signatures, in signing-sheet order.
    pub signatures: Vec<SnapshotSignature>,
}

impl StatementSnapshot {
    /// Extracts the three signature lines from a complete set.
    ///
    /// # Errors
    ///
    /// * `ExportError::NotValidated` if the statement is not validated
    /// * `ExportError::MissingSignature` if a role slot is empty
    pub fn signatures_from_set(
        status: StatementStatus,
        set: &SignatureSet,
    ) -> Result<Vec<SnapshotSignature>, ExportError> {
        if status != StatementStatus::Validated {
            return Err(ExportError::NotValidated { status });
        }

        SignatureRole::ALL
            .into_iter()
            .map(|role| {
                let sig = set
                    .get(role)
                    .ok_or(ExportError::MissingSignature { role })?;
                Ok(SnapshotSignature {
                    role,
                    employee_id: sig.employee_id,
                    signed_at: sig.signed_at,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::types::Signature;

    fn complete_set() -> SignatureSet {
        let mut set = SignatureSet::default();
        for role in SignatureRole::ALL {
            set.set(
                role,
                Signature {
                    employee_id: Uuid::new_v4(),
                    signed_at: Utc::now(),
                },
            );
        }
        set
    }

    #[test]
    fn test_signatures_from_complete_set() {
        let sigs =
            StatementSnapshot::signatures_from_set(StatementStatus::Validated, &complete_set())
                .unwrap();
        assert_eq!(sigs.len(), 3);
        assert_eq!(sigs[0].role, SignatureRole::Treasurer);
        assert_eq!(sigs[2].role, SignatureRole::President);
    }

    #[test]
    fn test_non_validated_statement_cannot_export() {
        for status in [
            StatementStatus::Draft,
            StatementStatus::PendingValidation,
            StatementStatus::Rejected,
        ] {
            let result = StatementSnapshot::signatures_from_set(status, &complete_set());
            assert!(matches!(result, Err(ExportError::NotValidated { .. })));
        }
    }

    #[test]
    fn test_incomplete_set_is_an_internal_error() {
        let mut set = complete_set();
        set.president = None;
        let result = StatementSnapshot::signatures_from_set(StatementStatus::Validated, &set);
        assert!(matches!(
            result,
            Err(ExportError::MissingSignature {
                role: SignatureRole::President
            })
        ));
    }
}
