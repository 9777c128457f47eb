//! Reconciliation error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::denomination::DenominationKind;

/// Errors that can occur while processing a physical count.
#[derive(Debug, Error)]
pub enum ReconciliationError {
    /// The denomination is not in the catalog (or the kind does not match).
    #[error("Unknown denomination: {value} ({kind})")]
    UnknownDenomination {
        /// The face value that was submitted.
        value: Decimal,
        /// The kind that was submitted.
        kind: DenominationKind,
    },

    /// The quantity is negative.
    #[error("Count quantity must be non-negative, got {0}")]
    NegativeQuantity(i64),
}

impl ReconciliationError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::UnknownDenomination { .. } | Self::NegativeQuantity(_) => 400,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownDenomination { .. } => "UNKNOWN_DENOMINATION",
            Self::NegativeQuantity(_) => "NEGATIVE_QUANTITY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unknown_denomination_error() {
        let err = ReconciliationError::UnknownDenomination {
            value: dec!(300),
            kind: DenominationKind::Coin,
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "UNKNOWN_DENOMINATION");
        assert!(err.to_string().contains("300"));
    }

    #[test]
    fn test_negative_quantity_error() {
        let err = ReconciliationError::NegativeQuantity(-3);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "NEGATIVE_QUANTITY");
    }
}
