//! Ledger error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during balance aggregation.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The period bounds are inverted.
    #[error("Invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        /// The submitted period start.
        start: NaiveDate,
        /// The submitted period end.
        end: NaiveDate,
    },

    /// The financial event source cannot be reached. Retryable.
    #[error("Ledger source unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl LedgerError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidPeriod { .. } => 400,
            Self::UpstreamUnavailable(_) => 503,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPeriod { .. } => "INVALID_PERIOD",
            Self::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_error() {
        let err = LedgerError::InvalidPeriod {
            start: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_PERIOD");
    }

    #[test]
    fn test_upstream_unavailable_is_503() {
        let err = LedgerError::UpstreamUnavailable("timeout".into());
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.error_code(), "UPSTREAM_UNAVAILABLE");
    }
}
