//! Theoretical cash balance aggregation.
//!
//! Computes the ledger-implied cash balance for a bounded period from the
//! utility's committed financial events. The event source itself lives
//! behind the db crate; this module owns period validation and the
//! arithmetic of the breakdown.
//!
//! # Modules
//!
//! - `types` - Period totals and the balance breakdown
//! - `aggregator` - Breakdown computation
//! - `error` - Ledger error types

pub mod aggregator;
pub mod error;
pub mod types;

#[cfg(test)]
mod aggregator_props;

pub use aggregator::BalanceAggregator;
pub use error::LedgerError;
pub use types::{BalanceBreakdown, InflowBreakdown, OutflowBreakdown, PeriodTotals};
