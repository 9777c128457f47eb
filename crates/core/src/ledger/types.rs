//! Ledger aggregation types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw event sums for a period, one figure per event category.
///
/// Supplied by the financial event source (the db crate's ledger
/// repository); the aggregator never sees individual events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Cash received against invoices.
    pub invoices: Decimal,
    /// Donations received.
    pub donations: Decimal,
    /// Loan principal received.
    pub loans: Decimal,
    /// Operating expenses paid.
    pub expenses: Decimal,
    /// Salaries paid.
    pub salaries: Decimal,
    /// Loan repayments made.
    pub repayments: Decimal,
}

/// Inflow components of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflowBreakdown {
    /// Cash received against invoices.
    pub invoices: Decimal,
    /// Donations received.
    pub donations: Decimal,
    /// Loan principal received.
    pub loans: Decimal,
    /// Sum of the components above.
    pub total: Decimal,
}

/// Outflow components of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutflowBreakdown {
    /// Operating expenses paid.
    pub expenses: Decimal,
    /// Salaries paid.
    pub salaries: Decimal,
    /// Loan repayments made.
    pub repayments: Decimal,
    /// Sum of the components above.
    pub total: Decimal,
}

/// The theoretical balance and how it was obtained.
///
/// Once captured on a statement this breakdown is a frozen snapshot; a later
/// aggregator run never rewrites it without an explicit recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceBreakdown {
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Cash position implied by all events before `period_start`.
    pub initial_balance: Decimal,
    /// Inflows during the period.
    pub inflows: InflowBreakdown,
    /// Outflows during the period.
    pub outflows: OutflowBreakdown,
    /// `inflows.total - outflows.total`.
    pub net_movement: Decimal,
    /// `initial_balance + net_movement`.
    pub theoretical_balance: Decimal,
}
