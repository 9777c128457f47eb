//! Theoretical balance computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::error::LedgerError;
use crate::ledger::types::{BalanceBreakdown, InflowBreakdown, OutflowBreakdown, PeriodTotals};

/// Stateless aggregator turning period totals into a balance breakdown.
///
/// A pure function of its inputs: calling it twice with the same totals
/// yields an identical breakdown, which is what makes the capture-then-freeze
/// model of the statement safe.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Validates the period bounds.
    pub fn validate_period(start: NaiveDate, end: NaiveDate) -> Result<(), LedgerError> {
        if start > end {
            return Err(LedgerError::InvalidPeriod { start, end });
        }
        Ok(())
    }

    /// Computes the full breakdown for a period.
    ///
    /// `initial_balance` is the cash position implied by all committed events
    /// strictly before `period_start`; `totals` are the event sums within
    /// the period.
    pub fn compute(
        period_start: NaiveDate,
        period_end: NaiveDate,
        initial_balance: Decimal,
        totals: &PeriodTotals,
    ) -> Result<BalanceBreakdown, LedgerError> {
        Self::validate_period(period_start, period_end)?;

        let inflows = InflowBreakdown {
            invoices: totals.invoices,
            donations: totals.donations,
            loans: totals.loans,
            total: totals.invoices + totals.donations + totals.loans,
        };
        let outflows = OutflowBreakdown {
            expenses: totals.expenses,
            salaries: totals.salaries,
            repayments: totals.repayments,
            total: totals.expenses + totals.salaries + totals.repayments,
        };
        let net_movement = inflows.total - outflows.total;

        Ok(BalanceBreakdown {
            period_start,
            period_end,
            initial_balance,
            inflows,
            outflows,
            net_movement,
            theoretical_balance: initial_balance + net_movement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_scenario_a_breakdown() {
        // Scenario A: initial 10 000; inflows 120 000; outflows 70 000.
        let totals = PeriodTotals {
            invoices: dec!(100000),
            donations: dec!(20000),
            loans: Decimal::ZERO,
            expenses: dec!(30000),
            salaries: dec!(40000),
            repayments: Decimal::ZERO,
        };

        let breakdown = BalanceAggregator::compute(
            date(2026, 1, 1),
            date(2026, 1, 31),
            dec!(10000),
            &totals,
        )
        .unwrap();

        assert_eq!(breakdown.inflows.total, dec!(120000));
        assert_eq!(breakdown.outflows.total, dec!(70000));
        assert_eq!(breakdown.net_movement, dec!(50000));
        assert_eq!(breakdown.theoretical_balance, dec!(60000));
    }

    #[test]
    fn test_inverted_period_fails() {
        let result = BalanceAggregator::compute(
            date(2026, 2, 1),
            date(2026, 1, 1),
            Decimal::ZERO,
            &PeriodTotals::default(),
        );
        assert!(matches!(result, Err(LedgerError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_single_day_period_is_valid() {
        let d = date(2026, 3, 15);
        assert!(BalanceAggregator::validate_period(d, d).is_ok());
    }

    #[test]
    fn test_compute_is_idempotent() {
        let totals = PeriodTotals {
            invoices: dec!(12345),
            donations: dec!(67),
            loans: dec!(8),
            expenses: dec!(900),
            salaries: dec!(10),
            repayments: dec!(11),
        };
        let first = BalanceAggregator::compute(
            date(2026, 1, 1),
            date(2026, 1, 31),
            dec!(42),
            &totals,
        )
        .unwrap();
        let second = BalanceAggregator::compute(
            date(2026, 1, 1),
            date(2026, 1, 31),
            dec!(42),
            &totals,
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_net_movement() {
        let totals = PeriodTotals {
            expenses: dec!(5000),
            ..PeriodTotals::default()
        };
        let breakdown = BalanceAggregator::compute(
            date(2026, 1, 1),
            date(2026, 1, 31),
            dec!(1000),
            &totals,
        )
        .unwrap();
        assert_eq!(breakdown.net_movement, dec!(-5000));
        assert_eq!(breakdown.theoretical_balance, dec!(-4000));
    }
}
