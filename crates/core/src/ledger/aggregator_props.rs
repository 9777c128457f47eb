//! Property tests for balance aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::ledger::aggregator::BalanceAggregator;
use crate::ledger::types::PeriodTotals;

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(Decimal::from)
}

fn totals_strategy() -> impl Strategy<Value = PeriodTotals> {
    (
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
    )
        .prop_map(
            |(invoices, donations, loans, expenses, salaries, repayments)| PeriodTotals {
                invoices,
                donations,
                loans,
                expenses,
                salaries,
                repayments,
            },
        )
}

fn period() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Component totals always equal the sum of their named parts.
    #[test]
    fn prop_component_totals_are_sums(
        initial in amount_strategy(),
        totals in totals_strategy(),
    ) {
        let (start, end) = period();
        let b = BalanceAggregator::compute(start, end, initial, &totals).unwrap();

        prop_assert_eq!(b.inflows.total, totals.invoices + totals.donations + totals.loans);
        prop_assert_eq!(b.outflows.total, totals.expenses + totals.salaries + totals.repayments);
    }

    /// The theoretical balance always closes the equation
    /// `initial + inflows - outflows`.
    #[test]
    fn prop_theoretical_balance_equation(
        initial in amount_strategy(),
        totals in totals_strategy(),
    ) {
        let (start, end) = period();
        let b = BalanceAggregator::compute(start, end, initial, &totals).unwrap();

        prop_assert_eq!(b.net_movement, b.inflows.total - b.outflows.total);
        prop_assert_eq!(b.theoretical_balance, initial + b.inflows.total - b.outflows.total);
    }

    /// Same inputs, same breakdown: the aggregator is a pure function.
    #[test]
    fn prop_aggregation_idempotent(
        initial in amount_strategy(),
        totals in totals_strategy(),
    ) {
        let (start, end) = period();
        let first = BalanceAggregator::compute(start, end, initial, &totals).unwrap();
        let second = BalanceAggregator::compute(start, end, initial, &totals).unwrap();
        prop_assert_eq!(first, second);
    }
}
