//! Property tests for the reconciliation invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::denomination::{Denomination, DenominationCatalog, DenominationKind};
use crate::reconciliation::counts::CountSheet;
use crate::reconciliation::engine::{DiscrepancySign, ReconciliationEngine};
use crate::reconciliation::types::CashCount;
use rano_shared::types::DenominationId;

/// Ariary face values used for generated sheets.
const VALUES: [(i64, DenominationKind); 8] = [
    (10000, DenominationKind::Banknote),
    (5000, DenominationKind::Banknote),
    (2000, DenominationKind::Banknote),
    (1000, DenominationKind::Banknote),
    (500, DenominationKind::Coin),
    (100, DenominationKind::Coin),
    (20, DenominationKind::Coin),
    (5, DenominationKind::Coin),
];

fn catalog() -> DenominationCatalog {
    DenominationCatalog::new(
        VALUES
            .iter()
            .map(|&(v, kind)| Denomination {
                id: DenominationId::new(),
                value: Decimal::from(v),
                kind,
            })
            .collect(),
    )
}

fn quantities_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..10_000, VALUES.len())
}

fn theoretical_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000).prop_map(Decimal::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The physical balance always equals the sum of the line amounts.
    #[test]
    fn prop_physical_balance_is_sum_of_amounts(quantities in quantities_strategy()) {
        let mut sheet = CountSheet::from_catalog(&catalog());
        for (&(value, kind), &qty) in VALUES.iter().zip(&quantities) {
            sheet.apply(Decimal::from(value), kind, qty).unwrap();
        }

        let expected: Decimal = sheet.counts().iter().map(CashCount::amount).sum();
        prop_assert_eq!(sheet.physical_total(), expected);
    }

    /// The discrepancy always equals physical minus theoretical, exactly.
    #[test]
    fn prop_discrepancy_is_physical_minus_theoretical(
        quantities in quantities_strategy(),
        theoretical in theoretical_strategy(),
    ) {
        let mut sheet = CountSheet::from_catalog(&catalog());
        for (&(value, kind), &qty) in VALUES.iter().zip(&quantities) {
            sheet.apply(Decimal::from(value), kind, qty).unwrap();
        }

        let result = ReconciliationEngine::reconcile(&sheet, theoretical);
        prop_assert_eq!(
            result.total_discrepancy,
            result.physical_balance - theoretical
        );
    }

    /// Reconciliation is deterministic for a given sheet and balance.
    #[test]
    fn prop_reconcile_deterministic(
        quantities in quantities_strategy(),
        theoretical in theoretical_strategy(),
    ) {
        let mut sheet = CountSheet::from_catalog(&catalog());
        for (&(value, kind), &qty) in VALUES.iter().zip(&quantities) {
            sheet.apply(Decimal::from(value), kind, qty).unwrap();
        }

        let first = ReconciliationEngine::reconcile(&sheet, theoretical);
        let second = ReconciliationEngine::reconcile(&sheet, theoretical);
        prop_assert_eq!(first, second);
    }

    /// The sign classification agrees with the discrepancy's sign.
    #[test]
    fn prop_sign_matches_discrepancy(
        quantities in quantities_strategy(),
        theoretical in theoretical_strategy(),
    ) {
        let mut sheet = CountSheet::from_catalog(&catalog());
        for (&(value, kind), &qty) in VALUES.iter().zip(&quantities) {
            sheet.apply(Decimal::from(value), kind, qty).unwrap();
        }

        let result = ReconciliationEngine::reconcile(&sheet, theoretical);
        let expected = if result.total_discrepancy.is_zero() {
            DiscrepancySign::Balanced
        } else if result.total_discrepancy > Decimal::ZERO {
            DiscrepancySign::Surplus
        } else {
            DiscrepancySign::Shortage
        };
        prop_assert_eq!(result.sign(), expected);
    }
}
