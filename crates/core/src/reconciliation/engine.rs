//! Discrepancy computation between physical and theoretical balances.
//!
//! Intentionally a thin, deterministic calculation: the value of this module
//! is the invariant that both figures are always recomputed from their
//! inputs, never read from an independently mutable field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::reconciliation::counts::CountSheet;

/// Sign classification of a discrepancy, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscrepancySign {
    /// More cash counted than the ledger implies.
    Surplus,
    /// Less cash counted than the ledger implies.
    Shortage,
    /// Counted cash matches the ledger exactly.
    Balanced,
}

impl DiscrepancySign {
    /// Returns the string representation of the sign.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Surplus => "surplus",
            Self::Shortage => "shortage",
            Self::Balanced => "balanced",
        }
    }
}

/// Result of reconciling a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Sum of the count-sheet line amounts.
    pub physical_balance: Decimal,
    /// `physical_balance - theoretical_balance`. Positive = surplus.
    pub total_discrepancy: Decimal,
}

impl Reconciliation {
    /// Classifies the discrepancy for display.
    #[must_use]
    pub fn sign(&self) -> DiscrepancySign {
        if self.total_discrepancy.is_zero() {
            DiscrepancySign::Balanced
        } else if self.total_discrepancy.is_sign_positive() {
            DiscrepancySign::Surplus
        } else {
            DiscrepancySign::Shortage
        }
    }
}

/// Stateless reconciliation calculator.
pub struct ReconciliationEngine;

impl ReconciliationEngine {
    /// Computes the physical balance and signed discrepancy.
    ///
    /// Manual discrepancy annotations are deliberately not an input here:
    /// they explain the gap, they never move it.
    #[must_use]
    pub fn reconcile(counts: &CountSheet, theoretical_balance: Decimal) -> Reconciliation {
        let physical_balance = counts.physical_total();
        Reconciliation {
            physical_balance,
            total_discrepancy: physical_balance - theoretical_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denomination::{Denomination, DenominationCatalog, DenominationKind};
    use rano_shared::types::DenominationId;
    use rust_decimal_macros::dec;

    fn sheet_with(notes_10000: i64, coins_500: i64) -> CountSheet {
        let catalog = DenominationCatalog::new(vec![
            Denomination {
                id: DenominationId::new(),
                value: dec!(10000),
                kind: DenominationKind::Banknote,
            },
            Denomination {
                id: DenominationId::new(),
                value: dec!(500),
                kind: DenominationKind::Coin,
            },
        ]);
        let mut sheet = CountSheet::from_catalog(&catalog);
        sheet
            .apply(dec!(10000), DenominationKind::Banknote, notes_10000)
            .unwrap();
        sheet
            .apply(dec!(500), DenominationKind::Coin, coins_500)
            .unwrap();
        sheet
    }

    #[test]
    fn test_scenario_c_shortage() {
        // Scenario C: physical 51 500 against theoretical 60 000.
        let sheet = sheet_with(5, 3);
        let result = ReconciliationEngine::reconcile(&sheet, dec!(60000));
        assert_eq!(result.physical_balance, dec!(51500));
        assert_eq!(result.total_discrepancy, dec!(-8500));
        assert_eq!(result.sign(), DiscrepancySign::Shortage);
    }

    #[test]
    fn test_surplus_classification() {
        let sheet = sheet_with(5, 3);
        let result = ReconciliationEngine::reconcile(&sheet, dec!(50000));
        assert_eq!(result.total_discrepancy, dec!(1500));
        assert_eq!(result.sign(), DiscrepancySign::Surplus);
    }

    #[test]
    fn test_balanced_classification() {
        let sheet = sheet_with(5, 3);
        let result = ReconciliationEngine::reconcile(&sheet, dec!(51500));
        assert_eq!(result.total_discrepancy, Decimal::ZERO);
        assert_eq!(result.sign(), DiscrepancySign::Balanced);
    }

    #[test]
    fn test_exact_decimal_arithmetic() {
        // No rounding drift on non-integer theoretical balances.
        let sheet = sheet_with(0, 1);
        let result = ReconciliationEngine::reconcile(&sheet, dec!(499.90));
        assert_eq!(result.total_discrepancy, dec!(0.10));
    }
}
