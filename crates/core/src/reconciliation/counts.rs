//! Counting sheet seeded from the denomination catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::denomination::{DenominationCatalog, DenominationKind};
use crate::reconciliation::error::ReconciliationError;
use crate::reconciliation::types::CashCount;

/// The full physical count for one statement: exactly one line per catalog
/// denomination, in counting-sheet order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSheet {
    counts: Vec<CashCount>,
}

impl CountSheet {
    /// Creates a zeroed sheet with one line per catalog denomination.
    #[must_use]
    pub fn from_catalog(catalog: &DenominationCatalog) -> Self {
        let counts = catalog
            .entries()
            .iter()
            .map(|d| CashCount {
                denomination: d.value,
                kind: d.kind,
                quantity: 0,
            })
            .collect();
        Self { counts }
    }

    /// Rebuilds a sheet from persisted lines.
    #[must_use]
    pub fn from_counts(counts: Vec<CashCount>) -> Self {
        Self { counts }
    }

    /// Records a counted quantity for one denomination.
    ///
    /// The denomination must exist on the sheet (i.e. in the catalog) with a
    /// matching kind, and the quantity must be non-negative. Returns the
    /// updated line.
    pub fn apply(
        &mut self,
        denomination: Decimal,
        kind: DenominationKind,
        quantity: i64,
    ) -> Result<&CashCount, ReconciliationError> {
        if quantity < 0 {
            return Err(ReconciliationError::NegativeQuantity(quantity));
        }

        let line = self
            .counts
            .iter_mut()
            .find(|c| c.denomination == denomination && c.kind == kind)
            .ok_or(ReconciliationError::UnknownDenomination {
                value: denomination,
                kind,
            })?;

        line.quantity = quantity;
        Ok(line)
    }

    /// The lines of the sheet, in counting-sheet order.
    #[must_use]
    pub fn counts(&self) -> &[CashCount] {
        &self.counts
    }

    /// The physical balance: sum of line amounts, recomputed on every call.
    #[must_use]
    pub fn physical_total(&self) -> Decimal {
        self.counts.iter().map(CashCount::amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denomination::Denomination;
    use rano_shared::types::DenominationId;
    use rust_decimal_macros::dec;

    fn catalog() -> DenominationCatalog {
        DenominationCatalog::new(vec![
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
        ])
    }

    #[test]
    fn test_sheet_seeded_zeroed() {
        let sheet = CountSheet::from_catalog(&catalog());
        assert_eq!(sheet.counts().len(), 2);
        assert_eq!(sheet.physical_total(), Decimal::ZERO);
    }

    #[test]
    fn test_apply_updates_line_and_total() {
        // Scenario B: 5 notes of 10 000 + 3 coins of 500 = 51 500.
        let mut sheet = CountSheet::from_catalog(&catalog());
        sheet
            .apply(dec!(10000), DenominationKind::Banknote, 5)
            .unwrap();
        let line = sheet.apply(dec!(500), DenominationKind::Coin, 3).unwrap();
        assert_eq!(line.amount(), dec!(1500));
        assert_eq!(sheet.physical_total(), dec!(51500));
    }

    #[test]
    fn test_apply_unknown_denomination_fails() {
        let mut sheet = CountSheet::from_catalog(&catalog());
        let result = sheet.apply(dec!(300), DenominationKind::Coin, 1);
        assert!(matches!(
            result,
            Err(ReconciliationError::UnknownDenomination { .. })
        ));
        assert_eq!(sheet.physical_total(), Decimal::ZERO);
    }

    #[test]
    fn test_apply_kind_mismatch_fails() {
        // 500 exists only as a coin.
        let mut sheet = CountSheet::from_catalog(&catalog());
        let result = sheet.apply(dec!(500), DenominationKind::Banknote, 1);
        assert!(matches!(
            result,
            Err(ReconciliationError::UnknownDenomination { .. })
        ));
    }

    #[test]
    fn test_apply_negative_quantity_fails() {
        let mut sheet = CountSheet::from_catalog(&catalog());
        let result = sheet.apply(dec!(500), DenominationKind::Coin, -1);
        assert!(matches!(
            result,
            Err(ReconciliationError::NegativeQuantity(-1))
        ));
        // Sheet untouched on failure.
        assert_eq!(sheet.physical_total(), Decimal::ZERO);
    }

    #[test]
    fn test_reapply_overwrites_quantity() {
        let mut sheet = CountSheet::from_catalog(&catalog());
        sheet.apply(dec!(500), DenominationKind::Coin, 4).unwrap();
        sheet.apply(dec!(500), DenominationKind::Coin, 2).unwrap();
        assert_eq!(sheet.physical_total(), dec!(1000));
    }
}
