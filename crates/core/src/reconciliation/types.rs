//! Reconciliation domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::denomination::DenominationKind;

/// One counted line on the counting sheet.
///
/// The line amount is never stored; it is always derived as
/// `denomination × quantity` so a count can never disagree with its amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashCount {
    /// Face value of the counted denomination.
    pub denomination: Decimal,
    /// Banknote or coin.
    pub kind: DenominationKind,
    /// Number of pieces counted (non-negative).
    pub quantity: i64,
}

impl CashCount {
    /// The monetary amount of this line.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.denomination * Decimal::from(self.quantity)
    }
}

/// Kind of manual discrepancy annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscrepancyKind {
    /// A voucher standing in for cash (IOU, receipt awaiting deposit).
    Voucher,
    /// Cash known to be missing.
    Loss,
    /// Cash present in excess of the ledger.
    Gain,
}

impl DiscrepancyKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Voucher => "voucher",
            Self::Loss => "loss",
            Self::Gain => "gain",
        }
    }

    /// Parses a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "voucher" => Some(Self::Voucher),
            "loss" => Some(Self::Loss),
            "gain" => Some(Self::Gain),
            _ => None,
        }
    }
}

impl std::fmt::Display for DiscrepancyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A manual annotation explaining part of the numeric gap.
///
/// Annotations are advisory only: adding or removing them never changes the
/// physical balance or the computed discrepancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscrepancyEntry {
    /// What kind of gap this entry explains.
    pub kind: DiscrepancyKind,
    /// The amount being explained.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Optional document reference (voucher number, report, ...).
    pub reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_count_amount_is_derived() {
        let count = CashCount {
            denomination: dec!(10000),
            kind: DenominationKind::Banknote,
            quantity: 5,
        };
        assert_eq!(count.amount(), dec!(50000));
    }

    #[test]
    fn test_zero_quantity_amount() {
        let count = CashCount {
            denomination: dec!(500),
            kind: DenominationKind::Coin,
            quantity: 0,
        };
        assert_eq!(count.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_discrepancy_kind_roundtrip() {
        for kind in [
            DiscrepancyKind::Voucher,
            DiscrepancyKind::Loss,
            DiscrepancyKind::Gain,
        ] {
            assert_eq!(DiscrepancyKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(DiscrepancyKind::parse("refund"), None);
    }
}
