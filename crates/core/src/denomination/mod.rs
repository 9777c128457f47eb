//! Denomination catalog for physical cash counts.
//!
//! The catalog is an externally supplied, ordered set of valid banknote and
//! coin face values. Counts are only accepted for denominations present in
//! the catalog, with a matching kind.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rano_shared::types::DenominationId;

/// Whether a denomination is a banknote or a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenominationKind {
    /// Paper money.
    Banknote,
    /// Metal money.
    Coin,
}

impl DenominationKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Banknote => "banknote",
            Self::Coin => "coin",
        }
    }

    /// Parses a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "banknote" => Some(Self::Banknote),
            "coin" => Some(Self::Coin),
            _ => None,
        }
    }
}

impl std::fmt::Display for DenominationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single valid face value in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    /// Unique identifier.
    pub id: DenominationId,
    /// Face value in the utility's currency.
    pub value: Decimal,
    /// Banknote or coin.
    pub kind: DenominationKind,
}

/// Ordered set of valid denominations.
///
/// Entries are kept sorted by descending face value (banknotes before coins
/// at equal value), which is the order counting sheets are printed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationCatalog {
    entries: Vec<Denomination>,
}

impl DenominationCatalog {
    /// Builds a catalog from the externally supplied entries.
    #[must_use]
    pub fn new(mut entries: Vec<Denomination>) -> Self {
        entries.sort_by(|a, b| {
            b.value
                .cmp(&a.value)
                .then_with(|| (a.kind == DenominationKind::Coin).cmp(&(b.kind == DenominationKind::Coin)))
        });
        Self { entries }
    }

    /// Returns the entries in counting-sheet order.
    #[must_use]
    pub fn entries(&self) -> &[Denomination] {
        &self.entries
    }

    /// Looks up a denomination by face value and kind.
    #[must_use]
    pub fn find(&self, value: Decimal, kind: DenominationKind) -> Option<&Denomination> {
        self.entries
            .iter()
            .find(|d| d.value == value && d.kind == kind)
    }

    /// Returns true if the value/kind pair is a valid denomination.
    #[must_use]
    pub fn contains(&self, value: Decimal, kind: DenominationKind) -> bool {
        self.find(value, kind).is_some()
    }

    /// Number of denominations in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn catalog() -> DenominationCatalog {
        DenominationCatalog::new(vec![
            Denomination {
                id: DenominationId::new(),
                value: dec!(500),
                kind: DenominationKind::Coin,
            },
            Denomination {
                id: DenominationId::new(),
                value: dec!(10000),
                kind: DenominationKind::Banknote,
            },
            Denomination {
                id: DenominationId::new(),
                value: dec!(2000),
                kind: DenominationKind::Banknote,
            },
        ])
    }

    #[test]
    fn test_kind_roundtrip() {
        assert_eq!(DenominationKind::parse("banknote"), Some(DenominationKind::Banknote));
        assert_eq!(DenominationKind::parse("COIN"), Some(DenominationKind::Coin));
        assert_eq!(DenominationKind::parse("cheque"), None);
        assert_eq!(DenominationKind::Banknote.as_str(), "banknote");
    }

    #[test]
    fn test_catalog_orders_by_descending_value() {
        let values: Vec<Decimal> = catalog().entries().iter().map(|d| d.value).collect();
        assert_eq!(values, vec![dec!(10000), dec!(2000), dec!(500)]);
    }

    #[test]
    fn test_find_requires_matching_kind() {
        let cat = catalog();
        assert!(cat.contains(dec!(500), DenominationKind::Coin));
        assert!(!cat.contains(dec!(500), DenominationKind::Banknote));
        assert!(!cat.contains(dec!(123), DenominationKind::Coin));
    }
}
