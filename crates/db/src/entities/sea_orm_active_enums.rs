//! Postgres enum mappings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a cash statement.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "statement_status")]
#[serde(rename_all = "snake_case")]
pub enum StatementStatus {
    /// Being prepared, fully editable.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Awaiting the three signatures.
    #[sea_orm(string_value = "pending_validation")]
    PendingValidation,
    /// All three roles signed.
    #[sea_orm(string_value = "validated")]
    Validated,
    /// Refused by the president.
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Banknote or coin.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "denomination_kind")]
#[serde(rename_all = "lowercase")]
pub enum DenominationKind {
    /// Paper money.
    #[sea_orm(string_value = "banknote")]
    Banknote,
    /// Metal money.
    #[sea_orm(string_value = "coin")]
    Coin,
}

/// Kind of manual discrepancy annotation.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "discrepancy_kind")]
#[serde(rename_all = "lowercase")]
pub enum DiscrepancyKind {
    /// Voucher standing in for cash.
    #[sea_orm(string_value = "voucher")]
    Voucher,
    /// Cash known to be missing.
    #[sea_orm(string_value = "loss")]
    Loss,
    /// Cash present in excess of the ledger.
    #[sea_orm(string_value = "gain")]
    Gain,
}

/// Signing office on a cash statement.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "signature_role")]
#[serde(rename_all = "snake_case")]
pub enum SignatureRole {
    /// Keeper of the cash box.
    #[sea_orm(string_value = "treasurer")]
    Treasurer,
    /// Secretary general of the water committee.
    #[sea_orm(string_value = "secretary_general")]
    SecretaryGeneral,
    /// President of the water committee.
    #[sea_orm(string_value = "president")]
    President,
}
