//! `SeaORM` Entity for the statement_discrepancies table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::DiscrepancyKind;

/// Manual annotation explaining part of the discrepancy. Advisory only:
/// never feeds into the computed balances.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "statement_discrepancies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub statement_id: Uuid,
    pub kind: DiscrepancyKind,
    pub amount: Decimal,
    pub description: String,
    pub reference: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cash_statements::Entity",
        from = "Column::StatementId",
        to = "super::cash_statements::Column::Id"
    )]
    CashStatements,
}

impl Related<super::cash_statements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CashStatements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
