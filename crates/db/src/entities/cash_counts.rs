//! `SeaORM` Entity for the cash_counts table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::DenominationKind;

/// One counted denomination line per statement; unique per
/// `(statement_id, denomination_id)`. The face value and kind are copied
/// from the catalog row so the sheet reads without a join.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cash_counts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub statement_id: Uuid,
    pub denomination_id: Uuid,
    pub denomination_value: Decimal,
    pub denomination_kind: DenominationKind,
    pub quantity: i64,
    pub amount: Decimal,
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
    #[sea_orm(
        belongs_to = "super::denominations::Entity",
        from = "Column::DenominationId",
        to = "super::denominations::Column::Id"
    )]
    Denominations,
}

impl Related<super::cash_statements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CashStatements.def()
    }
}

impl Related<super::denominations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Denominations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
