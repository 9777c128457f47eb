//! `SeaORM` Entity for the denominations catalog table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::DenominationKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "denominations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub value: Decimal,
    pub kind: DenominationKind,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cash_counts::Entity")]
    CashCounts,
}

impl Related<super::cash_counts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CashCounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
