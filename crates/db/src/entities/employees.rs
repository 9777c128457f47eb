//! `SeaORM` Entity for the employees table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    /// Free-form position label, matched case-insensitively against the
    /// signature roles by the employee directory.
    pub position: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::statement_signatures::Entity")]
    StatementSignatures,
}

impl Related<super::statement_signatures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatementSignatures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
