//! `SeaORM` Entity for the cash_statements table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::StatementStatus;

/// One PV de Caisse record per reconciliation period.
///
/// `physical_balance` and `total_discrepancy` are a denormalized read model:
/// every mutation path recomputes them from the count rows and the
/// theoretical balance; no API accepts them as input.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cash_statements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub statement_number: String,
    pub statement_date: Date,
    pub period_start: Option<Date>,
    pub period_end: Option<Date>,
    pub theoretical_balance: Option<Decimal>,
    pub calculation_details: Option<Json>,
    pub physical_balance: Decimal,
    pub total_discrepancy: Decimal,
    pub status: StatementStatus,
    pub notes: Option<String>,
    pub submitted_by: Option<Uuid>,
    pub submitted_at: Option<DateTimeWithTimeZone>,
    pub validated_at: Option<DateTimeWithTimeZone>,
    pub rejected_by: Option<Uuid>,
    pub rejected_at: Option<DateTimeWithTimeZone>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cash_counts::Entity")]
    CashCounts,
    #[sea_orm(has_many = "super::statement_discrepancies::Entity")]
    StatementDiscrepancies,
    #[sea_orm(has_many = "super::statement_signatures::Entity")]
    StatementSignatures,
}

impl Related<super::cash_counts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CashCounts.def()
    }
}

impl Related<super::statement_discrepancies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatementDiscrepancies.def()
    }
}

impl Related<super::statement_signatures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatementSignatures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
