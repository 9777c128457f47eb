//! Cash statement repository.
//!
//! Drafting, listing, submission, rejection, and deletion of PV de Caisse
//! records. All mutations recompute the denormalized `physical_balance` and
//! `total_discrepancy` columns from the count rows; those figures are never
//! accepted from the caller.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use rano_core::denomination::{DenominationCatalog, DenominationKind};
use rano_core::ledger::BalanceBreakdown;
use rano_core::reconciliation::{CountSheet, DiscrepancyKind, ReconciliationError};
use rano_core::signature::SignatureRole;
use rano_core::statement::{StatementAction, StatementError, StatementService, SubmitChecklist};
use rano_shared::types::{PageRequest, PageResponse};

use crate::entities::{
    cash_counts, cash_statements, sea_orm_active_enums, statement_discrepancies,
    statement_signatures,
};

use super::denomination::{catalog_on, core_kind_to_db};
use super::directory::{find_active_on, position_matches};

/// Errors surfaced by statement persistence.
#[derive(Debug, Error)]
pub enum StatementRepoError {
    /// Lifecycle rule violation.
    #[error(transparent)]
    Statement(#[from] StatementError),

    /// Count validation failure.
    #[error(transparent)]
    Reconciliation(#[from] ReconciliationError),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),
}

impl StatementRepoError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Statement(e) => e.status_code(),
            Self::Reconciliation(e) => e.status_code(),
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Statement(e) => e.error_code(),
            Self::Reconciliation(e) => e.error_code(),
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl From<DbErr> for StatementRepoError {
    fn from(err: DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// One counted denomination line, addressed by face value and kind.
#[derive(Debug, Clone)]
pub struct CountInput {
    /// Face value of the denomination.
    pub denomination: Decimal,
    /// Banknote or coin.
    pub kind: DenominationKind,
    /// Number of pieces counted.
    pub quantity: i64,
}

/// One manual discrepancy annotation.
#[derive(Debug, Clone)]
pub struct DiscrepancyInput {
    /// Voucher, loss, or gain.
    pub kind: DiscrepancyKind,
    /// Annotated amount.
    pub amount: Decimal,
    /// Mandatory explanation.
    pub description: String,
    /// Optional voucher or receipt reference.
    pub reference: Option<String>,
}

/// Draft content for create and update.
#[derive(Debug, Clone)]
pub struct StatementDraftInput {
    /// Date the statement is drawn up.
    pub statement_date: NaiveDate,
    /// First day of the reconciled period.
    pub period_start: Option<NaiveDate>,
    /// Last day of the reconciled period.
    pub period_end: Option<NaiveDate>,
    /// Frozen balance capture, when the period has been computed.
    pub balance: Option<BalanceBreakdown>,
    /// Counted lines.
    pub counts: Vec<CountInput>,
    /// Discrepancy annotations.
    pub discrepancies: Vec<DiscrepancyInput>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Filter for statement listing.
#[derive(Debug, Clone, Default)]
pub struct StatementFilter {
    /// Restrict to one lifecycle status.
    pub status: Option<rano_core::statement::StatementStatus>,
    /// Substring match on the statement number.
    pub search: Option<String>,
}

/// A statement with its child rows.
#[derive(Debug, Clone)]
pub struct StatementWithDetails {
    /// The statement row.
    pub statement: cash_statements::Model,
    /// Count lines, in catalog order.
    pub counts: Vec<cash_counts::Model>,
    /// Discrepancy annotations.
    pub discrepancies: Vec<statement_discrepancies::Model>,
    /// Recorded signatures.
    pub signatures: Vec<statement_signatures::Model>,
}

/// Statement repository.
#[derive(Debug, Clone)]
pub struct StatementRepository {
    db: DatabaseConnection,
}

impl StatementRepository {
    /// Creates a new statement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft statement with its counts and discrepancies.
    ///
    /// # Errors
    ///
    /// * `ReconciliationError` variants for unknown denominations or
    ///   negative quantities
    /// * `StatementRepoError::Database` on persistence failure
    pub async fn create(
        &self,
        input: StatementDraftInput,
    ) -> Result<StatementWithDetails, StatementRepoError> {
        // Two creates in the same instant can allocate the same number; the
        // unique index rejects the loser, which re-allocates and retries.
        for _ in 0..2 {
            if let Some(statement_id) = self.insert_draft(&input).await? {
                return self.find_with_details(statement_id).await;
            }
        }
        match self.insert_draft(&input).await? {
            Some(statement_id) => self.find_with_details(statement_id).await,
            None => Err(StatementRepoError::Database(
                "statement number allocation kept colliding".into(),
            )),
        }
    }

    /// One create attempt. Returns `Ok(None)` when the allocated statement
    /// number lost a race to a concurrent create.
    async fn insert_draft(
        &self,
        input: &StatementDraftInput,
    ) -> Result<Option<Uuid>, StatementRepoError> {
        let txn = self.db.begin().await?;

        let catalog = catalog_on(&txn).await?;
        let sheet = build_sheet(&catalog, &input.counts)?;

        let physical_balance = sheet.physical_total();
        let theoretical = input.balance.map(|b| b.theoretical_balance);
        let total_discrepancy =
            theoretical.map_or(Decimal::ZERO, |t| physical_balance - t);

        let statement_number =
            next_statement_number(&txn, input.statement_date.year()).await?;

        let now = Utc::now().into();
        let statement_id = Uuid::now_v7();
        let statement = cash_statements::ActiveModel {
            id: Set(statement_id),
            statement_number: Set(statement_number),
            statement_date: Set(input.statement_date),
            period_start: Set(input.period_start),
            period_end: Set(input.period_end),
            theoretical_balance: Set(theoretical),
            calculation_details: Set(input
                .balance
                .as_ref()
                .map(|b| json!(b))),
            physical_balance: Set(physical_balance),
            total_discrepancy: Set(total_discrepancy),
            status: Set(sea_orm_active_enums::StatementStatus::Draft),
            notes: Set(input.notes.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Err(e) = statement.insert(&txn).await {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                return Ok(None);
            }
            return Err(e.into());
        }

        insert_counts(&txn, statement_id, &catalog, &sheet).await?;
        insert_discrepancies(&txn, statement_id, &input.discrepancies).await?;

        txn.commit().await?;

        Ok(Some(statement_id))
    }

    /// Fetches a statement with counts, discrepancies, and signatures.
    ///
    /// # Errors
    ///
    /// * `StatementError::StatementNotFound` if the id is unknown
    pub async fn find_with_details(
        &self,
        statement_id: Uuid,
    ) -> Result<StatementWithDetails, StatementRepoError> {
        let statement = cash_statements::Entity::find_by_id(statement_id)
            .one(&self.db)
            .await?
            .ok_or(StatementError::StatementNotFound(statement_id))?;

        let counts = cash_counts::Entity::find()
            .filter(cash_counts::Column::StatementId.eq(statement_id))
            .order_by_desc(cash_counts::Column::DenominationValue)
            .all(&self.db)
            .await?;

        let discrepancies = statement_discrepancies::Entity::find()
            .filter(statement_discrepancies::Column::StatementId.eq(statement_id))
            .order_by_asc(statement_discrepancies::Column::CreatedAt)
            .all(&self.db)
            .await?;

        let signatures = statement_signatures::Entity::find()
            .filter(statement_signatures::Column::StatementId.eq(statement_id))
            .order_by_asc(statement_signatures::Column::SignedAt)
            .all(&self.db)
            .await?;

        Ok(StatementWithDetails {
            statement,
            counts,
            discrepancies,
            signatures,
        })
    }

    /// Lists statements, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: &StatementFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<cash_statements::Model>, StatementRepoError> {
        let mut query = cash_statements::Entity::find();

        if let Some(status) = filter.status {
            query = query.filter(cash_statements::Column::Status.eq(core_status_to_db(status)));
        }
        if let Some(search) = &filter.search {
            query = query.filter(cash_statements::Column::StatementNumber.contains(search));
        }

        let total = query.clone().count(&self.db).await?;

        let data = query
            .order_by_desc(cash_statements::Column::StatementDate)
            .order_by_desc(cash_statements::Column::StatementNumber)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(PageResponse::new(data, page, total))
    }

    /// Replaces the draft content of a statement.
    ///
    /// # Errors
    ///
    /// * `StatementError::NotEditable` unless the statement is a draft
    /// * `ReconciliationError` variants for invalid counts
    pub async fn update_draft(
        &self,
        statement_id: Uuid,
        input: StatementDraftInput,
    ) -> Result<StatementWithDetails, StatementRepoError> {
        let txn = self.db.begin().await?;

        let statement = cash_statements::Entity::find_by_id(statement_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(StatementError::StatementNotFound(statement_id))?;

        StatementService::check_editable(db_status_to_core(&statement.status))?;

        let catalog = catalog_on(&txn).await?;
        let sheet = build_sheet(&catalog, &input.counts)?;

        let physical_balance = sheet.physical_total();
        let theoretical = input.balance.map(|b| b.theoretical_balance);
        let total_discrepancy =
            theoretical.map_or(Decimal::ZERO, |t| physical_balance - t);

        // Replace child rows wholesale; the draft is the unit of edit.
        cash_counts::Entity::delete_many()
            .filter(cash_counts::Column::StatementId.eq(statement_id))
            .exec(&txn)
            .await?;
        statement_discrepancies::Entity::delete_many()
            .filter(statement_discrepancies::Column::StatementId.eq(statement_id))
            .exec(&txn)
            .await?;

        insert_counts(&txn, statement_id, &catalog, &sheet).await?;
        insert_discrepancies(&txn, statement_id, &input.discrepancies).await?;

        let now = Utc::now().into();
        let mut active: cash_statements::ActiveModel = statement.into();
        active.statement_date = Set(input.statement_date);
        active.period_start = Set(input.period_start);
        active.period_end = Set(input.period_end);
        active.theoretical_balance = Set(theoretical);
        active.calculation_details = Set(input.balance.as_ref().map(|b| json!(b)));
        active.physical_balance = Set(physical_balance);
        active.total_discrepancy = Set(total_discrepancy);
        active.notes = Set(input.notes.clone());
        active.updated_at = Set(now);
        active.update(&txn).await?;

        txn.commit().await?;

        self.find_with_details(statement_id).await
    }

    /// Submits a draft for validation, freezing its content.
    ///
    /// # Errors
    ///
    /// * `StatementError::InvalidTransition` if not a draft
    /// * `StatementError::IncompleteStatement` if required fields are missing
    pub async fn submit(
        &self,
        statement_id: Uuid,
        submitted_by: Uuid,
    ) -> Result<cash_statements::Model, StatementRepoError> {
        let txn = self.db.begin().await?;

        // Row lock so the status check and the update see the same row.
        let statement = cash_statements::Entity::find_by_id(statement_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(StatementError::StatementNotFound(statement_id))?;

        let count_lines = cash_counts::Entity::find()
            .filter(cash_counts::Column::StatementId.eq(statement_id))
            .count(&txn)
            .await?;

        let checklist = SubmitChecklist {
            has_period_start: statement.period_start.is_some(),
            has_period_end: statement.period_end.is_some(),
            has_theoretical_balance: statement.theoretical_balance.is_some(),
            has_counts: count_lines > 0,
        };

        let action = StatementService::submit(
            db_status_to_core(&statement.status),
            checklist,
            submitted_by,
        )?;

        let StatementAction::Submit {
            new_status,
            submitted_by,
            submitted_at,
        } = action
        else {
            return Err(StatementRepoError::Database(
                "submit produced a non-submit action".into(),
            ));
        };

        let mut active: cash_statements::ActiveModel = statement.into();
        active.status = Set(core_status_to_db(new_status));
        active.submitted_by = Set(Some(submitted_by));
        active.submitted_at = Set(Some(submitted_at.into()));
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Rejects a pending statement. Only a president-eligible employee may
    /// reject, and a reason is mandatory. Rejection is terminal.
    ///
    /// # Errors
    ///
    /// * `StatementError::NotAuthorizedToReject` if the employee is not an
    ///   active president
    /// * `StatementError::RejectionReasonRequired` if the reason is blank
    /// * `StatementError::InvalidTransition` if not pending validation
    pub async fn reject(
        &self,
        statement_id: Uuid,
        rejected_by: Uuid,
        reason: String,
    ) -> Result<cash_statements::Model, StatementRepoError> {
        let txn = self.db.begin().await?;

        // Row lock keeps a concurrent third signature from validating the
        // statement between the status check and the rejection write.
        let statement = cash_statements::Entity::find_by_id(statement_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(StatementError::StatementNotFound(statement_id))?;

        let employee = find_active_on(&txn, rejected_by).await?;
        let authorized =
            employee.is_some_and(|e| position_matches(&e.position, SignatureRole::President));
        if !authorized {
            return Err(StatementError::NotAuthorizedToReject {
                employee_id: rejected_by,
            }
            .into());
        }

        let action =
            StatementService::reject(db_status_to_core(&statement.status), rejected_by, reason)?;

        let StatementAction::Reject {
            new_status,
            rejected_by,
            rejected_at,
            reason,
        } = action
        else {
            return Err(StatementRepoError::Database(
                "reject produced a non-reject action".into(),
            ));
        };

        let mut active: cash_statements::ActiveModel = statement.into();
        active.status = Set(core_status_to_db(new_status));
        active.rejected_by = Set(Some(rejected_by));
        active.rejected_at = Set(Some(rejected_at.into()));
        active.rejection_reason = Set(Some(reason));
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a draft statement and its child rows.
    ///
    /// # Errors
    ///
    /// * `StatementError::NotEditable` unless the statement is a draft
    pub async fn delete(&self, statement_id: Uuid) -> Result<(), StatementRepoError> {
        let txn = self.db.begin().await?;

        // Row lock so a draft cannot be submitted between the status check
        // and the delete.
        let statement = cash_statements::Entity::find_by_id(statement_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(StatementError::StatementNotFound(statement_id))?;

        StatementService::check_deletable(db_status_to_core(&statement.status))?;

        cash_statements::Entity::delete_by_id(statement.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Seeds a sheet from the catalog and applies the count inputs.
fn build_sheet(
    catalog: &DenominationCatalog,
    counts: &[CountInput],
) -> Result<CountSheet, ReconciliationError> {
    let mut sheet = CountSheet::from_catalog(catalog);
    for count in counts {
        sheet.apply(count.denomination, count.kind, count.quantity)?;
    }
    Ok(sheet)
}

/// Allocates the next `PV-{year}-{seq}` number inside the open transaction.
///
/// The maximum is taken numerically, not lexicographically, so sequences
/// past 9999 keep advancing.
async fn next_statement_number(
    txn: &DatabaseTransaction,
    year: i32,
) -> Result<String, DbErr> {
    let prefix = format!("PV-{year}-");

    let numbers: Vec<String> = cash_statements::Entity::find()
        .select_only()
        .column(cash_statements::Column::StatementNumber)
        .filter(cash_statements::Column::StatementNumber.starts_with(&prefix))
        .into_tuple()
        .all(txn)
        .await?;

    let seq = numbers
        .iter()
        .filter_map(|n| n.rsplit('-').next()?.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
        + 1;

    Ok(format!("PV-{year}-{seq:04}"))
}

/// Inserts the full count sheet, one row per catalog denomination. Zero
/// quantities are kept so an empty cash box is still a complete count.
async fn insert_counts(
    txn: &DatabaseTransaction,
    statement_id: Uuid,
    catalog: &DenominationCatalog,
    sheet: &CountSheet,
) -> Result<(), StatementRepoError> {
    let now = Utc::now().into();
    for line in sheet.counts() {
        let denomination = catalog
            .find(line.denomination, line.kind)
            .ok_or(ReconciliationError::UnknownDenomination {
                value: line.denomination,
                kind: line.kind,
            })?;

        let row = cash_counts::ActiveModel {
            id: Set(Uuid::now_v7()),
            statement_id: Set(statement_id),
            denomination_id: Set(denomination.id.into_inner()),
            denomination_value: Set(line.denomination),
            denomination_kind: Set(core_kind_to_db(line.kind)),
            quantity: Set(line.quantity),
            amount: Set(line.amount()),
            created_at: Set(now),
        };
        row.insert(txn).await?;
    }
    Ok(())
}

/// Inserts the discrepancy annotations.
async fn insert_discrepancies(
    txn: &DatabaseTransaction,
    statement_id: Uuid,
    discrepancies: &[DiscrepancyInput],
) -> Result<(), StatementRepoError> {
    let now = Utc::now().into();
    for entry in discrepancies {
        let row = statement_discrepancies::ActiveModel {
            id: Set(Uuid::now_v7()),
            statement_id: Set(statement_id),
            kind: Set(core_discrepancy_to_db(entry.kind)),
            amount: Set(entry.amount),
            description: Set(entry.description.clone()),
            reference: Set(entry.reference.clone()),
            created_at: Set(now),
        };
        row.insert(txn).await?;
    }
    Ok(())
}

// ============================================================================
// Conversion helpers
// ============================================================================

/// Converts database `StatementStatus` to the core enum.
pub(crate) fn db_status_to_core(
    status: &sea_orm_active_enums::StatementStatus,
) -> rano_core::statement::StatementStatus {
    match status {
        sea_orm_active_enums::StatementStatus::Draft => {
            rano_core::statement::StatementStatus::Draft
        }
        sea_orm_active_enums::StatementStatus::PendingValidation => {
            rano_core::statement::StatementStatus::PendingValidation
        }
        sea_orm_active_enums::StatementStatus::Validated => {
            rano_core::statement::StatementStatus::Validated
        }
        sea_orm_active_enums::StatementStatus::Rejected => {
            rano_core::statement::StatementStatus::Rejected
        }
    }
}

/// Converts the core `StatementStatus` to the database enum.
pub(crate) fn core_status_to_db(
    status: rano_core::statement::StatementStatus,
) -> sea_orm_active_enums::StatementStatus {
    match status {
        rano_core::statement::StatementStatus::Draft => {
            sea_orm_active_enums::StatementStatus::Draft
        }
        rano_core::statement::StatementStatus::PendingValidation => {
            sea_orm_active_enums::StatementStatus::PendingValidation
        }
        rano_core::statement::StatementStatus::Validated => {
            sea_orm_active_enums::StatementStatus::Validated
        }
        rano_core::statement::StatementStatus::Rejected => {
            sea_orm_active_enums::StatementStatus::Rejected
        }
    }
}

/// Converts the core `DiscrepancyKind` to the database enum.
pub(crate) fn core_discrepancy_to_db(
    kind: DiscrepancyKind,
) -> sea_orm_active_enums::DiscrepancyKind {
    match kind {
        DiscrepancyKind::Voucher => sea_orm_active_enums::DiscrepancyKind::Voucher,
        DiscrepancyKind::Loss => sea_orm_active_enums::DiscrepancyKind::Loss,
        DiscrepancyKind::Gain => sea_orm_active_enums::DiscrepancyKind::Gain,
    }
}
