//! Ledger event aggregation.
//!
//! Sums the committed financial events (invoice payments, donations, loans,
//! expenses, salary payments, loan repayments) into the period totals fed to
//! the core balance aggregator. The event tables are append-only; a
//! re-computation over an unchanged period always yields the same breakdown.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QuerySelect, Select,
};

use rano_core::ledger::{BalanceAggregator, BalanceBreakdown, LedgerError, PeriodTotals};

use crate::entities::{donations, expenses, invoice_payments, loan_repayments, loans, salary_payments};

#[derive(Debug, FromQueryResult)]
struct SumRow {
    total: Option<Decimal>,
}

/// Read-only access to the financial event tables.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the full balance breakdown for a period.
    ///
    /// The initial balance is the net of every event strictly before
    /// `period_start`; the period totals cover `period_start..=period_end`.
    ///
    /// # Errors
    ///
    /// * `LedgerError::InvalidPeriod` if `period_start > period_end`
    /// * `LedgerError::UpstreamUnavailable` if the event store is unreachable
    /// * `LedgerError::Database` on any other query failure
    pub async fn balance_breakdown(
        &self,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<BalanceBreakdown, LedgerError> {
        BalanceAggregator::validate_period(period_start, period_end)?;

        let before = self.totals_before(period_start).await?;
        let initial_balance = before.invoices + before.donations + before.loans
            - before.expenses
            - before.salaries
            - before.repayments;

        let totals = self.totals_within(period_start, period_end).await?;

        BalanceAggregator::compute(period_start, period_end, initial_balance, &totals)
    }

    /// Event sums for dates strictly before `cutoff`.
    async fn totals_before(&self, cutoff: NaiveDate) -> Result<PeriodTotals, LedgerError> {
        Ok(PeriodTotals {
            invoices: self
                .sum(invoice_payments::Entity::find()
                    .select_only()
                    .column_as(invoice_payments::Column::Amount.sum(), "total")
                    .filter(invoice_payments::Column::EntryDate.lt(cutoff)))
                .await?,
            donations: self
                .sum(donations::Entity::find()
                    .select_only()
                    .column_as(donations::Column::Amount.sum(), "total")
                    .filter(donations::Column::EntryDate.lt(cutoff)))
                .await?,
            loans: self
                .sum(loans::Entity::find()
                    .select_only()
                    .column_as(loans::Column::Amount.sum(), "total")
                    .filter(loans::Column::EntryDate.lt(cutoff)))
                .await?,
            expenses: self
                .sum(expenses::Entity::find()
                    .select_only()
                    .column_as(expenses::Column::Amount.sum(), "total")
                    .filter(expenses::Column::EntryDate.lt(cutoff)))
                .await?,
            salaries: self
                .sum(salary_payments::Entity::find()
                    .select_only()
                    .column_as(salary_payments::Column::Amount.sum(), "total")
                    .filter(salary_payments::Column::EntryDate.lt(cutoff)))
                .await?,
            repayments: self
                .sum(loan_repayments::Entity::find()
                    .select_only()
                    .column_as(loan_repayments::Column::Amount.sum(), "total")
                    .filter(loan_repayments::Column::EntryDate.lt(cutoff)))
                .await?,
        })
    }

    /// Event sums for dates within `start..=end`.
    async fn totals_within(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodTotals, LedgerError> {
        Ok(PeriodTotals {
            invoices: self
                .sum(invoice_payments::Entity::find()
                    .select_only()
                    .column_as(invoice_payments::Column::Amount.sum(), "total")
                    .filter(invoice_payments::Column::EntryDate.between(start, end)))
                .await?,
            donations: self
                .sum(donations::Entity::find()
                    .select_only()
                    .column_as(donations::Column::Amount.sum(), "total")
                    .filter(donations::Column::EntryDate.between(start, end)))
                .await?,
            loans: self
                .sum(loans::Entity::find()
                    .select_only()
                    .column_as(loans::Column::Amount.sum(), "total")
                    .filter(loans::Column::EntryDate.between(start, end)))
                .await?,
            expenses: self
                .sum(expenses::Entity::find()
                    .select_only()
                    .column_as(expenses::Column::Amount.sum(), "total")
                    .filter(expenses::Column::EntryDate.between(start, end)))
                .await?,
            salaries: self
                .sum(salary_payments::Entity::find()
                    .select_only()
                    .column_as(salary_payments::Column::Amount.sum(), "total")
                    .filter(salary_payments::Column::EntryDate.between(start, end)))
                .await?,
            repayments: self
                .sum(loan_repayments::Entity::find()
                    .select_only()
                    .column_as(loan_repayments::Column::Amount.sum(), "total")
                    .filter(loan_repayments::Column::EntryDate.between(start, end)))
                .await?,
        })
    }

    /// Runs a prepared aggregate query and unwraps the nullable SQL SUM.
    async fn sum<E: EntityTrait>(&self, query: Select<E>) -> Result<Decimal, LedgerError> {
        let row = query
            .into_model::<SumRow>()
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.and_then(|r| r.total).unwrap_or(Decimal::ZERO))
    }
}

/// Connection-level failures are retryable and surface as 503; everything
/// else is a plain database error.
fn map_db_err(err: DbErr) -> LedgerError {
    match err {
        DbErr::Conn(e) => LedgerError::UpstreamUnavailable(e.to_string()),
        DbErr::ConnectionAcquire(e) => LedgerError::UpstreamUnavailable(e.to_string()),
        other => LedgerError::Database(other.to_string()),
    }
}
