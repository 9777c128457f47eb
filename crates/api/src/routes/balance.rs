//! Theoretical balance routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use rano_core::ledger::BalanceBreakdown;
use rano_db::LedgerRepository;

use crate::AppState;
use crate::routes::error_response;

/// Creates the balance routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/balance", get(get_balance))
}

/// Query parameters for the balance computation.
#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    /// First day of the period (inclusive, YYYY-MM-DD).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive, YYYY-MM-DD).
    pub period_end: NaiveDate,
}

/// The balance breakdown, amounts rendered as strings.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Period start.
    pub period_start: NaiveDate,
    /// Period end.
    pub period_end: NaiveDate,
    /// Net of all events before the period.
    pub initial_balance: String,
    /// Per-category inflow totals.
    pub inflows: serde_json::Value,
    /// Per-category outflow totals.
    pub outflows: serde_json::Value,
    /// Inflows minus outflows.
    pub net_movement: String,
    /// Initial balance plus net movement.
    pub theoretical_balance: String,
}

impl From<&BalanceBreakdown> for BalanceResponse {
    fn from(b: &BalanceBreakdown) -> Self {
        Self {
            period_start: b.period_start,
            period_end: b.period_end,
            initial_balance: b.initial_balance.to_string(),
            inflows: serde_json::json!({
                "invoices": b.inflows.invoices.to_string(),
                "donations": b.inflows.donations.to_string(),
                "loans": b.inflows.loans.to_string(),
                "total": b.inflows.total.to_string(),
            }),
            outflows: serde_json::json!({
                "expenses": b.outflows.expenses.to_string(),
                "salaries": b.outflows.salaries.to_string(),
                "repayments": b.outflows.repayments.to_string(),
                "total": b.outflows.total.to_string(),
            }),
            net_movement: b.net_movement.to_string(),
            theoretical_balance: b.theoretical_balance.to_string(),
        }
    }
}

/// GET `/balance` - Compute the theoretical balance for a period.
async fn get_balance(
    State(state): State<AppState>,
    Query(query): Query<BalanceQuery>,
) -> impl IntoResponse {
    let repo = LedgerRepository::new((*state.db).clone());

    match repo
        .balance_breakdown(query.period_start, query.period_end)
        .await
    {
        Ok(breakdown) => {
            (StatusCode::OK, Json(BalanceResponse::from(&breakdown))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to compute balance breakdown");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}
