//! Cash statement routes.
//!
//! The statement endpoints drive the full PV de Caisse lifecycle: draft
//! capture, submission, the three signatures, rejection, and PDF export.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use rano_core::denomination::DenominationKind;
use rano_core::export::{ExportError, StatementSnapshot};
use rano_core::reconciliation::{CashCount, DiscrepancyEntry, DiscrepancyKind, Reconciliation};
use rano_core::signature::{Signature, SignatureError, SignatureRole, SignatureSet};
use rano_core::statement::StatementStatus;
use rano_db::entities::{cash_counts, sea_orm_active_enums, statement_discrepancies};
use rano_db::repositories::statement::{
    CountInput, DiscrepancyInput, StatementDraftInput, StatementFilter, StatementRepository,
    StatementWithDetails,
};
use rano_db::{LedgerRepository, SignatureRepository};
use rano_shared::types::PageRequest;

use crate::AppState;
use crate::routes::error_response;

/// Creates the statement routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/statements", get(list_statements))
        .route("/statements", post(create_statement))
        .route("/statements/{id}", get(get_statement))
        .route("/statements/{id}", put(update_statement))
        .route("/statements/{id}", delete(delete_statement))
        .route("/statements/{id}/submit", post(submit_statement))
        .route("/statements/{id}/reject", post(reject_statement))
        .route("/statements/{id}/sign", post(sign_statement))
        .route("/statements/{id}/export", get(export_statement))
}

// ============================================================================
// Request types
// ============================================================================

/// Query parameters for listing statements.
#[derive(Debug, Deserialize)]
pub struct ListStatementsQuery {
    /// Filter by lifecycle status.
    pub status: Option<String>,
    /// Substring match on the statement number.
    pub search: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

/// One counted line in a draft payload.
#[derive(Debug, Deserialize)]
pub struct CountRequest {
    /// Face value of the denomination.
    pub denomination: Decimal,
    /// banknote or coin.
    pub kind: String,
    /// Number of pieces counted.
    pub quantity: i64,
}

/// One discrepancy annotation in a draft payload.
#[derive(Debug, Deserialize)]
pub struct DiscrepancyRequest {
    /// voucher, loss, or gain.
    pub kind: String,
    /// Annotated amount.
    pub amount: Decimal,
    /// Mandatory explanation.
    pub description: String,
    /// Optional voucher or receipt reference.
    pub reference: Option<String>,
}

/// Request body for creating or replacing a draft.
#[derive(Debug, Deserialize)]
pub struct StatementRequest {
    /// Date the statement is drawn up.
    pub statement_date: NaiveDate,
    /// First day of the reconciled period.
    pub period_start: Option<NaiveDate>,
    /// Last day of the reconciled period.
    pub period_end: Option<NaiveDate>,
    /// Counted lines.
    #[serde(default)]
    pub counts: Vec<CountRequest>,
    /// Discrepancy annotations.
    #[serde(default)]
    pub discrepancies: Vec<DiscrepancyRequest>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Request body for submitting a draft.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// The employee submitting the statement.
    pub employee_id: Uuid,
}

/// Request body for rejecting a pending statement.
#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    /// The president rejecting the statement.
    pub employee_id: Uuid,
    /// Mandatory rejection reason.
    pub reason: String,
}

/// Request body for signing a pending statement.
#[derive(Debug, Deserialize)]
pub struct SignRequest {
    /// The signing employee.
    pub employee_id: Uuid,
    /// treasurer, secretary_general, or president.
    pub role: String,
}

// ============================================================================
// Response types
// ============================================================================

/// Summary response for one statement.
#[derive(Debug, Serialize)]
pub struct StatementResponse {
    /// Statement ID.
    pub id: Uuid,
    /// Human-facing number, `PV-{year}-{seq}`.
    pub statement_number: String,
    /// Date drawn up.
    pub statement_date: NaiveDate,
    /// Period start.
    pub period_start: Option<NaiveDate>,
    /// Period end.
    pub period_end: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: &'static str,
    /// Frozen theoretical balance, when captured.
    pub theoretical_balance: Option<String>,
    /// Sum of the count line amounts.
    pub physical_balance: String,
    /// Physical minus theoretical.
    pub total_discrepancy: String,
    /// surplus, shortage, or balanced; absent until a balance is captured.
    pub discrepancy_sign: Option<&'static str>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Rejection reason, when rejected.
    pub rejection_reason: Option<String>,
}

impl From<&rano_db::entities::cash_statements::Model> for StatementResponse {
    fn from(m: &rano_db::entities::cash_statements::Model) -> Self {
        let sign = m.theoretical_balance.map(|_| {
            Reconciliation {
                physical_balance: m.physical_balance,
                total_discrepancy: m.total_discrepancy,
            }
            .sign()
            .as_str()
        });

        Self {
            id: m.id,
            statement_number: m.statement_number.clone(),
            statement_date: m.statement_date,
            period_start: m.period_start,
            period_end: m.period_end,
            status: status_str(&m.status),
            theoretical_balance: m.theoretical_balance.map(|d| d.to_string()),
            physical_balance: m.physical_balance.to_string(),
            total_discrepancy: m.total_discrepancy.to_string(),
            discrepancy_sign: sign,
            notes: m.notes.clone(),
            rejection_reason: m.rejection_reason.clone(),
        }
    }
}

/// Full response with child rows.
#[derive(Debug, Serialize)]
pub struct StatementDetailResponse {
    /// Statement summary.
    #[serde(flatten)]
    pub statement: StatementResponse,
    /// The frozen calculation breakdown.
    pub calculation_details: Option<serde_json::Value>,
    /// Counted lines.
    pub counts: Vec<CountResponse>,
    /// Discrepancy annotations.
    pub discrepancies: Vec<DiscrepancyResponse>,
    /// Recorded signatures.
    pub signatures: Vec<SignatureResponse>,
}

/// Response for one count line.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    /// Face value.
    pub denomination: String,
    /// banknote or coin.
    pub kind: &'static str,
    /// Pieces counted.
    pub quantity: i64,
    /// Line amount.
    pub amount: String,
}

/// Response for one discrepancy annotation.
#[derive(Debug, Serialize)]
pub struct DiscrepancyResponse {
    /// voucher, loss, or gain.
    pub kind: &'static str,
    /// Annotated amount.
    pub amount: String,
    /// Explanation.
    pub description: String,
    /// Voucher or receipt reference.
    pub reference: Option<String>,
}

/// Response for one signature.
#[derive(Debug, Serialize)]
pub struct SignatureResponse {
    /// Signing role.
    pub role: &'static str,
    /// Signing employee.
    pub employee_id: Uuid,
    /// When the signature was recorded.
    pub signed_at: String,
}

fn detail_response(details: &StatementWithDetails) -> StatementDetailResponse {
    StatementDetailResponse {
        statement: StatementResponse::from(&details.statement),
        calculation_details: details.statement.calculation_details.clone(),
        counts: details
            .counts
            .iter()
            .map(|c| CountResponse {
                denomination: c.denomination_value.to_string(),
                kind: kind_str(&c.denomination_kind),
                quantity: c.quantity,
                amount: c.amount.to_string(),
            })
            .collect(),
        discrepancies: details
            .discrepancies
            .iter()
            .map(|d| DiscrepancyResponse {
                kind: discrepancy_str(&d.kind),
                amount: d.amount.to_string(),
                description: d.description.clone(),
                reference: d.reference.clone(),
            })
            .collect(),
        signatures: details
            .signatures
            .iter()
            .map(|s| SignatureResponse {
                role: role_str(&s.role),
                employee_id: s.employee_id,
                signed_at: s.signed_at.to_rfc3339(),
            })
            .collect(),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET `/statements` - List statements, newest first.
async fn list_statements(
    State(state): State<AppState>,
    Query(query): Query<ListStatementsQuery>,
) -> impl IntoResponse {
    let status = match query.status.as_deref() {
        None => None,
        Some(raw) => match StatementStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                return error_response(
                    400,
                    "VALIDATION_ERROR",
                    format!("Unknown statement status: {raw}"),
                );
            }
        },
    };

    let filter = StatementFilter {
        status,
        search: query.search,
    };
    let page = PageRequest {
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    };

    let repo = StatementRepository::new((*state.db).clone());
    match repo.list(&filter, &page).await {
        Ok(response) => {
            let data: Vec<StatementResponse> =
                response.data.iter().map(StatementResponse::from).collect();
            (
                StatusCode::OK,
                Json(json!({ "statements": data, "meta": response.meta })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list statements");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}

/// POST `/statements` - Create a draft statement.
async fn create_statement(
    State(state): State<AppState>,
    Json(payload): Json<StatementRequest>,
) -> impl IntoResponse {
    let input = match build_draft_input(&state, payload).await {
        Ok(input) => input,
        Err(response) => return response,
    };

    let repo = StatementRepository::new((*state.db).clone());
    match repo.create(input).await {
        Ok(details) => {
            info!(
                statement_id = %details.statement.id,
                statement_number = %details.statement.statement_number,
                "Created cash statement draft"
            );
            (StatusCode::CREATED, Json(detail_response(&details))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create statement");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}

/// GET `/statements/{id}` - Fetch a statement with its child rows.
async fn get_statement(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = StatementRepository::new((*state.db).clone());

    match repo.find_with_details(id).await {
        Ok(details) => (StatusCode::OK, Json(detail_response(&details))).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

/// PUT `/statements/{id}` - Replace a draft's content.
async fn update_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatementRequest>,
) -> impl IntoResponse {
    let input = match build_draft_input(&state, payload).await {
        Ok(input) => input,
        Err(response) => return response,
    };

    let repo = StatementRepository::new((*state.db).clone());
    match repo.update_draft(id, input).await {
        Ok(details) => (StatusCode::OK, Json(detail_response(&details))).into_response(),
        Err(e) => {
            error!(error = %e, statement_id = %id, "Failed to update statement");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}

/// DELETE `/statements/{id}` - Delete a draft.
async fn delete_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = StatementRepository::new((*state.db).clone());

    match repo.delete(id).await {
        Ok(()) => {
            info!(statement_id = %id, "Deleted draft statement");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(e.status_code(), e.error_code(), e.to_string()),
    }
}

/// POST `/statements/{id}/submit` - Submit a draft for validation.
async fn submit_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubmitRequest>,
) -> impl IntoResponse {
    let repo = StatementRepository::new((*state.db).clone());

    match repo.submit(id, payload.employee_id).await {
        Ok(statement) => {
            info!(
                statement_id = %id,
                submitted_by = %payload.employee_id,
                "Statement submitted for validation"
            );
            (StatusCode::OK, Json(StatementResponse::from(&statement))).into_response()
        }
        Err(e) => {
            error!(error = %e, statement_id = %id, "Failed to submit statement");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}

/// POST `/statements/{id}/reject` - Reject a pending statement.
async fn reject_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RejectRequest>,
) -> impl IntoResponse {
    let repo = StatementRepository::new((*state.db).clone());

    match repo.reject(id, payload.employee_id, payload.reason).await {
        Ok(statement) => {
            info!(
                statement_id = %id,
                rejected_by = %payload.employee_id,
                "Statement rejected"
            );
            (StatusCode::OK, Json(StatementResponse::from(&statement))).into_response()
        }
        Err(e) => {
            error!(error = %e, statement_id = %id, "Failed to reject statement");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}

/// POST `/statements/{id}/sign` - Sign a pending statement for one role.
async fn sign_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SignRequest>,
) -> impl IntoResponse {
    let Some(role) = SignatureRole::parse(&payload.role) else {
        let e = SignatureError::UnknownRole(payload.role);
        return error_response(e.status_code(), e.error_code(), e.to_string());
    };

    let repo = SignatureRepository::new((*state.db).clone());
    match repo.sign(id, payload.employee_id, role).await {
        Ok(result) => {
            info!(
                statement_id = %id,
                role = %role,
                employee_id = %payload.employee_id,
                validated = result.outcome.completes_validation(),
                "Statement signed"
            );
            (
                StatusCode::OK,
                Json(json!({
                    "statement": StatementResponse::from(&result.statement),
                    "signature": {
                        "role": role_str(&result.signature.role),
                        "employee_id": result.signature.employee_id,
                        "signed_at": result.signature.signed_at.to_rfc3339(),
                    },
                    "validated": result.outcome.completes_validation(),
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, statement_id = %id, "Failed to sign statement");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}

/// GET `/statements/{id}/export` - Render a validated statement as PDF.
async fn export_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = StatementRepository::new((*state.db).clone());

    let details = match repo.find_with_details(id).await {
        Ok(details) => details,
        Err(e) => return error_response(e.status_code(), e.error_code(), e.to_string()),
    };

    let snapshot = match build_snapshot(&details) {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    match state.renderer.render_statement(&snapshot).await {
        Ok(bytes) => {
            info!(statement_id = %id, "Exported statement document");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!(
                            "attachment; filename=\"{}.pdf\"",
                            snapshot.statement_number
                        ),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, statement_id = %id, "Document renderer failed");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Parses the draft payload and, when the period is fully bounded, captures
/// the balance breakdown from the ledger.
async fn build_draft_input(
    state: &AppState,
    payload: StatementRequest,
) -> Result<StatementDraftInput, Response> {
    let mut counts = Vec::with_capacity(payload.counts.len());
    for count in payload.counts {
        let Some(kind) = DenominationKind::parse(&count.kind) else {
            return Err(error_response(
                400,
                "VALIDATION_ERROR",
                format!("Unknown denomination kind: {}", count.kind),
            ));
        };
        counts.push(CountInput {
            denomination: count.denomination,
            kind,
            quantity: count.quantity,
        });
    }

    let mut discrepancies = Vec::with_capacity(payload.discrepancies.len());
    for entry in payload.discrepancies {
        let Some(kind) = DiscrepancyKind::parse(&entry.kind) else {
            return Err(error_response(
                400,
                "VALIDATION_ERROR",
                format!("Unknown discrepancy kind: {}", entry.kind),
            ));
        };
        discrepancies.push(DiscrepancyInput {
            kind,
            amount: entry.amount,
            description: entry.description,
            reference: entry.reference,
        });
    }

    // The draft freezes the balance as computed right now; later ledger
    // writes do not touch an existing capture.
    let balance = match (payload.period_start, payload.period_end) {
        (Some(start), Some(end)) => {
            let ledger = LedgerRepository::new((*state.db).clone());
            match ledger.balance_breakdown(start, end).await {
                Ok(breakdown) => Some(breakdown),
                Err(e) => {
                    error!(error = %e, "Failed to capture balance breakdown");
                    return Err(error_response(e.status_code(), e.error_code(), e.to_string()));
                }
            }
        }
        _ => None,
    };

    Ok(StatementDraftInput {
        statement_date: payload.statement_date,
        period_start: payload.period_start,
        period_end: payload.period_end,
        balance,
        counts,
        discrepancies,
        notes: payload.notes,
    })
}

/// Builds the frozen snapshot for the renderer. Validation status and the
/// completeness of the signature set are enforced here, through the core
/// export guard.
fn build_snapshot(details: &StatementWithDetails) -> Result<StatementSnapshot, Response> {
    let statement = &details.statement;
    let status = status_to_core(&statement.status);

    let mut set = SignatureSet::default();
    for row in &details.signatures {
        set.set(
            role_to_core(&row.role),
            Signature {
                employee_id: row.employee_id,
                signed_at: row.signed_at.into(),
            },
        );
    }

    let signatures = StatementSnapshot::signatures_from_set(status, &set)
        .map_err(|e| error_response(e.status_code(), e.error_code(), e.to_string()))?;

    // A validated statement always carries its frozen period and balance.
    let (Some(period_start), Some(period_end), Some(theoretical_balance)) = (
        statement.period_start,
        statement.period_end,
        statement.theoretical_balance,
    ) else {
        let e = ExportError::NotValidated { status };
        return Err(error_response(e.status_code(), e.error_code(), e.to_string()));
    };

    Ok(StatementSnapshot {
        id: statement.id,
        statement_number: statement.statement_number.clone(),
        statement_date: statement.statement_date,
        period_start,
        period_end,
        theoretical_balance,
        calculation_details: statement
            .calculation_details
            .clone()
            .unwrap_or(serde_json::Value::Null),
        cash_counts: details.counts.iter().map(count_to_core).collect(),
        physical_balance: statement.physical_balance,
        discrepancies: details.discrepancies.iter().map(discrepancy_to_core).collect(),
        total_discrepancy: statement.total_discrepancy,
        notes: statement.notes.clone(),
        signatures,
    })
}

fn count_to_core(row: &cash_counts::Model) -> CashCount {
    CashCount {
        denomination: row.denomination_value,
        kind: kind_to_core(&row.denomination_kind),
        quantity: row.quantity,
    }
}

fn discrepancy_to_core(row: &statement_discrepancies::Model) -> DiscrepancyEntry {
    DiscrepancyEntry {
        kind: match row.kind {
            sea_orm_active_enums::DiscrepancyKind::Voucher => DiscrepancyKind::Voucher,
            sea_orm_active_enums::DiscrepancyKind::Loss => DiscrepancyKind::Loss,
            sea_orm_active_enums::DiscrepancyKind::Gain => DiscrepancyKind::Gain,
        },
        amount: row.amount,
        description: row.description.clone(),
        reference: row.reference.clone(),
    }
}

// ============================================================================
// Enum string helpers
// ============================================================================

const fn status_str(status: &sea_orm_active_enums::StatementStatus) -> &'static str {
    match status {
        sea_orm_active_enums::StatementStatus::Draft => "draft",
        sea_orm_active_enums::StatementStatus::PendingValidation => "pending_validation",
        sea_orm_active_enums::StatementStatus::Validated => "validated",
        sea_orm_active_enums::StatementStatus::Rejected => "rejected",
    }
}

const fn status_to_core(status: &sea_orm_active_enums::StatementStatus) -> StatementStatus {
    match status {
        sea_orm_active_enums::StatementStatus::Draft => StatementStatus::Draft,
        sea_orm_active_enums::StatementStatus::PendingValidation => {
            StatementStatus::PendingValidation
        }
        sea_orm_active_enums::StatementStatus::Validated => StatementStatus::Validated,
        sea_orm_active_enums::StatementStatus::Rejected => StatementStatus::Rejected,
    }
}

const fn kind_str(kind: &sea_orm_active_enums::DenominationKind) -> &'static str {
    match kind {
        sea_orm_active_enums::DenominationKind::Banknote => "banknote",
        sea_orm_active_enums::DenominationKind::Coin => "coin",
    }
}

const fn kind_to_core(kind: &sea_orm_active_enums::DenominationKind) -> DenominationKind {
    match kind {
        sea_orm_active_enums::DenominationKind::Banknote => DenominationKind::Banknote,
        sea_orm_active_enums::DenominationKind::Coin => DenominationKind::Coin,
    }
}

const fn discrepancy_str(kind: &sea_orm_active_enums::DiscrepancyKind) -> &'static str {
    match kind {
        sea_orm_active_enums::DiscrepancyKind::Voucher => "voucher",
        sea_orm_active_enums::DiscrepancyKind::Loss => "loss",
        sea_orm_active_enums::DiscrepancyKind::Gain => "gain",
    }
}

const fn role_str(role: &sea_orm_active_enums::SignatureRole) -> &'static str {
    match role {
        sea_orm_active_enums::SignatureRole::Treasurer => "treasurer",
        sea_orm_active_enums::SignatureRole::SecretaryGeneral => "secretary_general",
        sea_orm_active_enums::SignatureRole::President => "president",
    }
}

const fn role_to_core(role: &sea_orm_active_enums::SignatureRole) -> SignatureRole {
    match role {
        sea_orm_active_enums::SignatureRole::Treasurer => SignatureRole::Treasurer,
        sea_orm_active_enums::SignatureRole::SecretaryGeneral => SignatureRole::SecretaryGeneral,
        sea_orm_active_enums::SignatureRole::President => SignatureRole::President,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rano_db::entities::cash_statements;
    use rust_decimal_macros::dec;

    fn draft_model() -> cash_statements::Model {
        cash_statements::Model {
            id: Uuid::now_v7(),
            statement_number: "PV-2026-0001".to_string(),
            statement_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            period_start: None,
            period_end: None,
            theoretical_balance: None,
            calculation_details: None,
            physical_balance: dec!(51500),
            total_discrepancy: Decimal::ZERO,
            status: sea_orm_active_enums::StatementStatus::Draft,
            notes: None,
            submitted_by: None,
            submitted_at: None,
            validated_at: None,
            rejected_by: None,
            rejected_at: None,
            rejection_reason: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[test]
    fn test_snapshot_rejects_unvalidated_statement() {
        let details = StatementWithDetails {
            statement: draft_model(),
            counts: vec![],
            discrepancies: vec![],
            signatures: vec![],
        };

        assert!(build_snapshot(&details).is_err());
    }

    #[test]
    fn test_discrepancy_sign_absent_without_balance() {
        let response = StatementResponse::from(&draft_model());
        assert_eq!(response.discrepancy_sign, None);
        assert_eq!(response.theoretical_balance, None);
    }

    #[test]
    fn test_discrepancy_sign_classifies_shortage() {
        let mut model = draft_model();
        model.theoretical_balance = Some(dec!(60000));
        model.total_discrepancy = dec!(-8500);

        let response = StatementResponse::from(&model);
        assert_eq!(response.discrepancy_sign, Some("shortage"));
    }
}
