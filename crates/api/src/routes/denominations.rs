//! Denomination catalog routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use rano_db::DenominationRepository;

use crate::AppState;
use crate::routes::error_response;

/// Creates the denomination routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/denominations", get(list_denominations))
}

/// Response for one catalog denomination.
#[derive(Debug, Serialize)]
pub struct DenominationResponse {
    /// Denomination ID.
    pub id: Uuid,
    /// Face value.
    pub value: String,
    /// banknote or coin.
    pub kind: String,
}

/// GET `/denominations` - The active catalog, in counting-sheet order.
async fn list_denominations(State(state): State<AppState>) -> impl IntoResponse {
    let repo = DenominationRepository::new((*state.db).clone());

    match repo.catalog().await {
        Ok(catalog) => {
            let response: Vec<DenominationResponse> = catalog
                .entries()
                .iter()
                .map(|d| DenominationResponse {
                    id: d.id.into_inner(),
                    value: d.value.to_string(),
                    kind: d.kind.to_string(),
                })
                .collect();

            (StatusCode::OK, Json(json!({ "denominations": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to load denomination catalog");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}
