//! API route definitions.

use axum::{Json, Router, http::StatusCode, response::Response};
use serde_json::json;

use crate::AppState;

pub mod balance;
pub mod denominations;
pub mod employees;
pub mod health;
pub mod statements;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(denominations::routes())
        .merge(employees::routes())
        .merge(balance::routes())
        .merge(statements::routes())
}

/// Builds the standard error body from a domain error's status and code.
pub(crate) fn error_response(status: u16, code: &str, message: String) -> Response {
    use axum::response::IntoResponse;

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": code,
            "message": message,
        })),
    )
        .into_response()
}
