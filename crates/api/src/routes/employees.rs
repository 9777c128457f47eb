//! Employee directory routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use rano_core::signature::{SignatureError, SignatureRole};
use rano_db::EmployeeDirectory;
use rano_db::entities::employees;

use crate::AppState;
use crate::routes::error_response;

/// Creates the employee routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees))
        .route("/employees/eligible/{role}", get(list_eligible))
}

/// Response for one employee.
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    /// Employee ID.
    pub id: Uuid,
    /// Full name.
    pub full_name: String,
    /// Directory position.
    pub position: String,
}

impl From<employees::Model> for EmployeeResponse {
    fn from(model: employees::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            position: model.position,
        }
    }
}

/// GET `/employees` - List active employees.
async fn list_employees(State(state): State<AppState>) -> impl IntoResponse {
    let directory = EmployeeDirectory::new((*state.db).clone());

    match directory.list_active().await {
        Ok(rows) => {
            let response: Vec<EmployeeResponse> =
                rows.into_iter().map(EmployeeResponse::from).collect();
            (StatusCode::OK, Json(json!({ "employees": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list employees");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}

/// GET `/employees/eligible/{role}` - Active employees who may sign a role.
async fn list_eligible(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> impl IntoResponse {
    let Some(role) = SignatureRole::parse(&role) else {
        let e = SignatureError::UnknownRole(role);
        return error_response(e.status_code(), e.error_code(), e.to_string());
    };

    let directory = EmployeeDirectory::new((*state.db).clone());

    match directory.eligible_for(role).await {
        Ok(rows) => {
            let response: Vec<EmployeeResponse> =
                rows.into_iter().map(EmployeeResponse::from).collect();
            (StatusCode::OK, Json(json!({ "employees": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list eligible employees");
            error_response(e.status_code(), e.error_code(), e.to_string())
        }
    }
}
