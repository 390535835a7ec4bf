//! Handler for the status endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::status::{CheckStatus, StatusChecks, StatusResponse};
use crate::state::AppState;

/// Returns service status with a database check.
///
/// # Endpoint
///
/// `GET /status`
///
/// # Response Codes
///
/// - **200 OK**: database reachable
/// - **503 Service Unavailable**: database unreachable
pub async fn status_handler(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<StatusResponse>)> {
    let database = if state.health.ping().await {
        CheckStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Database unreachable".to_string()),
        }
    };

    let healthy = database.status == "ok";
    let response = StatusResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        environment: state.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: StatusChecks { database },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
