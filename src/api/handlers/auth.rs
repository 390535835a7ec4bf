//! Handler for administrator sign-in.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::auth::SignInRequest;
use crate::api::dto::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges an email and password for a signed bearer credential.
///
/// # Endpoint
///
/// `POST /v1/account/signin`
///
/// # Request Body
///
/// ```json
/// { "username": "admin@example.com", "password": "..." }
/// ```
///
/// # Errors
///
/// - **400**: empty username or password
/// - **401**: unknown user or wrong password (indistinguishable)
pub async fn sign_in_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Envelope<String>, AppError> {
    payload.validate()?;

    let token = state
        .auth_service
        .sign_in(&payload.username, &payload.password)
        .await?;

    Ok(Envelope::new("response", token))
}
