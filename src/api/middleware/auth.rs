//! Bearer credential middleware for the admin routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Verifies the `Authorization: Bearer <jwt>` header.
///
/// On success the decoded [`crate::application::services::Claims`] are
/// inserted into the request extensions for downstream handlers.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Bearer` if the header is
/// missing or malformed, or if the credential fails signature, expiry, issuer
/// or audience checks.
///
/// # Example
///
/// ```rust,ignore
/// let admin = Router::new()
///     .route("/editcourse", post(edit_course_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Unauthorized", json!({})))?;

    let claims = st.auth_service.verify(&token)?;
    tracing::debug!(user_id = %claims.sub, "Bearer credential accepted");

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
