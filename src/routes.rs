//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /status`    - Service status with database check (public)
//! - `/v1/*`           - Public read endpoints and sign-in
//! - `/v1/admin/*`     - Insert endpoints (bearer credential required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, `Pagination` header exposed
//! - **Authentication** - Bearer credential on admin routes
//! - **Path normalization** - Trailing slash handling

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::status_handler;
use crate::api::middleware::{auth, cors, tracing};
use crate::state::AppState;

/// Routes with state and middleware, without path normalization.
pub fn api_router(state: AppState) -> Router {
    let admin_router = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let v1_router = api::routes::public_routes().nest("/admin", admin_router);

    Router::new()
        .route("/status", get(status_handler))
        .nest("/v1", v1_router)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
