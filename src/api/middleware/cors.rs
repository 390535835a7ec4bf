//! Cross-origin policy for browser clients.

use axum::http::{HeaderName, Method, header};
use tower_http::cors::{Any, CorsLayer};

use crate::api::dto::pagination::PAGINATION_HEADER;

/// Allows any origin to call the API and to read the `Pagination` header.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([HeaderName::clone(&PAGINATION_HEADER)])
}
