//! API route configuration.
//!
//! Read endpoints are public; the admin insert endpoints require a bearer
//! credential via [`crate::api::middleware::auth`].

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    article_filters_handler, article_list_handler, course_filters_handler, course_list_handler,
    edit_article_handler, edit_content_handler, edit_course_handler, edit_university_handler,
    get_article_handler, get_course_handler, sign_in_handler,
};
use crate::state::AppState;

/// Public routes under `/v1`.
///
/// # Endpoints
///
/// - `POST /account/signin`   - Exchange credentials for a bearer token
/// - `GET  /course/{id}`      - One course with languages and articles
/// - `GET  /courses`          - Filtered course page
/// - `GET  /courses/filters`  - Distinct course filter values
/// - `GET  /article/{id}`     - One article with its courses
/// - `GET  /articles`         - Filtered article page
/// - `GET  /articles/filters` - Distinct article filter values
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/account/signin", post(sign_in_handler))
        .route("/course/{id}", get(get_course_handler))
        .route("/courses", get(course_list_handler))
        .route("/courses/filters", get(course_filters_handler))
        .route("/article/{id}", get(get_article_handler))
        .route("/articles", get(article_list_handler))
        .route("/articles/filters", get(article_filters_handler))
}

/// Insert routes under `/v1/admin`, to be wrapped in bearer authentication.
///
/// # Endpoints
///
/// - `POST /editcourse`     - Insert a course
/// - `POST /edituniversity` - Insert a university
/// - `POST /editcontent`    - Insert a content record
/// - `POST /editarticle`    - Link a content record to a course
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/editcourse", post(edit_course_handler))
        .route("/edituniversity", post(edit_university_handler))
        .route("/editcontent", post(edit_content_handler))
        .route("/editarticle", post(edit_article_handler))
}
