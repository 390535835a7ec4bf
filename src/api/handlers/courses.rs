//! Handlers for the public course endpoints.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::api::dto::course::CourseListQuery;
use crate::api::dto::envelope::Envelope;
use crate::api::dto::pagination::{PAGINATION_HEADER, PaginationMeta};
use crate::domain::entities::{Course, CourseFilters};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse::parse_strict;

/// Returns one course with its languages and articles.
///
/// # Endpoint
///
/// `GET /v1/course/{id}`
///
/// # Errors
///
/// - **400**: `id` is not an integer
/// - **404**: no such course
pub async fn get_course_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<Course>, AppError> {
    let id = parse_strict::<i32>(&id, "id")?;
    let course = state.course_service.get(id).await?;
    Ok(Envelope::new("course", course))
}

/// Returns one filtered page of courses.
///
/// # Endpoint
///
/// `GET /v1/courses?pageNumber=1&pageSize=20&languages=English&isTu9=true`
///
/// Pagination metadata is returned in the `Pagination` header.
pub async fn course_list_handler(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = query.into_params(&state.request_policy)?;
    let page = state.course_service.list(&params).await?;

    let meta = PaginationMeta::new(&params.page, page.total);
    let header = meta.header_value()?;

    Ok((
        [(PAGINATION_HEADER.clone(), header)],
        Envelope::new("courses", page.items),
    ))
}

/// `GET /v1/courses/filters`
pub async fn course_filters_handler(
    State(state): State<AppState>,
) -> Result<Envelope<CourseFilters>, AppError> {
    let filters = state.course_service.filters().await?;
    Ok(Envelope::new("filters", filters))
}
