//! Handlers for the public article endpoints.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::api::dto::article::ArticleListQuery;
use crate::api::dto::envelope::Envelope;
use crate::api::dto::pagination::{PAGINATION_HEADER, PaginationMeta};
use crate::domain::entities::{Article, ArticleFilters};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse::parse_strict;

/// Returns one article with the courses it reports on.
///
/// # Endpoint
///
/// `GET /v1/article/{id}`
pub async fn get_article_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<Article>, AppError> {
    let id = parse_strict::<i32>(&id, "id")?;
    let article = state.article_service.get(id).await?;
    Ok(Envelope::new("article", article))
}

/// Returns one filtered page of articles, newest first.
///
/// # Endpoint
///
/// `GET /v1/articles?sources=PTT,FB&courseType=2&hideApplication=true`
pub async fn article_list_handler(
    State(state): State<AppState>,
    Query(query): Query<ArticleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = query.into_params(&state.request_policy)?;
    let page = state.article_service.list(&params).await?;

    let header = PaginationMeta::new(&params.page, page.total).header_value()?;

    Ok((
        [(PAGINATION_HEADER.clone(), header)],
        Envelope::new("articles", page.items),
    ))
}

/// `GET /v1/articles/filters`
pub async fn article_filters_handler(
    State(state): State<AppState>,
) -> Result<Envelope<ArticleFilters>, AppError> {
    let filters = state.article_service.filters().await?;
    Ok(Envelope::new("articleFilters", filters))
}
