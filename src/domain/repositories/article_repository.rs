//! Repository trait for article data access.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{ArticleCourse, ArticleFilters, Content, NewCourseArticle, Paged};
use crate::domain::params::ArticleParams;
use crate::error::AppError;

/// Repository interface for articles and their course associations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Finds a content record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or timeout.
    async fn find_by_id(&self, id: i32) -> Result<Option<Content>, AppError>;

    /// Returns one filtered page together with the post-filter row count.
    async fn list(&self, params: &ArticleParams) -> Result<Paged<Content>, AppError>;

    /// Loads the course associations of every given article, keyed by article id.
    async fn courses_for(
        &self,
        article_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<ArticleCourse>>, AppError>;

    /// Distinct values for the article search form.
    async fn filters(&self) -> Result<ArticleFilters, AppError>;

    /// Inserts a content record.
    async fn insert_content(&self, content: Content) -> Result<(), AppError>;

    /// Links an existing content record to an existing course.
    async fn insert_association(&self, association: NewCourseArticle) -> Result<(), AppError>;
}
