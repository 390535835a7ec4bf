//! Article lookup, listing and insert service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Article, ArticleFilters, Content, NewCourseArticle, Paged};
use crate::domain::params::ArticleParams;
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

/// Service for reading articles and writing content and associations.
pub struct ArticleService<R: ArticleRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ArticleRepository + ?Sized> ArticleService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns one article with its course associations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no content record has this id.
    pub async fn get(&self, id: i32) -> Result<Article, AppError> {
        let content = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Article not found", json!({})))?;

        let mut articles = vec![Article::new(content)];
        self.enrich(&mut articles).await?;

        articles
            .pop()
            .ok_or_else(|| AppError::internal("Database error", json!({})))
    }

    /// Returns one filtered page of articles, newest first.
    pub async fn list(&self, params: &ArticleParams) -> Result<Paged<Article>, AppError> {
        let page = self.repository.list(params).await?;

        let mut articles: Vec<Article> = page.items.into_iter().map(Article::new).collect();
        if !params.hide_related {
            self.enrich(&mut articles).await?;
        }

        Ok(Paged::new(articles, page.total))
    }

    pub async fn filters(&self) -> Result<ArticleFilters, AppError> {
        self.repository.filters().await
    }

    pub async fn create_content(&self, content: Content) -> Result<(), AppError> {
        let id = content.id;
        self.repository.insert_content(content).await?;
        tracing::info!(content_id = id, "Content created");
        Ok(())
    }

    pub async fn create_association(&self, association: NewCourseArticle) -> Result<(), AppError> {
        let (article_id, course_id) = (association.article_id, association.course_id);
        self.repository.insert_association(association).await?;
        tracing::info!(article_id, course_id, "Article linked to course");
        Ok(())
    }

    async fn enrich(&self, articles: &mut [Article]) -> Result<(), AppError> {
        if articles.is_empty() {
            return Ok(());
        }

        let ids: Vec<i32> = articles.iter().map(Article::id).collect();
        let mut courses = self.repository.courses_for(&ids).await?;

        for article in articles.iter_mut() {
            article.courses = Some(courses.remove(&article.id()).unwrap_or_default());
        }

        Ok(())
    }
}
