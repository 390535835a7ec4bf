//! Course lookup, listing and insert service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Course, CourseFilters, NewCourse, Paged};
use crate::domain::params::CourseParams;
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

/// Service for reading and inserting courses.
///
/// Related data (languages and articles) is loaded in one batch per page and
/// attached to each course in page order.
pub struct CourseService<R: CourseRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CourseRepository + ?Sized> CourseService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns one course with its languages and articles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i32) -> Result<Course, AppError> {
        let course = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found", json!({})))?;

        let mut courses = vec![course];
        self.enrich(&mut courses).await?;

        courses
            .pop()
            .ok_or_else(|| AppError::internal("Database error", json!({})))
    }

    /// Returns one filtered page of courses and the total match count.
    ///
    /// With `hide_related` set, courses keep their aggregated language list
    /// and `articles` stays `None`.
    pub async fn list(&self, params: &CourseParams) -> Result<Paged<Course>, AppError> {
        let mut page = self.repository.list(params).await?;

        if !params.hide_related {
            self.enrich(&mut page.items).await?;
        }

        Ok(page)
    }

    pub async fn filters(&self) -> Result<CourseFilters, AppError> {
        self.repository.filters().await
    }

    /// Inserts a course. No merge or upsert is attempted.
    pub async fn create(&self, course: NewCourse) -> Result<(), AppError> {
        let id = course.id;
        self.repository.insert(course).await?;
        tracing::info!(course_id = id, "Course created");
        Ok(())
    }

    async fn enrich(&self, courses: &mut [Course]) -> Result<(), AppError> {
        if courses.is_empty() {
            return Ok(());
        }

        let ids: Vec<i32> = courses.iter().map(|course| course.id).collect();
        let (mut languages, mut articles) = tokio::try_join!(
            self.repository.languages_for(&ids),
            self.repository.articles_for(&ids),
        )?;

        for course in courses.iter_mut() {
            course.languages = languages.remove(&course.id).unwrap_or_default();
            course.articles = Some(articles.remove(&course.id).unwrap_or_default());
        }

        Ok(())
    }
}
