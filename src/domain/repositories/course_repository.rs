//! Repository trait for course data access.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{Course, CourseArticle, CourseFilters, NewCourse, Paged};
use crate::domain::params::CourseParams;
use crate::error::AppError;

/// Repository interface for courses.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Finds a course by id with its university fields, aggregated languages
    /// and article count. `articles` is left unset.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or timeout.
    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError>;

    /// Returns one filtered page together with the post-filter row count.
    ///
    /// The count and the page are derived from the same filtered query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or timeout.
    async fn list(&self, params: &CourseParams) -> Result<Paged<Course>, AppError>;

    /// Loads the language names of every given course, keyed by course id.
    ///
    /// Courses without languages are absent from the map.
    async fn languages_for(&self, course_ids: &[i32])
    -> Result<HashMap<i32, Vec<String>>, AppError>;

    /// Loads the articles of every given course, newest first, keyed by course id.
    async fn articles_for(
        &self,
        course_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<CourseArticle>>, AppError>;

    /// Distinct values for the course search form.
    async fn filters(&self) -> Result<CourseFilters, AppError>;

    /// Inserts a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store rejects the row, for
    /// example on a duplicate id or unknown university.
    async fn insert(&self, course: NewCourse) -> Result<(), AppError>;
}
