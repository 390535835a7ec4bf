//! PostgreSQL repository implementations.
//!
//! Statements are built at runtime with `sqlx::QueryBuilder` or plain
//! `sqlx::query_as`; every value is a bound parameter.
//!
//! # Repositories
//!
//! - [`PgCourseRepository`] - Courses, their languages and their articles
//! - [`PgArticleRepository`] - Content records and course associations
//! - [`PgUniversityRepository`] - University inserts
//! - [`PgUserRepository`] - Administrator accounts

pub mod pg_article_repository;
pub mod pg_course_repository;
pub mod pg_university_repository;
pub mod pg_user_repository;
pub mod query;

pub use pg_article_repository::PgArticleRepository;
pub use pg_course_repository::PgCourseRepository;
pub use pg_university_repository::PgUniversityRepository;
pub use pg_user_repository::PgUserRepository;

use std::future::Future;
use std::time::Duration;

use serde_json::json;

use crate::error::AppError;

/// Per-call ceilings for statements issued by a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTimeouts {
    pub read: Duration,
    pub write: Duration,
}

impl Default for QueryTimeouts {
    fn default() -> Self {
        Self {
            read: Duration::from_secs(100),
            write: Duration::from_secs(3),
        }
    }
}

/// Runs a database future, failing with a generic internal error once `limit` elapses.
pub(crate) async fn timed<T, F>(limit: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => Ok(result?),
        Err(_) => {
            tracing::error!(timeout_ms = limit.as_millis() as u64, "Database call timed out");
            Err(AppError::internal("Database error", json!({})))
        }
    }
}
