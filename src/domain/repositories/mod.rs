//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`CourseRepository`] - Course lookup, filtered listing and inserts
//! - [`ArticleRepository`] - Content lookup, filtered listing and association inserts
//! - [`UniversityRepository`] - University inserts
//! - [`UserRepository`] - Administrator accounts
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod article_repository;
pub mod course_repository;
pub mod university_repository;
pub mod user_repository;

pub use article_repository::ArticleRepository;
pub use course_repository::CourseRepository;
pub use university_repository::UniversityRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use university_repository::MockUniversityRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
