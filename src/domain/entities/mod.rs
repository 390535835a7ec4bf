//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Course`] - A study programme with denormalized university fields
//! - [`Content`] / [`Article`] - An admission write-up and its course associations
//! - [`CourseArticle`] / [`ArticleCourse`] - The two views of a course↔article association
//! - [`NewUniversity`] - An institution offering courses (insert only)
//! - [`User`] - An administrator allowed to write
//!
//! Write inputs use separate structs (`NewCourse`, `NewUniversity`,
//! `NewCourseArticle`); content records are inserted as [`Content`] directly.

pub mod article;
pub mod course;
pub mod filters;
pub mod university;
pub mod user;

pub use article::{Article, ArticleCourse, Content, NewCourseArticle};
pub use course::{Course, CourseArticle, CourseSummary, NewCourse};
pub use filters::{ArticleFilters, CourseFilters};
pub use university::NewUniversity;
pub use user::User;

/// One page of a filtered list together with the post-filter row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total: i64) -> Self {
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }
}
