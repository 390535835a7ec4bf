//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod admin;
pub mod articles;
pub mod auth;
pub mod courses;
pub mod status;

pub use admin::{
    edit_article_handler, edit_content_handler, edit_course_handler, edit_university_handler,
};
pub use articles::{article_filters_handler, article_list_handler, get_article_handler};
pub use auth::sign_in_handler;
pub use courses::{course_filters_handler, course_list_handler, get_course_handler};
pub use status::status_handler;
