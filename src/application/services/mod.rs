//! Business logic services for the application layer.

pub mod article_service;
pub mod auth_service;
pub mod course_service;
pub mod university_service;

pub use article_service::ArticleService;
pub use auth_service::{AuthService, Claims, JwtSettings, hash_password};
pub use course_service::CourseService;
pub use university_service::UniversityService;
