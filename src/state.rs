//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::api::dto::pagination::RequestPolicy;
use crate::application::services::{ArticleService, AuthService, CourseService, UniversityService};
use crate::domain::repositories::{
    ArticleRepository, CourseRepository, UniversityRepository, UserRepository,
};

pub type DynCourseService = CourseService<dyn CourseRepository>;
pub type DynArticleService = ArticleService<dyn ArticleRepository>;
pub type DynUniversityService = UniversityService<dyn UniversityRepository>;
pub type DynAuthService = AuthService<dyn UserRepository>;

/// Probe used by the status endpoint to check the store.
#[async_trait::async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns `true` when the store answers.
    async fn ping(&self) -> bool;
}

#[async_trait::async_trait]
impl HealthCheck for sqlx::PgPool {
    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(self).await.is_ok()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<DynCourseService>,
    pub article_service: Arc<DynArticleService>,
    pub university_service: Arc<DynUniversityService>,
    pub auth_service: Arc<DynAuthService>,
    pub health: Arc<dyn HealthCheck>,
    pub request_policy: RequestPolicy,
    pub environment: String,
}
