#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use course_directory::api::dto::pagination::RequestPolicy;
use course_directory::application::services::{
    ArticleService, AuthService, CourseService, JwtSettings, UniversityService,
};
use course_directory::domain::entities::{
    ArticleCourse, ArticleFilters, Content, Course, CourseArticle, CourseFilters, CourseSummary,
    NewCourse, NewCourseArticle, NewUniversity, Paged, User,
};
use course_directory::domain::params::{ArticleParams, CourseParams};
use course_directory::domain::repositories::{
    ArticleRepository, CourseRepository, UniversityRepository, UserRepository,
};
use course_directory::error::AppError;
use course_directory::state::{AppState, HealthCheck};
use serde_json::json;
use sqlx::PgPool;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_ISSUER: &str = "go-germany.com";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse";

// ── In-memory store ─────────────────────────────────────────────────────────

/// In-memory stand-in for every repository.
///
/// List calls return the stored rows paged by `Page` without filtering and
/// remember the parameters they were called with.
#[derive(Default)]
pub struct FakeStore {
    pub courses: Mutex<Vec<Course>>,
    pub course_languages: Mutex<HashMap<i32, Vec<String>>>,
    pub course_articles: Mutex<HashMap<i32, Vec<CourseArticle>>>,
    pub contents: Mutex<Vec<Content>>,
    pub article_courses: Mutex<HashMap<i32, Vec<ArticleCourse>>>,
    pub users: Mutex<Vec<User>>,

    pub inserted_courses: Mutex<Vec<NewCourse>>,
    pub inserted_universities: Mutex<Vec<NewUniversity>>,
    pub inserted_contents: Mutex<Vec<Content>>,
    pub inserted_associations: Mutex<Vec<NewCourseArticle>>,

    pub last_course_params: Mutex<Option<CourseParams>>,
    pub last_article_params: Mutex<Option<ArticleParams>>,

    /// When set, every call fails like an unreachable store.
    pub failing: bool,
}

impl FakeStore {
    fn check(&self) -> Result<(), AppError> {
        if self.failing {
            Err(AppError::internal("Database error", json!({})))
        } else {
            Ok(())
        }
    }
}

fn page_of<T: Clone>(rows: &[T], limit: i64, offset: i64) -> Vec<T> {
    rows.iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

#[async_trait]
impl CourseRepository for FakeStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        self.check()?;
        let courses = self.courses.lock().unwrap();
        Ok(courses.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, params: &CourseParams) -> Result<Paged<Course>, AppError> {
        self.check()?;
        *self.last_course_params.lock().unwrap() = Some(params.clone());
        let courses = self.courses.lock().unwrap();
        let items = page_of(&courses, params.page.limit(), params.page.offset());
        Ok(Paged::new(items, courses.len() as i64))
    }

    async fn languages_for(
        &self,
        course_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<String>>, AppError> {
        self.check()?;
        let languages = self.course_languages.lock().unwrap();
        Ok(course_ids
            .iter()
            .filter_map(|id| languages.get(id).map(|l| (*id, l.clone())))
            .collect())
    }

    async fn articles_for(
        &self,
        course_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<CourseArticle>>, AppError> {
        self.check()?;
        let articles = self.course_articles.lock().unwrap();
        Ok(course_ids
            .iter()
            .filter_map(|id| articles.get(id).map(|a| (*id, a.clone())))
            .collect())
    }

    async fn filters(&self) -> Result<CourseFilters, AppError> {
        self.check()?;
        Ok(CourseFilters {
            course_types: vec![1, 2],
            languages: vec!["English".to_string(), "German".to_string()],
            subjects: vec!["Computer Science".to_string()],
            institutions: vec!["TU Berlin".to_string()],
        })
    }

    async fn insert(&self, course: NewCourse) -> Result<(), AppError> {
        self.check()?;
        self.inserted_courses.lock().unwrap().push(course);
        Ok(())
    }
}

#[async_trait]
impl ArticleRepository for FakeStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Content>, AppError> {
        self.check()?;
        let contents = self.contents.lock().unwrap();
        Ok(contents.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, params: &ArticleParams) -> Result<Paged<Content>, AppError> {
        self.check()?;
        *self.last_article_params.lock().unwrap() = Some(params.clone());
        let contents = self.contents.lock().unwrap();
        let items = page_of(&contents, params.page.limit(), params.page.offset());
        Ok(Paged::new(items, contents.len() as i64))
    }

    async fn courses_for(
        &self,
        article_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<ArticleCourse>>, AppError> {
        self.check()?;
        let courses = self.article_courses.lock().unwrap();
        Ok(article_ids
            .iter()
            .filter_map(|id| courses.get(id).map(|c| (*id, c.clone())))
            .collect())
    }

    async fn filters(&self) -> Result<ArticleFilters, AppError> {
        self.check()?;
        Ok(ArticleFilters {
            sources: vec!["PTT".to_string(), "Dcard".to_string()],
            bs_schools: vec!["NTU".to_string()],
            bs_departments: vec!["EE".to_string()],
            ms_schools: Vec::new(),
            ms_departments: Vec::new(),
            course_types: vec![2],
        })
    }

    async fn insert_content(&self, content: Content) -> Result<(), AppError> {
        self.check()?;
        self.inserted_contents.lock().unwrap().push(content);
        Ok(())
    }

    async fn insert_association(&self, association: NewCourseArticle) -> Result<(), AppError> {
        self.check()?;
        self.inserted_associations.lock().unwrap().push(association);
        Ok(())
    }
}

#[async_trait]
impl UniversityRepository for FakeStore {
    async fn insert(&self, university: NewUniversity) -> Result<(), AppError> {
        self.check()?;
        self.inserted_universities.lock().unwrap().push(university);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for FakeStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: users.len() as i32 + 1,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }
}

pub struct FakeHealth(pub bool);

#[async_trait]
impl HealthCheck for FakeHealth {
    async fn ping(&self) -> bool {
        self.0
    }
}

// ── State ───────────────────────────────────────────────────────────────────

pub fn jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        ttl: chrono::Duration::hours(24),
    }
}

pub fn create_test_state(store: Arc<FakeStore>) -> AppState {
    create_test_state_with(store, RequestPolicy::default(), true)
}

pub fn create_test_state_with(
    store: Arc<FakeStore>,
    policy: RequestPolicy,
    healthy: bool,
) -> AppState {
    AppState {
        course_service: Arc::new(CourseService::new(
            store.clone() as Arc<dyn CourseRepository>
        )),
        article_service: Arc::new(ArticleService::new(
            store.clone() as Arc<dyn ArticleRepository>
        )),
        university_service: Arc::new(UniversityService::new(
            store.clone() as Arc<dyn UniversityRepository>
        )),
        auth_service: Arc::new(AuthService::new(
            store as Arc<dyn UserRepository>,
            jwt_settings(),
        )),
        health: Arc::new(FakeHealth(healthy)),
        request_policy: policy,
        environment: "test".to_string(),
    }
}

/// Signs a credential the admin routes accept.
pub fn admin_token(state: &AppState) -> String {
    state.auth_service.issue_token(1).unwrap()
}

pub fn admin_user() -> User {
    User {
        id: 1,
        email: ADMIN_EMAIL.to_string(),
        password_hash: bcrypt::hash(ADMIN_PASSWORD, 4).unwrap(),
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────────

pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn course(id: i32, name_en: &str) -> Course {
    Course {
        id,
        university_id: 1,
        course_type: 2,
        name_en: name_en.to_string(),
        name_en_short: String::new(),
        name_ch: String::new(),
        name_ch_short: String::new(),
        tuition_fees: "none".to_string(),
        beginning: "Winter semester".to_string(),
        subject: "Computer Science".to_string(),
        daadlink: String::new(),
        is_elearning: false,
        application_deadline: String::new(),
        is_complete_online_possible: false,
        programme_duration: "4 semesters".to_string(),
        is_from_daad: true,
        created_at: date(2020, 1, 1),
        updated_at: date(2020, 1, 1),
        university_name_en: "TU Berlin".to_string(),
        university_name_ch: String::new(),
        city: "Berlin".to_string(),
        is_tu9: true,
        is_u15: false,
        qs_ranking: 0,
        university_link: String::new(),
        languages: vec!["English".to_string()],
        article_count: 0,
        articles: None,
    }
}

pub fn content(id: i32, title: &str) -> Content {
    Content {
        id,
        link: format!("https://example.com/{id}"),
        title: title.to_string(),
        author: "chen".to_string(),
        published_at: date(2021, 7, 15),
        source: "PTT".to_string(),
        author_bs_school: "National Taiwan University".to_string(),
        author_bs_school_short: "NTU".to_string(),
        author_bs_department: "EE".to_string(),
        author_bs_gpa: "3.8".to_string(),
        author_ms_school: String::new(),
        author_ms_school_short: String::new(),
        author_ms_department: String::new(),
        author_ms_gpa: String::new(),
        author_toefl: "100".to_string(),
        author_ielts: String::new(),
        author_gre: String::new(),
        author_gmat: String::new(),
        author_testdaf: String::new(),
        author_goethe: String::new(),
        course_type: 2,
    }
}

pub fn course_summary(id: i32, name_en: &str) -> CourseSummary {
    CourseSummary {
        id,
        name_en: name_en.to_string(),
        daadlink: String::new(),
        is_from_daad: true,
        course_type: 2,
        programme_duration: String::new(),
        tuition_fees: String::new(),
        beginning: String::new(),
        subject: String::new(),
        application_deadline: String::new(),
        university_name_en: "TU Berlin".to_string(),
        university_name_ch: String::new(),
        university_link: String::new(),
        is_tu9: true,
        is_u15: false,
        city: "Berlin".to_string(),
    }
}

// ── Database seeding for repository tests ───────────────────────────────────

pub async fn create_test_university(
    pool: &PgPool,
    id: i32,
    name_en: &str,
    is_tu9: bool,
    is_u15: bool,
) {
    sqlx::query(
        "INSERT INTO university (id, name_en, city, is_tu9, is_u15) VALUES ($1, $2, 'Somewhere', $3, $4)",
    )
    .bind(id)
    .bind(name_en)
    .bind(is_tu9)
    .bind(is_u15)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_course(
    pool: &PgPool,
    id: i32,
    university_id: i32,
    name_en: &str,
    course_type: i32,
    subject: &str,
) {
    sqlx::query(
        "INSERT INTO course (id, university_id, name_en, course_type, subject) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(university_id)
    .bind(name_en)
    .bind(course_type)
    .bind(subject)
    .execute(pool)
    .await
    .unwrap();
}

/// Attaches `language` to a course, creating the language row if needed.
pub async fn add_course_language(pool: &PgPool, course_id: i32, language: &str) {
    let language_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO language (name) VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(language)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO courses_languages (course_id, language_id) VALUES ($1, $2)")
        .bind(course_id)
        .bind(language_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_content(
    pool: &PgPool,
    id: i32,
    title: &str,
    source: &str,
    published_at: DateTime<Utc>,
    course_type: i32,
) {
    sqlx::query(
        r#"
        INSERT INTO content (id, title, author, source, published_date, course_type,
                             author_bs_school_short, author_bs_department)
        VALUES ($1, $2, 'chen', $3, $4, $5, 'NTU', 'EE')
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(source)
    .bind(published_at)
    .bind(course_type)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn link_article(pool: &PgPool, content_id: i32, course_id: i32, result: &str) {
    sqlx::query("INSERT INTO article (id, course_id, result, is_decision) VALUES ($1, $2, $3, true)")
        .bind(content_id)
        .bind(course_id)
        .bind(result)
        .execute(pool)
        .await
        .unwrap();
}
