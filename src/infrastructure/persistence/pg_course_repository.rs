//! PostgreSQL implementation of the course repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::query::course::{course_by_id_query, course_list_query};
use super::{QueryTimeouts, timed};
use crate::domain::entities::{
    Content, Course, CourseArticle, CourseFilters, NewCourse, Paged,
};
use crate::domain::params::CourseParams;
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

/// PostgreSQL repository for courses.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
    timeouts: QueryTimeouts,
}

impl PgCourseRepository {
    /// Creates a new repository with the default statement timeouts.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_timeouts(pool, QueryTimeouts::default())
    }

    pub fn with_timeouts(pool: Arc<PgPool>, timeouts: QueryTimeouts) -> Self {
        Self { pool, timeouts }
    }
}

/// One grouped course row with its aggregated columns.
#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i32,
    university_id: i32,
    course_type: i32,
    name_en: String,
    name_en_short: String,
    name_ch: String,
    name_ch_short: String,
    tuition_fees: String,
    beginning: String,
    subject: String,
    daadlink: String,
    is_elearning: bool,
    application_deadline: String,
    is_complete_online_possible: bool,
    programme_duration: String,
    is_from_daad: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    university_name_en: String,
    university_name_ch: String,
    city: String,
    is_tu9: bool,
    is_u15: bool,
    qs_ranking: i32,
    university_link: String,
    languages: String,
    article_count: i64,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.id,
            university_id: row.university_id,
            course_type: row.course_type,
            name_en: row.name_en,
            name_en_short: row.name_en_short,
            name_ch: row.name_ch,
            name_ch_short: row.name_ch_short,
            tuition_fees: row.tuition_fees,
            beginning: row.beginning,
            subject: row.subject,
            daadlink: row.daadlink,
            is_elearning: row.is_elearning,
            application_deadline: row.application_deadline,
            is_complete_online_possible: row.is_complete_online_possible,
            programme_duration: row.programme_duration,
            is_from_daad: row.is_from_daad,
            created_at: row.created_at,
            updated_at: row.updated_at,
            university_name_en: row.university_name_en,
            university_name_ch: row.university_name_ch,
            city: row.city,
            is_tu9: row.is_tu9,
            is_u15: row.is_u15,
            qs_ranking: row.qs_ranking,
            university_link: row.university_link,
            languages: Course::languages_from_aggregate(&row.languages),
            article_count: row.article_count,
            articles: None,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CourseArticleRow {
    owner_id: i32,
    result: String,
    is_decision: bool,
    #[sqlx(flatten)]
    content: Content,
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        let mut statement = course_by_id_query(id).statement();

        let row = timed(
            self.timeouts.read,
            statement
                .build_query_as::<CourseRow>()
                .fetch_optional(self.pool.as_ref()),
        )
        .await?;

        Ok(row.map(Course::from))
    }

    async fn list(&self, params: &CourseParams) -> Result<Paged<Course>, AppError> {
        let query = course_list_query(params);
        tracing::debug!(binds = ?query.binds(), "Listing courses");

        let mut count = query.count_query();
        let mut page = query.page_query(&params.page);

        let (total, rows) = timed(self.timeouts.read, async {
            tokio::try_join!(
                count
                    .build_query_scalar::<i64>()
                    .fetch_one(self.pool.as_ref()),
                page.build_query_as::<CourseRow>()
                    .fetch_all(self.pool.as_ref()),
            )
        })
        .await?;

        Ok(Paged::new(rows.into_iter().map(Course::from).collect(), total))
    }

    async fn languages_for(
        &self,
        course_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<String>>, AppError> {
        if course_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = timed(
            self.timeouts.read,
            sqlx::query_as(
                r#"
                SELECT cl.course_id, l.name
                FROM courses_languages cl
                JOIN language l ON l.id = cl.language_id
                WHERE cl.course_id = ANY($1)
                ORDER BY cl.course_id, l.name
                "#,
            )
            .bind(course_ids)
            .fetch_all(self.pool.as_ref()),
        )
        .await?;

        let mut grouped: HashMap<i32, Vec<String>> = HashMap::new();
        for (course_id, name) in rows {
            grouped.entry(course_id).or_default().push(name);
        }

        Ok(grouped)
    }

    async fn articles_for(
        &self,
        course_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<CourseArticle>>, AppError> {
        if course_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<CourseArticleRow> = timed(
            self.timeouts.read,
            sqlx::query_as(
                r#"
                SELECT
                    a.course_id AS owner_id, a.result, a.is_decision,
                    ct.id, ct.link, ct.title, ct.author, ct.published_date, ct.source,
                    ct.author_bs_school, ct.author_bs_school_short, ct.author_bs_department,
                    ct.author_bs_gpa, ct.author_ms_school, ct.author_ms_school_short,
                    ct.author_ms_department, ct.author_ms_gpa, ct.author_toefl,
                    ct.author_ielts, ct.author_gre, ct.author_gmat, ct.author_testdaf,
                    ct.author_goethe, ct.course_type
                FROM article a
                JOIN content ct ON ct.id = a.id
                WHERE a.course_id = ANY($1)
                ORDER BY ct.published_date DESC, ct.id DESC
                "#,
            )
            .bind(course_ids)
            .fetch_all(self.pool.as_ref()),
        )
        .await?;

        let mut grouped: HashMap<i32, Vec<CourseArticle>> = HashMap::new();
        for row in rows {
            grouped.entry(row.owner_id).or_default().push(CourseArticle {
                content: row.content,
                result: row.result,
                is_decision: row.is_decision,
            });
        }

        Ok(grouped)
    }

    async fn filters(&self) -> Result<CourseFilters, AppError> {
        let pool = self.pool.as_ref();

        let (course_types, languages, subjects, institutions) = timed(self.timeouts.read, async {
            tokio::try_join!(
                sqlx::query_scalar::<_, i32>(
                    "SELECT DISTINCT course_type FROM course ORDER BY course_type"
                )
                .fetch_all(pool),
                sqlx::query_scalar::<_, String>("SELECT name FROM language ORDER BY name")
                    .fetch_all(pool),
                sqlx::query_scalar::<_, String>(
                    "SELECT DISTINCT subject FROM course WHERE subject <> '' ORDER BY subject"
                )
                .fetch_all(pool),
                sqlx::query_scalar::<_, String>(
                    "SELECT DISTINCT name_en FROM university WHERE name_en <> '' ORDER BY name_en"
                )
                .fetch_all(pool),
            )
        })
        .await?;

        Ok(CourseFilters {
            course_types,
            languages,
            subjects,
            institutions,
        })
    }

    async fn insert(&self, course: NewCourse) -> Result<(), AppError> {
        timed(
            self.timeouts.write,
            sqlx::query(
                r#"
                INSERT INTO course (
                    id, university_id, course_type, name_en, name_en_short, name_ch,
                    name_ch_short, tuition_fees, beginning, subject, daadlink, is_elearning,
                    application_deadline, is_complete_online_possible, programme_duration,
                    is_from_daad, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
                "#,
            )
            .bind(course.id)
            .bind(course.university_id)
            .bind(course.course_type)
            .bind(course.name_en)
            .bind(course.name_en_short)
            .bind(course.name_ch)
            .bind(course.name_ch_short)
            .bind(course.tuition_fees)
            .bind(course.beginning)
            .bind(course.subject)
            .bind(course.daadlink)
            .bind(course.is_elearning)
            .bind(course.application_deadline)
            .bind(course.is_complete_online_possible)
            .bind(course.programme_duration)
            .bind(course.is_from_daad)
            .bind(course.created_at)
            .execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }
}
