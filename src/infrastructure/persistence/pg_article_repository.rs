//! PostgreSQL implementation of the article repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::query::article::{INSERT_CONTENT, article_by_id_query, article_list_query};
use super::{QueryTimeouts, timed};
use crate::domain::entities::{
    ArticleCourse, ArticleFilters, Content, CourseSummary, NewCourseArticle, Paged,
};
use crate::domain::params::ArticleParams;
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

/// PostgreSQL repository for content records and course associations.
pub struct PgArticleRepository {
    pool: Arc<PgPool>,
    timeouts: QueryTimeouts,
}

impl PgArticleRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_timeouts(pool, QueryTimeouts::default())
    }

    pub fn with_timeouts(pool: Arc<PgPool>, timeouts: QueryTimeouts) -> Self {
        Self { pool, timeouts }
    }
}

#[derive(sqlx::FromRow)]
struct ArticleCourseRow {
    owner_id: i32,
    result: String,
    is_decision: bool,
    #[sqlx(flatten)]
    course: CourseSummary,
}

/// Sources listed first, in this order, by the filter endpoint.
const SOURCE_ORDER: &str = "CASE source \
    WHEN 'PTT' THEN 1 WHEN 'FB' THEN 2 WHEN 'Dcard' THEN 3 \
    WHEN 'Medium' THEN 4 WHEN 'Blog' THEN 5 ELSE 6 END";

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Content>, AppError> {
        let mut statement = article_by_id_query(id).statement();

        timed(
            self.timeouts.read,
            statement
                .build_query_as::<Content>()
                .fetch_optional(self.pool.as_ref()),
        )
        .await
    }

    async fn list(&self, params: &ArticleParams) -> Result<Paged<Content>, AppError> {
        let query = article_list_query(params);
        tracing::debug!(binds = ?query.binds(), "Listing articles");

        let mut count = query.count_query();
        let mut page = query.page_query(&params.page);

        let (total, rows) = timed(self.timeouts.read, async {
            tokio::try_join!(
                count
                    .build_query_scalar::<i64>()
                    .fetch_one(self.pool.as_ref()),
                page.build_query_as::<Content>()
                    .fetch_all(self.pool.as_ref()),
            )
        })
        .await?;

        Ok(Paged::new(rows, total))
    }

    async fn courses_for(
        &self,
        article_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<ArticleCourse>>, AppError> {
        if article_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<ArticleCourseRow> = timed(
            self.timeouts.read,
            sqlx::query_as(
                r#"
                SELECT
                    a.id AS owner_id, a.result, a.is_decision,
                    c.id, c.name_en, c.daadlink, c.is_from_daad, c.course_type,
                    c.programme_duration, c.tuition_fees, c.beginning, c.subject,
                    c.application_deadline,
                    u.name_en AS university_name_en, u.name_ch AS university_name_ch,
                    u.link AS university_link, u.is_tu9, u.is_u15, u.city
                FROM article a
                JOIN course c ON c.id = a.course_id
                JOIN university u ON u.id = c.university_id
                WHERE a.id = ANY($1)
                ORDER BY a.id, u.name_en, c.name_en, c.id
                "#,
            )
            .bind(article_ids)
            .fetch_all(self.pool.as_ref()),
        )
        .await?;

        let mut grouped: HashMap<i32, Vec<ArticleCourse>> = HashMap::new();
        for row in rows {
            grouped.entry(row.owner_id).or_default().push(ArticleCourse {
                result: row.result,
                is_decision: row.is_decision,
                course: row.course,
            });
        }

        Ok(grouped)
    }

    async fn filters(&self) -> Result<ArticleFilters, AppError> {
        let pool = self.pool.as_ref();
        let sources_sql = format!(
            "SELECT source FROM content GROUP BY source ORDER BY {SOURCE_ORDER}, source"
        );

        let (sources, bs_schools, bs_departments, ms_schools, ms_departments, course_types) =
            timed(self.timeouts.read, async {
                tokio::try_join!(
                    sqlx::query_scalar::<_, String>(&sources_sql).fetch_all(pool),
                    distinct_text(pool, "author_bs_school_short"),
                    distinct_text(pool, "author_bs_department"),
                    distinct_text(pool, "author_ms_school_short"),
                    distinct_text(pool, "author_ms_department"),
                    sqlx::query_scalar::<_, i32>(
                        "SELECT DISTINCT course_type FROM content ORDER BY course_type"
                    )
                    .fetch_all(pool),
                )
            })
            .await?;

        Ok(ArticleFilters {
            sources,
            bs_schools,
            bs_departments,
            ms_schools,
            ms_departments,
            course_types,
        })
    }

    async fn insert_content(&self, content: Content) -> Result<(), AppError> {
        timed(
            self.timeouts.write,
            sqlx::query(INSERT_CONTENT)
                .bind(content.id)
                .bind(content.link)
                .bind(content.title)
                .bind(content.author)
                .bind(content.published_at)
                .bind(content.source)
                .bind(content.author_bs_school)
                .bind(content.author_bs_school_short)
                .bind(content.author_bs_department)
                .bind(content.author_bs_gpa)
                .bind(content.author_ms_school)
                .bind(content.author_ms_school_short)
                .bind(content.author_ms_department)
                .bind(content.author_ms_gpa)
                .bind(content.author_toefl)
                .bind(content.author_ielts)
                .bind(content.author_gre)
                .bind(content.author_gmat)
                .bind(content.author_testdaf)
                .bind(content.author_goethe)
                .bind(content.course_type)
                .execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }

    async fn insert_association(&self, association: NewCourseArticle) -> Result<(), AppError> {
        timed(
            self.timeouts.write,
            sqlx::query(
                r#"
                INSERT INTO article (id, course_id, result, is_decision)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(association.article_id)
            .bind(association.course_id)
            .bind(association.result)
            .bind(association.is_decision)
            .execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }
}

/// Distinct non-empty values of one content column, ascending.
async fn distinct_text(pool: &PgPool, column: &'static str) -> Result<Vec<String>, sqlx::Error> {
    let sql = format!(
        "SELECT DISTINCT {column} FROM content WHERE {column} <> '' ORDER BY {column}"
    );
    sqlx::query_scalar::<_, String>(&sql).fetch_all(pool).await
}
