//! PostgreSQL implementation of the university repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{QueryTimeouts, timed};
use crate::domain::entities::NewUniversity;
use crate::domain::repositories::UniversityRepository;
use crate::error::AppError;

pub struct PgUniversityRepository {
    pool: Arc<PgPool>,
    timeouts: QueryTimeouts,
}

impl PgUniversityRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_timeouts(pool, QueryTimeouts::default())
    }

    pub fn with_timeouts(pool: Arc<PgPool>, timeouts: QueryTimeouts) -> Self {
        Self { pool, timeouts }
    }
}

#[async_trait]
impl UniversityRepository for PgUniversityRepository {
    async fn insert(&self, university: NewUniversity) -> Result<(), AppError> {
        let ranking = university.stored_ranking();

        timed(
            self.timeouts.write,
            sqlx::query(
                r#"
                INSERT INTO university (
                    id, name_en, name_ch, city, is_from_daad, is_tu9, is_u15, link, qs_ranking
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(university.id)
            .bind(university.name_en)
            .bind(university.name_ch)
            .bind(university.city)
            .bind(university.is_from_daad)
            .bind(university.is_tu9)
            .bind(university.is_u15)
            .bind(university.link)
            .bind(ranking)
            .execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }
}
