//! PostgreSQL implementation of the user repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{QueryTimeouts, timed};
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for administrator accounts.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
    timeouts: QueryTimeouts,
}

impl PgUserRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_timeouts(pool, QueryTimeouts::default())
    }

    pub fn with_timeouts(pool: Arc<PgPool>, timeouts: QueryTimeouts) -> Self {
        Self { pool, timeouts }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        timed(
            self.timeouts.read,
            sqlx::query_as::<_, User>(
                "SELECT id, email, password FROM gogermany_user WHERE email = $1",
            )
            .bind(email)
            .fetch_optional(self.pool.as_ref()),
        )
        .await
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        timed(
            self.timeouts.write,
            sqlx::query_as::<_, User>(
                r#"
                INSERT INTO gogermany_user (email, password)
                VALUES ($1, $2)
                RETURNING id, email, password
                "#,
            )
            .bind(email)
            .bind(password_hash)
            .fetch_one(self.pool.as_ref()),
        )
        .await
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        timed(
            self.timeouts.read,
            sqlx::query_as::<_, User>("SELECT id, email, password FROM gogermany_user ORDER BY id")
                .fetch_all(self.pool.as_ref()),
        )
        .await
    }
}
