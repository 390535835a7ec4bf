//! Repository trait for university writes.

use async_trait::async_trait;

use crate::domain::entities::NewUniversity;
use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UniversityRepository: Send + Sync {
    /// Inserts a university.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store rejects the row.
    async fn insert(&self, university: NewUniversity) -> Result<(), AppError>;
}
