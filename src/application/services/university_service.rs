//! University insert service.

use std::sync::Arc;

use crate::domain::entities::NewUniversity;
use crate::domain::repositories::UniversityRepository;
use crate::error::AppError;

pub struct UniversityService<R: UniversityRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UniversityRepository + ?Sized> UniversityService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Inserts a university. Duplicate ids surface as the store's failure.
    pub async fn create(&self, university: NewUniversity) -> Result<(), AppError> {
        let id = university.id;
        self.repository.insert(university).await?;
        tracing::info!(university_id = id, "University created");
        Ok(())
    }
}
