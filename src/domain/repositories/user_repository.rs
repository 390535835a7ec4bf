//! Repository trait for administrator accounts.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::error::AppError;

/// Repository interface for administrator accounts.
///
/// Used by the sign-in flow and the admin CLI.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Stores a new user with an already hashed password.
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, AppError>;

    /// Lists all users ordered by id.
    async fn list(&self) -> Result<Vec<User>, AppError>;
}
