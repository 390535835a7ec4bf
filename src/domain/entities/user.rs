//! Administrator account entity.

/// A user allowed to call the write endpoints.
///
/// The stored password is a bcrypt hash and is never serialized.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}
