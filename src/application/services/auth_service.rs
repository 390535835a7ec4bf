//! Administrator sign-in and bearer credential verification.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Claims carried by an issued credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

/// Signing parameters for issued credentials.
#[derive(Clone)]
pub struct JwtSettings {
    pub secret: String,
    /// Used as both issuer and audience.
    pub issuer: String,
    pub ttl: Duration,
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"***")
            .field("issuer", &self.issuer)
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Hash at [`bcrypt::DEFAULT_COST`] that no account uses, verified against
/// when the email is unknown.
const UNKNOWN_USER_HASH: &str = "$2b$12$qwtyikftm.ZlEOYn20VfUeqOWNJiL/s/xm6AGVC4Iyqqr19936Rkq";

/// Hashes a plaintext password for storage.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        AppError::internal("Password hashing failed", json!({}))
    })
}

/// Service for signing administrators in and checking their credentials.
///
/// Unknown users and wrong passwords produce the same error.
pub struct AuthService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
    settings: JwtSettings,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    pub fn new(repository: Arc<R>, settings: JwtSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Verifies an email/password pair and returns a signed credential.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for an unknown email or a wrong password.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self.repository.find_by_email(email).await?;
        let hash = user.as_ref().map(|u| u.password_hash.clone());

        match (password_matches(password.to_owned(), hash).await?, user) {
            (true, Some(user)) => {
                let token = self.issue_token(user.id)?;
                tracing::info!(user_id = user.id, "User signed in");
                Ok(token)
            }
            _ => {
                tracing::warn!("Sign-in rejected");
                Err(rejected())
            }
        }
    }

    /// Signs a credential for `user_id` valid from now for the configured lifetime.
    pub fn issue_token(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + self.settings.ttl).timestamp(),
            iss: self.settings.issuer.clone(),
            aud: self.settings.issuer.clone(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.settings.secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Credential signing failed");
            AppError::internal("Internal error", json!({}))
        })
    }

    /// Checks signature, expiry, issuer and audience of a bearer credential.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if any check fails.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.settings.issuer.as_str()]);
        validation.set_audience(&[self.settings.issuer.as_str()]);
        validation.validate_nbf = true;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.settings.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::warn!(reason = %e, "Bearer credential rejected");
            rejected()
        })
    }
}

/// Checks `password` against `hash`, or against [`UNKNOWN_USER_HASH`] when
/// there is no account, so both cases cost one bcrypt verify.
async fn password_matches(password: String, hash: Option<String>) -> Result<bool, AppError> {
    let known = hash.is_some();
    let hash = hash.unwrap_or_else(|| UNKNOWN_USER_HASH.to_string());

    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password check task failed");
            AppError::internal("Internal error", json!({}))
        })?;

    match outcome {
        Ok(matches) => Ok(known && matches),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is unreadable");
            Ok(false)
        }
    }
}

fn rejected() -> AppError {
    AppError::unauthorized("Unauthorized", json!({}))
}
