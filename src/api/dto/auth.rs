//! DTOs for the sign-in endpoint.

use serde::Deserialize;
use validator::Validate;

/// Credentials posted to `POST /v1/account/signin`. `username` is the email.
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(length(min = 1, max = 254))]
    pub username: String,
    #[validate(length(min = 1, max = 1024))]
    pub password: String,
}
