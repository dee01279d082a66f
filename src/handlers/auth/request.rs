//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_EMAIL_LENGTH, MAX_USERNAME_LENGTH};

/// Signup request: both fields are required, the confirmation code is
/// delivered out-of-band
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = MAX_USERNAME_LENGTH))]
    pub username: String,

    #[validate(length(min = 3, max = MAX_EMAIL_LENGTH))]
    pub email: String,
}

/// Token request: exchanges a confirmation code for a token pair
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1, max = MAX_USERNAME_LENGTH))]
    pub username: String,

    #[validate(length(min = 1))]
    pub confirmation_code: String,
}

/// Token refresh request
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}
