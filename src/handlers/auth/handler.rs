//! Authentication handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    services::AuthService,
    state::AppState,
};

use super::{
    request::{RefreshTokenRequest, SignupRequest, TokenRequest},
    response::{SignupResponse, TokenResponse},
};

/// Sign up with username and email; a confirmation code is issued.
/// Signing up again with the same pair re-issues the code.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<Json<SignupResponse>> {
    payload.validate()?;

    let user = AuthService::signup(
        state.db(),
        state.redis(),
        state.config(),
        &payload.username,
        &payload.email,
    )
    .await?;

    Ok(Json(SignupResponse {
        username: user.username,
        email: user.email,
    }))
}

/// Exchange a confirmation code for an access/refresh token pair
pub async fn token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    payload.validate()?;

    let (_user, access_token, refresh_token, expires_in) = AuthService::issue_tokens(
        state.db(),
        state.redis(),
        state.config(),
        &payload.username,
        &payload.confirmation_code,
    )
    .await?;

    Ok(Json(TokenResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in,
    }))
}

/// Refresh access token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let (access_token, refresh_token, expires_in) = AuthService::refresh_token(
        state.db(),
        state.redis(),
        state.config(),
        &payload.refresh_token,
    )
    .await?;

    Ok(Json(TokenResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in,
    }))
}
