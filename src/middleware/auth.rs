//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{constants::roles, error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub is_superuser: bool,
}

impl AuthenticatedUser {
    /// Check if the caller has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN || self.is_superuser
    }

    /// Check if the caller can edit or delete other users' reviews and comments
    pub fn can_moderate(&self) -> bool {
        self.is_admin() || self.role == roles::MODERATOR
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Optional authentication middleware (doesn't fail if no token)
///
/// Applied to the whole router: read endpoints serve anonymous requests,
/// while write handlers extract [`AuthenticatedUser`] and get a 401 when
/// no valid token put an identity on the request.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            match user_from_token(token, &state) {
                Ok(user) => {
                    debug!(user_id = %user.id, username = %user.username, role = %user.role, "User authenticated");
                    request.extensions_mut().insert(user);
                }
                Err(e) => {
                    debug!(path = %request.uri().path(), error = ?e, "Token verification failed");
                }
            }
        }
    }

    next.run(request).await
}

fn user_from_token(token: &str, state: &AppState) -> Result<AuthenticatedUser, AppError> {
    let claims = AuthService::verify_token(token, &state.config().jwt.secret)?;
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    Ok(AuthenticatedUser {
        id: user_id,
        username: claims.username,
        role: claims.role,
        is_superuser: claims.is_superuser,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(role: &str, is_superuser: bool) -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "caller".to_string(),
            role: role.to_string(),
            is_superuser,
        }
    }

    #[test]
    fn test_permission_predicates() {
        assert!(caller("admin", false).is_admin());
        assert!(caller("user", true).is_admin());
        assert!(!caller("moderator", false).is_admin());
        assert!(caller("moderator", false).can_moderate());
        assert!(caller("user", true).can_moderate());
        assert!(!caller("user", false).can_moderate());
    }
}
