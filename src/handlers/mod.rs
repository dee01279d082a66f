//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod categories;
pub mod comments;
pub mod genres;
pub mod health;
pub mod reviews;
pub mod titles;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/users", users::routes())
        .nest("/categories", categories::routes())
        .nest("/genres", genres::routes())
        .nest("/titles", titles::routes())
        .nest("/titles/{title_id}/reviews", reviews::routes())
        .nest(
            "/titles/{title_id}/reviews/{review_id}/comments",
            comments::routes(),
        )
}
