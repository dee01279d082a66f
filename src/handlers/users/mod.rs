//! User management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_users))
        .route("/", post(handler::create_user))
        .route("/me", get(handler::get_me))
        .route("/me", patch(handler::update_me))
        .route("/{username}", get(handler::get_user))
        .route("/{username}", patch(handler::update_user))
        .route("/{username}", delete(handler::delete_user))
}
