//! Title handlers

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

/// Title routes. PUT is intentionally absent: PATCH is the only update
/// verb, and axum answers PUT with 405.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_titles))
        .route("/", post(handler::create_title))
        .route("/{title_id}", get(handler::get_title))
        .route("/{title_id}", patch(handler::update_title))
        .route("/{title_id}", delete(handler::delete_title))
}
