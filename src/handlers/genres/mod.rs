//! Genre handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Genre routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_genres))
        .route("/", post(handler::create_genre))
        .route("/{slug}", delete(handler::delete_genre))
}
