//! Comment handlers, nested under a review

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

/// Comment routes, nested under `/titles/{title_id}/reviews/{review_id}/comments`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_comments))
        .route("/", post(handler::create_comment))
        .route("/{comment_id}", get(handler::get_comment))
        .route("/{comment_id}", patch(handler::update_comment))
        .route("/{comment_id}", delete(handler::delete_comment))
}
