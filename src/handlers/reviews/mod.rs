//! Review handlers, nested under a title

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

/// Review routes, nested under `/titles/{title_id}/reviews`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_reviews))
        .route("/", post(handler::create_review))
        .route("/{review_id}", get(handler::get_review))
        .route("/{review_id}", patch(handler::update_review))
        .route("/{review_id}", delete(handler::delete_review))
}
