//! Review request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create review request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1))]
    pub text: String,

    /// Score from 1 to 10
    pub score: i32,
}

/// Update review request (partial)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(min = 1))]
    pub text: Option<String>,

    pub score: Option<i32>,
}

/// List reviews query parameters
#[derive(Debug, Deserialize)]
pub struct ListReviewsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
