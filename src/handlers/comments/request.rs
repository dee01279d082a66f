//! Comment request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create comment request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1))]
    pub text: String,
}

/// Update comment request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1))]
    pub text: String,
}

/// List comments query parameters
#[derive(Debug, Deserialize)]
pub struct ListCommentsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
