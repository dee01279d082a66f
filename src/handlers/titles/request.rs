//! Title request DTOs
//!
//! The write representation references category and genres by slug; the
//! response is always the read representation with nested objects.

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Create title request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTitleRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    pub year: i32,

    pub description: Option<String>,

    /// Genre slugs; at least one is required
    #[validate(length(min = 1))]
    pub genre: Vec<String>,

    /// Category slug
    #[validate(length(min = 1))]
    pub category: String,
}

/// Update title request (partial)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTitleRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    pub year: Option<i32>,

    pub description: Option<String>,

    pub genre: Option<Vec<String>>,

    pub category: Option<String>,
}

/// List titles query parameters
#[derive(Debug, Deserialize)]
pub struct ListTitlesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Filter by category slug
    pub category: Option<String>,
    /// Filter by genre slug
    pub genre: Option<String>,
    /// Filter by name substring
    pub name: Option<String>,
    /// Filter by exact release year
    pub year: Option<i32>,
}
