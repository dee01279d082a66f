//! Genre request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_SLUG_LENGTH};

/// Create genre request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGenreRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_SLUG_LENGTH))]
    pub slug: String,
}

/// List genres query parameters
#[derive(Debug, Deserialize)]
pub struct ListGenresQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}
