//! Title response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::{
    handlers::{categories::response::CategoryResponse, genres::response::GenreResponse},
    models::{Category, Genre, RatedTitle},
};

/// Title read representation: nested category/genres plus computed rating
#[derive(Debug, Serialize)]
pub struct TitleResponse {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    /// Average review score, 0 when the title has no reviews
    pub rating: f64,
    pub description: Option<String>,
    pub genre: Vec<GenreResponse>,
    pub category: Option<CategoryResponse>,
}

impl TitleResponse {
    /// Assemble the read shape from its parts
    pub fn from_parts(title: RatedTitle, category: Option<Category>, genres: Vec<Genre>) -> Self {
        Self {
            id: title.id,
            name: title.name,
            year: title.year,
            rating: title.rating,
            description: title.description,
            genre: genres.into_iter().map(GenreResponse::from).collect(),
            category: category.map(CategoryResponse::from),
        }
    }
}

/// Title list response
#[derive(Debug, Serialize)]
pub struct TitlesListResponse {
    pub titles: Vec<TitleResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
