//! Genre response DTOs

use serde::Serialize;

use crate::models::Genre;

/// Genre representation in API payloads
#[derive(Debug, Serialize)]
pub struct GenreResponse {
    pub name: String,
    pub slug: String,
}

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        Self {
            name: genre.name,
            slug: genre.slug,
        }
    }
}

/// Genre list response
#[derive(Debug, Serialize)]
pub struct GenresListResponse {
    pub genres: Vec<GenreResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
