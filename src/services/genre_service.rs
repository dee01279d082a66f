//! Genre service

use sqlx::PgPool;

use crate::{
    db::repositories::GenreRepository,
    error::{AppError, AppResult},
    models::Genre,
    utils::validation,
};

/// Genre service for business logic
pub struct GenreService;

impl GenreService {
    /// List genres with pagination
    pub async fn list_genres(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> AppResult<(Vec<Genre>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        GenreRepository::list(pool, offset, limit, search).await
    }

    /// Create a genre
    pub async fn create_genre(pool: &PgPool, name: &str, slug: &str) -> AppResult<Genre> {
        validation::validate_slug(slug).map_err(|e| AppError::Validation(e.to_string()))?;

        if GenreRepository::find_by_slug(pool, slug).await?.is_some() {
            return Err(AppError::Validation("Slug is already in use".to_string()));
        }

        GenreRepository::create(pool, name, slug).await
    }

    /// Delete a genre by slug
    pub async fn delete_genre(pool: &PgPool, slug: &str) -> AppResult<()> {
        if !GenreRepository::delete_by_slug(pool, slug).await? {
            return Err(AppError::NotFound("Genre not found".to_string()));
        }
        Ok(())
    }
}
