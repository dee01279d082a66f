//! Category service

use sqlx::PgPool;

use crate::{
    db::repositories::CategoryRepository,
    error::{AppError, AppResult},
    models::Category,
    utils::validation,
};

/// Category service for business logic
pub struct CategoryService;

impl CategoryService {
    /// List categories with pagination
    pub async fn list_categories(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> AppResult<(Vec<Category>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        CategoryRepository::list(pool, offset, limit, search).await
    }

    /// Create a category
    pub async fn create_category(pool: &PgPool, name: &str, slug: &str) -> AppResult<Category> {
        validation::validate_slug(slug).map_err(|e| AppError::Validation(e.to_string()))?;

        if CategoryRepository::find_by_slug(pool, slug).await?.is_some() {
            return Err(AppError::Validation("Slug is already in use".to_string()));
        }

        CategoryRepository::create(pool, name, slug).await
    }

    /// Delete a category by slug
    pub async fn delete_category(pool: &PgPool, slug: &str) -> AppResult<()> {
        if !CategoryRepository::delete_by_slug(pool, slug).await? {
            return Err(AppError::NotFound("Category not found".to_string()));
        }
        Ok(())
    }
}
