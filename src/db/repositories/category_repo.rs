//! Category repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Category};

/// Repository for category database operations
pub struct CategoryRepository;

impl CategoryRepository {
    /// Create a new category
    pub async fn create(pool: &PgPool, name: &str, slug: &str) -> AppResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await?;

        Ok(category)
    }

    /// Find category by slug
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> AppResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>(r#"SELECT * FROM categories WHERE slug = $1"#)
                .bind(slug)
                .fetch_optional(pool)
                .await?;

        Ok(category)
    }

    /// Delete category by slug
    pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM categories WHERE slug = $1"#)
            .bind(slug)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List categories with pagination, searching by name
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
    ) -> AppResult<(Vec<Category>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT * FROM categories
            WHERE ($1::text IS NULL OR name ILIKE $1)
            ORDER BY name
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM categories
            WHERE ($1::text IS NULL OR name ILIKE $1)
            "#,
        )
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((categories, count))
    }
}
