//! Genre repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Genre};

/// Repository for genre database operations
pub struct GenreRepository;

impl GenreRepository {
    /// Create a new genre
    pub async fn create(pool: &PgPool, name: &str, slug: &str) -> AppResult<Genre> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (name, slug)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await?;

        Ok(genre)
    }

    /// Find genre by slug
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(r#"SELECT * FROM genres WHERE slug = $1"#)
            .bind(slug)
            .fetch_optional(pool)
            .await?;

        Ok(genre)
    }

    /// Delete genre by slug
    pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM genres WHERE slug = $1"#)
            .bind(slug)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List genres with pagination, searching by name
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
    ) -> AppResult<(Vec<Genre>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT * FROM genres
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
            SELECT COUNT(*) FROM genres
            WHERE ($1::text IS NULL OR name ILIKE $1)
            "#,
        )
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((genres, count))
    }

    /// Fetch the genres attached to a title, ordered by name
    pub async fn list_for_title(pool: &PgPool, title_id: &Uuid) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.* FROM genres g
            JOIN genre_titles gt ON gt.genre_id = g.id
            WHERE gt.title_id = $1
            ORDER BY g.name
            "#,
        )
        .bind(title_id)
        .fetch_all(pool)
        .await?;

        Ok(genres)
    }
}
