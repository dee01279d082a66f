//! Title repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::RatedTitle};

/// Rating expression shared by every title query. The rating is derived at
/// read time: average review score, 0 when the title has no reviews.
const RATING_SELECT: &str = r#"
    SELECT t.id, t.name, t.year, t.description, t.category_id,
           COALESCE((SELECT AVG(r.score)::float8 FROM reviews r WHERE r.title_id = t.id), 0) AS rating
    FROM titles t
"#;

/// Repository for title database operations
pub struct TitleRepository;

impl TitleRepository {
    /// Create a new title with its genre links
    pub async fn create(
        pool: &PgPool,
        name: &str,
        year: i32,
        description: Option<&str>,
        category_id: &Uuid,
        genre_ids: &[Uuid],
    ) -> AppResult<RatedTitle> {
        let mut tx = pool.begin().await?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO titles (name, year, description, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(year)
        .bind(description)
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await?;

        for genre_id in genre_ids {
            sqlx::query(r#"INSERT INTO genre_titles (title_id, genre_id) VALUES ($1, $2)"#)
                .bind(id)
                .bind(genre_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        let title = Self::find_by_id(pool, &id)
            .await?
            .ok_or_else(|| crate::error::AppError::Database("Title vanished after insert".to_string()))?;

        Ok(title)
    }

    /// Find title by ID, with its computed rating
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<RatedTitle>> {
        let query = format!("{RATING_SELECT} WHERE t.id = $1");
        let title = sqlx::query_as::<_, RatedTitle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(title)
    }

    /// Update title fields; absent values keep the stored ones.
    /// When `genre_ids` is present the genre links are replaced wholesale.
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        year: Option<i32>,
        description: Option<&str>,
        category_id: Option<&Uuid>,
        genre_ids: Option<&[Uuid]>,
    ) -> AppResult<RatedTitle> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE titles
            SET
                name = COALESCE($2, name),
                year = COALESCE($3, year),
                description = COALESCE($4, description),
                category_id = COALESCE($5, category_id)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(year)
        .bind(description)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        if let Some(genre_ids) = genre_ids {
            sqlx::query(r#"DELETE FROM genre_titles WHERE title_id = $1"#)
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for genre_id in genre_ids {
                sqlx::query(r#"INSERT INTO genre_titles (title_id, genre_id) VALUES ($1, $2)"#)
                    .bind(id)
                    .bind(genre_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;

        let title = Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| crate::error::AppError::NotFound("Title not found".to_string()))?;

        Ok(title)
    }

    /// Delete title
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM titles WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List titles with pagination and filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        category_slug: Option<&str>,
        genre_slug: Option<&str>,
        name: Option<&str>,
        year: Option<i32>,
    ) -> AppResult<(Vec<RatedTitle>, i64)> {
        let name_pattern = name.map(|s| format!("%{}%", s));

        const FILTERS: &str = r#"
            ($1::text IS NULL OR EXISTS (
                SELECT 1 FROM categories c WHERE c.id = t.category_id AND c.slug = $1))
            AND ($2::text IS NULL OR EXISTS (
                SELECT 1 FROM genre_titles gt JOIN genres g ON g.id = gt.genre_id
                WHERE gt.title_id = t.id AND g.slug = $2))
            AND ($3::text IS NULL OR t.name ILIKE $3)
            AND ($4::int4 IS NULL OR t.year = $4)
        "#;

        let query = format!(
            "{RATING_SELECT} WHERE {FILTERS} ORDER BY t.name OFFSET $5 LIMIT $6"
        );
        let titles = sqlx::query_as::<_, RatedTitle>(&query)
            .bind(category_slug)
            .bind(genre_slug)
            .bind(&name_pattern)
            .bind(year)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM titles t WHERE {FILTERS}");
        let count: i64 = sqlx::query_scalar(&count_query)
            .bind(category_slug)
            .bind(genre_slug)
            .bind(&name_pattern)
            .bind(year)
            .fetch_one(pool)
            .await?;

        Ok((titles, count))
    }
}
