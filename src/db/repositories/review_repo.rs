//! Review repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::ReviewWithAuthor};

const REVIEW_SELECT: &str = r#"
    SELECT r.id, r.title_id, r.author_id, u.username AS author_username,
           r.text, r.score, r.pub_date
    FROM reviews r
    JOIN users u ON u.id = r.author_id
"#;

/// Repository for review database operations
pub struct ReviewRepository;

impl ReviewRepository {
    /// Create a new review
    pub async fn create(
        pool: &PgPool,
        title_id: &Uuid,
        author_id: &Uuid,
        text: &str,
        score: i32,
    ) -> AppResult<ReviewWithAuthor> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO reviews (title_id, author_id, text, score)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(title_id)
        .bind(author_id)
        .bind(text)
        .bind(score)
        .fetch_one(pool)
        .await?;

        let review = Self::find_by_id(pool, &id)
            .await?
            .ok_or_else(|| crate::error::AppError::Database("Review vanished after insert".to_string()))?;

        Ok(review)
    }

    /// Find review by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<ReviewWithAuthor>> {
        let query = format!("{REVIEW_SELECT} WHERE r.id = $1");
        let review = sqlx::query_as::<_, ReviewWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(review)
    }

    /// Check whether an author has already reviewed a title
    pub async fn exists_for_author(
        pool: &PgPool,
        title_id: &Uuid,
        author_id: &Uuid,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM reviews WHERE title_id = $1 AND author_id = $2)"#,
        )
        .bind(title_id)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Update review text and/or score
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        text: Option<&str>,
        score: Option<i32>,
    ) -> AppResult<ReviewWithAuthor> {
        sqlx::query(
            r#"
            UPDATE reviews
            SET text = COALESCE($2, text), score = COALESCE($3, score)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(text)
        .bind(score)
        .execute(pool)
        .await?;

        let review = Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| crate::error::AppError::NotFound("Review not found".to_string()))?;

        Ok(review)
    }

    /// Delete review
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM reviews WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List a title's reviews with pagination
    pub async fn list_for_title(
        pool: &PgPool,
        title_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ReviewWithAuthor>, i64)> {
        let query = format!(
            "{REVIEW_SELECT} WHERE r.title_id = $1 ORDER BY r.pub_date DESC OFFSET $2 LIMIT $3"
        );
        let reviews = sqlx::query_as::<_, ReviewWithAuthor>(&query)
            .bind(title_id)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM reviews WHERE title_id = $1"#)
                .bind(title_id)
                .fetch_one(pool)
                .await?;

        Ok((reviews, count))
    }
}
