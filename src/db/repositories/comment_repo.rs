//! Comment repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::CommentWithAuthor};

const COMMENT_SELECT: &str = r#"
    SELECT c.id, c.review_id, c.author_id, u.username AS author_username,
           c.text, c.pub_date
    FROM comments c
    JOIN users u ON u.id = c.author_id
"#;

/// Repository for comment database operations
pub struct CommentRepository;

impl CommentRepository {
    /// Create a new comment
    pub async fn create(
        pool: &PgPool,
        review_id: &Uuid,
        author_id: &Uuid,
        text: &str,
    ) -> AppResult<CommentWithAuthor> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO comments (review_id, author_id, text)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(review_id)
        .bind(author_id)
        .bind(text)
        .fetch_one(pool)
        .await?;

        let comment = Self::find_by_id(pool, &id)
            .await?
            .ok_or_else(|| crate::error::AppError::Database("Comment vanished after insert".to_string()))?;

        Ok(comment)
    }

    /// Find comment by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<CommentWithAuthor>> {
        let query = format!("{COMMENT_SELECT} WHERE c.id = $1");
        let comment = sqlx::query_as::<_, CommentWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(comment)
    }

    /// Update comment text
    pub async fn update(pool: &PgPool, id: &Uuid, text: &str) -> AppResult<CommentWithAuthor> {
        sqlx::query(r#"UPDATE comments SET text = $2 WHERE id = $1"#)
            .bind(id)
            .bind(text)
            .execute(pool)
            .await?;

        let comment = Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| crate::error::AppError::NotFound("Comment not found".to_string()))?;

        Ok(comment)
    }

    /// Delete comment
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM comments WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List a review's comments with pagination
    pub async fn list_for_review(
        pool: &PgPool,
        review_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<CommentWithAuthor>, i64)> {
        let query = format!(
            "{COMMENT_SELECT} WHERE c.review_id = $1 ORDER BY c.pub_date DESC OFFSET $2 LIMIT $3"
        );
        let comments = sqlx::query_as::<_, CommentWithAuthor>(&query)
            .bind(review_id)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM comments WHERE review_id = $1"#)
                .bind(review_id)
                .fetch_one(pool)
                .await?;

        Ok((comments, count))
    }
}
