//! Comment service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::CommentRepository,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::CommentWithAuthor,
    services::ReviewService,
};

/// Comment service for business logic
pub struct CommentService;

impl CommentService {
    /// List a review's comments
    pub async fn list_comments(
        pool: &PgPool,
        title_id: &Uuid,
        review_id: &Uuid,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<CommentWithAuthor>, i64)> {
        ReviewService::get_review(pool, title_id, review_id).await?;

        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        CommentRepository::list_for_review(pool, review_id, offset, limit).await
    }

    /// Create a comment under a review
    pub async fn create_comment(
        pool: &PgPool,
        title_id: &Uuid,
        review_id: &Uuid,
        author: &AuthenticatedUser,
        text: &str,
    ) -> AppResult<CommentWithAuthor> {
        ReviewService::get_review(pool, title_id, review_id).await?;

        CommentRepository::create(pool, review_id, &author.id, text).await
    }

    /// Get a comment under a review
    pub async fn get_comment(
        pool: &PgPool,
        title_id: &Uuid,
        review_id: &Uuid,
        comment_id: &Uuid,
    ) -> AppResult<CommentWithAuthor> {
        ReviewService::get_review(pool, title_id, review_id).await?;

        let comment = CommentRepository::find_by_id(pool, comment_id)
            .await?
            .filter(|c| c.review_id == *review_id)
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        Ok(comment)
    }

    /// Update a comment (author, moderator or admin)
    pub async fn update_comment(
        pool: &PgPool,
        title_id: &Uuid,
        review_id: &Uuid,
        comment_id: &Uuid,
        requester: &AuthenticatedUser,
        text: &str,
    ) -> AppResult<CommentWithAuthor> {
        let comment = Self::get_comment(pool, title_id, review_id, comment_id).await?;
        ReviewService::check_write_access(&comment.author_id, requester)?;

        CommentRepository::update(pool, comment_id, text).await
    }

    /// Delete a comment (author, moderator or admin)
    pub async fn delete_comment(
        pool: &PgPool,
        title_id: &Uuid,
        review_id: &Uuid,
        comment_id: &Uuid,
        requester: &AuthenticatedUser,
    ) -> AppResult<()> {
        let comment = Self::get_comment(pool, title_id, review_id, comment_id).await?;
        ReviewService::check_write_access(&comment.author_id, requester)?;

        CommentRepository::delete(pool, comment_id).await?;
        Ok(())
    }
}
