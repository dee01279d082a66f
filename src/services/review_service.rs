//! Review service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ReviewRepository, TitleRepository},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::ReviewWithAuthor,
    utils::validation,
};

/// Review service for business logic
pub struct ReviewService;

impl ReviewService {
    /// List a title's reviews
    pub async fn list_reviews(
        pool: &PgPool,
        title_id: &Uuid,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<ReviewWithAuthor>, i64)> {
        Self::ensure_title(pool, title_id).await?;

        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        ReviewRepository::list_for_title(pool, title_id, offset, limit).await
    }

    /// Create a review. Each author gets one review per title.
    pub async fn create_review(
        pool: &PgPool,
        title_id: &Uuid,
        author: &AuthenticatedUser,
        text: &str,
        score: i32,
    ) -> AppResult<ReviewWithAuthor> {
        Self::ensure_title(pool, title_id).await?;
        validation::validate_score(score).map_err(|e| AppError::Validation(e.to_string()))?;

        if ReviewRepository::exists_for_author(pool, title_id, &author.id).await? {
            return Err(AppError::Validation(
                "You have already reviewed this title".to_string(),
            ));
        }

        ReviewRepository::create(pool, title_id, &author.id, text, score).await
    }

    /// Get a review under a title
    pub async fn get_review(
        pool: &PgPool,
        title_id: &Uuid,
        review_id: &Uuid,
    ) -> AppResult<ReviewWithAuthor> {
        let review = ReviewRepository::find_by_id(pool, review_id)
            .await?
            .filter(|r| r.title_id == *title_id)
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        Ok(review)
    }

    /// Update a review (author, moderator or admin)
    pub async fn update_review(
        pool: &PgPool,
        title_id: &Uuid,
        review_id: &Uuid,
        requester: &AuthenticatedUser,
        text: Option<&str>,
        score: Option<i32>,
    ) -> AppResult<ReviewWithAuthor> {
        let review = Self::get_review(pool, title_id, review_id).await?;
        Self::check_write_access(&review.author_id, requester)?;

        if let Some(score) = score {
            validation::validate_score(score).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        ReviewRepository::update(pool, review_id, text, score).await
    }

    /// Delete a review (author, moderator or admin)
    pub async fn delete_review(
        pool: &PgPool,
        title_id: &Uuid,
        review_id: &Uuid,
        requester: &AuthenticatedUser,
    ) -> AppResult<()> {
        let review = Self::get_review(pool, title_id, review_id).await?;
        Self::check_write_access(&review.author_id, requester)?;

        ReviewRepository::delete(pool, review_id).await?;
        Ok(())
    }

    /// Authors own their content; moderators and admins may act on anyone's
    pub fn check_write_access(author_id: &Uuid, requester: &AuthenticatedUser) -> AppResult<()> {
        if *author_id == requester.id || requester.can_moderate() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Only the author or a moderator can modify this".to_string(),
            ))
        }
    }

    async fn ensure_title(pool: &PgPool, title_id: &Uuid) -> AppResult<()> {
        TitleRepository::find_by_id(pool, title_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Title not found".to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::roles;

    fn requester(id: Uuid, role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            id,
            username: "someone".to_string(),
            role: role.to_string(),
            is_superuser: false,
        }
    }

    #[test]
    fn test_author_can_write() {
        let author_id = Uuid::new_v4();
        let caller = requester(author_id, roles::USER);
        assert!(ReviewService::check_write_access(&author_id, &caller).is_ok());
    }

    #[test]
    fn test_moderator_and_admin_can_write_others() {
        let author_id = Uuid::new_v4();
        let moderator = requester(Uuid::new_v4(), roles::MODERATOR);
        let admin = requester(Uuid::new_v4(), roles::ADMIN);
        assert!(ReviewService::check_write_access(&author_id, &moderator).is_ok());
        assert!(ReviewService::check_write_access(&author_id, &admin).is_ok());
    }

    #[test]
    fn test_stranger_cannot_write() {
        let author_id = Uuid::new_v4();
        let stranger = requester(Uuid::new_v4(), roles::USER);
        assert!(ReviewService::check_write_access(&author_id, &stranger).is_err());
    }
}
