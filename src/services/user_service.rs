//! User service

use sqlx::PgPool;

use crate::{
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::validation,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by username
    pub async fn get_by_username(pool: &PgPool, username: &str) -> AppResult<User> {
        UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List users with pagination, searching by username
    pub async fn list_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        UserRepository::list(pool, offset, limit, search).await
    }

    /// Create a user (admin operation)
    pub async fn create_user(
        pool: &PgPool,
        username: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        bio: &str,
        role: Option<&str>,
    ) -> AppResult<User> {
        validation::validate_username(username)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;

        let role = role.unwrap_or(roles::USER);
        validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;

        if UserRepository::find_by_username(pool, username).await?.is_some() {
            return Err(AppError::Validation("Username is already in use".to_string()));
        }
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::Validation("Email is already in use".to_string()));
        }

        UserRepository::create(pool, username, email, first_name, last_name, bio, role).await
    }

    /// Update a user by username (admin operation)
    pub async fn update_user(
        pool: &PgPool,
        username: &str,
        email: Option<&str>,
        first_name: Option<&str>,
        last_name: Option<&str>,
        bio: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<User> {
        let user = Self::get_by_username(pool, username).await?;

        if let Some(email) = email {
            validation::validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;
            if let Some(other) = UserRepository::find_by_email(pool, email).await? {
                if other.id != user.id {
                    return Err(AppError::Validation("Email is already in use".to_string()));
                }
            }
        }
        if let Some(role) = role {
            validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        UserRepository::update(pool, &user.id, email, first_name, last_name, bio, role).await
    }

    /// Update the caller's own record. The role field is not accepted here:
    /// the stored role always wins, whatever the request carried.
    pub async fn update_self(
        pool: &PgPool,
        username: &str,
        email: Option<&str>,
        first_name: Option<&str>,
        last_name: Option<&str>,
        bio: Option<&str>,
    ) -> AppResult<User> {
        Self::update_user(pool, username, email, first_name, last_name, bio, None).await
    }

    /// Delete a user by username (admin operation)
    pub async fn delete_user(pool: &PgPool, username: &str) -> AppResult<()> {
        if !UserRepository::delete_by_username(pool, username).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}
