//! Authentication service
//!
//! Implements the two-step signup flow: a confirmation code is issued for a
//! (username, email) pair and later exchanged for a JWT access/refresh pair.
//! Codes and refresh tokens live in Redis under TTLs; only a SHA-256 hash of
//! the code is stored.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::{crypto, mailer, validation},
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub is_superuser: bool,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Sign up: create the user if needed and issue a confirmation code.
    ///
    /// Re-signup with a matching (username, email) pair is idempotent and
    /// re-issues a fresh code. Reusing either field with a different
    /// counterpart is rejected.
    pub async fn signup(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        username: &str,
        email: &str,
    ) -> AppResult<User> {
        validation::validate_username(username)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;

        let user = match UserRepository::find_by_username(pool, username).await? {
            Some(user) => {
                if user.email != email {
                    return Err(AppError::Validation(
                        "Username is already registered with a different email".to_string(),
                    ));
                }
                user
            }
            None => {
                if UserRepository::find_by_email(pool, email).await?.is_some() {
                    return Err(AppError::Validation(
                        "Email is already registered with a different username".to_string(),
                    ));
                }
                UserRepository::create(pool, username, email, "", "", "", roles::USER).await?
            }
        };

        let code = crypto::generate_confirmation_code();
        let key = Self::confirmation_key(&user.username);
        let expiry = config.signup.code_expiry_hours * 3600;
        redis
            .set_ex::<_, _, ()>(&key, crypto::hash_string(&code), expiry as u64)
            .await?;

        mailer::send_confirmation_code(&config.signup.from_email, &user.email, &user.username, &code);

        Ok(user)
    }

    /// Exchange a confirmation code for an access/refresh token pair.
    ///
    /// The code is single use: it is consumed on success.
    pub async fn issue_tokens(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        username: &str,
        confirmation_code: &str,
    ) -> AppResult<(User, String, String, i64)> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let key = Self::confirmation_key(&user.username);
        let stored_hash: Option<String> = redis.get(&key).await?;

        let valid = stored_hash
            .map(|hash| crypto::verify_hash(confirmation_code, &hash))
            .unwrap_or(false);
        if !valid {
            return Err(AppError::InvalidConfirmationCode);
        }

        redis.del::<_, ()>(&key).await?;

        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        let refresh_token = Self::generate_refresh_token();

        let refresh_key = format!("refresh_token:{}:{}", user.id, refresh_token);
        let expiry = config.jwt.refresh_token_expiry_days * 24 * 60 * 60;
        redis.set_ex::<_, _, ()>(&refresh_key, "1", expiry as u64).await?;

        Ok((user, access_token, refresh_token, expires_in))
    }

    /// Rotate a refresh token and issue a new access token
    pub async fn refresh_token(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        refresh_token: &str,
    ) -> AppResult<(String, String, i64)> {
        // Find the refresh token in Redis (check all users)
        let pattern = format!("refresh_token:*:{}", refresh_token);
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(&pattern)
            .query_async(&mut redis)
            .await?;

        if keys.is_empty() {
            return Err(AppError::InvalidToken);
        }

        // Extract user_id from key
        let key = &keys[0];
        let parts: Vec<&str> = key.split(':').collect();
        if parts.len() != 3 {
            return Err(AppError::InvalidToken);
        }

        let user_id = Uuid::parse_str(parts[1]).map_err(|_| AppError::InvalidToken)?;

        let user = UserRepository::find_by_id(pool, &user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        // Delete old refresh token
        redis.del::<_, ()>(key).await?;

        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        let new_refresh_token = Self::generate_refresh_token();

        let new_key = format!("refresh_token:{}:{}", user.id, new_refresh_token);
        let expiry = config.jwt.refresh_token_expiry_days * 24 * 60 * 60;
        redis.set_ex::<_, _, ()>(&new_key, "1", expiry as u64).await?;

        Ok((access_token, new_refresh_token, expires_in))
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Generate access token
    fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            is_superuser: user.is_superuser,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }

    /// Generate refresh token
    fn generate_refresh_token() -> String {
        Uuid::new_v4().to_string()
    }

    fn confirmation_key(username: &str) -> String {
        format!("confirmation_code:{}", username)
    }
}
