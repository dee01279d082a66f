//! Review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review database model
///
/// At most one review exists per (title, author) pair; the schema enforces
/// this with a unique constraint.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub title_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub score: i32,
    pub pub_date: DateTime<Utc>,
}

/// Review row joined with its author's username
#[derive(Debug, Clone, FromRow)]
pub struct ReviewWithAuthor {
    pub id: Uuid,
    pub title_id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub text: String,
    pub score: i32,
    pub pub_date: DateTime<Utc>,
}
