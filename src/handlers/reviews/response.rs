//! Review response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::ReviewWithAuthor;

/// Review representation in API payloads; the author appears by username
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub text: String,
    pub author: String,
    pub score: i32,
    pub pub_date: DateTime<Utc>,
}

impl From<ReviewWithAuthor> for ReviewResponse {
    fn from(review: ReviewWithAuthor) -> Self {
        Self {
            id: review.id,
            text: review.text,
            author: review.author_username,
            score: review.score,
            pub_date: review.pub_date,
        }
    }
}

/// Review list response
#[derive(Debug, Serialize)]
pub struct ReviewsListResponse {
    pub reviews: Vec<ReviewResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
