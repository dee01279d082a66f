//! Title model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Title database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Title {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
}

/// Title row annotated with its computed rating
///
/// The rating is never stored; it is the average of the title's review
/// scores, 0 when no reviews exist.
#[derive(Debug, Clone, FromRow)]
pub struct RatedTitle {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub rating: f64,
}
