//! CSV record shapes
//!
//! Column names follow the source dumps; integer ids are the source
//! database's keys, not ours.

use serde::Deserialize;

/// Row of `users.csv`
#[derive(Debug, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub bio: Option<String>,
}

/// Row of `category.csv`
#[derive(Debug, Deserialize)]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Row of `genre.csv`
#[derive(Debug, Deserialize)]
pub struct GenreRecord {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Row of `titles.csv`
#[derive(Debug, Deserialize)]
pub struct TitleRecord {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub category: i64,
}

/// Row of `genre_title.csv`
#[derive(Debug, Deserialize)]
pub struct GenreTitleRecord {
    pub id: i64,
    pub title_id: i64,
    pub genre_id: i64,
}

/// Row of `review.csv`
#[derive(Debug, Deserialize)]
pub struct ReviewRecord {
    pub id: i64,
    pub title_id: i64,
    pub text: String,
    pub author: i64,
    pub score: i32,
    pub pub_date: String,
}

/// Row of `comments.csv`
#[derive(Debug, Deserialize)]
pub struct CommentRecord {
    pub id: i64,
    pub review_id: i64,
    pub text: String,
    pub author: i64,
    pub pub_date: String,
}
