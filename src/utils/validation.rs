//! Input validation utilities

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;

use crate::constants::{
    self, MAX_EMAIL_LENGTH, MAX_SCORE, MAX_SLUG_LENGTH, MAX_USERNAME_LENGTH, MIN_SCORE,
    RESERVED_USERNAME,
};

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").expect("invalid username regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("invalid email regex"));

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("invalid slug regex"));

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.is_empty() {
        return Err("Username cannot be empty");
    }
    if username.len() > MAX_USERNAME_LENGTH as usize {
        return Err("Username must be at most 150 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username can only contain letters, digits and @/./+/-/_ characters");
    }
    if username == RESERVED_USERNAME {
        return Err("Username \"me\" is reserved");
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.len() > MAX_EMAIL_LENGTH as usize {
        return Err("Email must be at most 254 characters");
    }
    if !EMAIL_RE.is_match(email) {
        return Err("Invalid email format");
    }
    Ok(())
}

/// Validate a category/genre slug
pub fn validate_slug(slug: &str) -> Result<(), &'static str> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH as usize {
        return Err("Slug must be between 1 and 50 characters");
    }
    if !SLUG_RE.is_match(slug) {
        return Err("Slug can only contain letters, digits, hyphens and underscores");
    }
    Ok(())
}

/// Validate a review score
pub fn validate_score(score: i32) -> Result<(), &'static str> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err("Score must be between 1 and 10");
    }
    Ok(())
}

/// Validate a title's release year
pub fn validate_year(year: i32) -> Result<(), &'static str> {
    if year > current_year() {
        return Err("Year cannot be in the future");
    }
    Ok(())
}

/// Validate a user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Current calendar year (UTC)
pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("user@host").is_ok());
        assert!(validate_username("a.b+c-d").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("me").is_err()); // Reserved
        assert!(validate_username("has space").is_err());
        assert!(validate_username("semi;colon").is_err());
        assert!(validate_username(&"x".repeat(151)).is_err()); // Too long
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@nodot").is_err());
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(validate_email(&long).is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("sci-fi").is_ok());
        assert!(validate_slug("books_2020").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("no spaces").is_err());
        assert!(validate_slug(&"s".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_score() {
        assert!(validate_score(1).is_ok());
        assert!(validate_score(10).is_ok());
        assert!(validate_score(0).is_err());
        assert!(validate_score(11).is_err());
        assert!(validate_score(-5).is_err());
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year(1999).is_ok());
        assert!(validate_year(current_year()).is_ok());
        assert!(validate_year(current_year() + 1).is_err());
    }

    #[test]
    fn test_validate_role() {
        assert!(validate_role("user").is_ok());
        assert!(validate_role("moderator").is_ok());
        assert!(validate_role("admin").is_ok());
        assert!(validate_role("superhero").is_err());
    }
}
