//! Medialog - Catalog and Review Platform
//!
//! This library provides the core functionality for the Medialog backend,
//! a catalog of titled works that users rate and discuss.
//!
//! # Features
//!
//! - Works catalog organized by category and genre
//! - Reviews with 1-10 scores and derived title ratings
//! - Nested comment threads under reviews
//! - Role-based moderation (user, moderator, admin)
//! - Two-step signup with confirmation codes and JWT tokens
//! - Bulk CSV import for one-time data loading
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod import;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
