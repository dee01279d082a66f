//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Default confirmation code expiry in hours
pub const DEFAULT_CONFIRMATION_CODE_EXPIRY_HOURS: i64 = 24;

/// Length of generated confirmation codes
pub const CONFIRMATION_CODE_LENGTH: usize = 20;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 150;

/// Email maximum length
pub const MAX_EMAIL_LENGTH: u64 = 254;

/// Username reserved for the self-service endpoint
pub const RESERVED_USERNAME: &str = "me";

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const USER: &str = "user";
    pub const MODERATOR: &str = "moderator";
    pub const ADMIN: &str = "admin";

    /// All user roles
    pub const ALL: &[&str] = &[USER, MODERATOR, ADMIN];
}

// =============================================================================
// REVIEW SCORES
// =============================================================================

/// Minimum review score
pub const MIN_SCORE: i32 = 1;

/// Maximum review score
pub const MAX_SCORE: i32 = 10;

// =============================================================================
// CATALOG VALIDATION
// =============================================================================

/// Maximum title/category/genre name length
pub const MAX_NAME_LENGTH: u64 = 256;

/// Maximum slug length
pub const MAX_SLUG_LENGTH: u64 = 50;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;
