//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::roles;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub role: String,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN || self.is_superuser
    }

    /// Check if the user is a moderator
    pub fn is_moderator(&self) -> bool {
        self.role == roles::MODERATOR
    }

    /// Check if the user can edit or delete other users' reviews and comments
    pub fn can_moderate(&self) -> bool {
        self.is_admin() || self.is_moderator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(role: &str, is_superuser: bool) -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            bio: String::new(),
            role: role.to_string(),
            is_superuser,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_predicates() {
        assert!(user_with("admin", false).is_admin());
        assert!(user_with("user", true).is_admin()); // Superuser counts as admin
        assert!(!user_with("user", false).is_admin());
        assert!(user_with("moderator", false).can_moderate());
        assert!(user_with("admin", false).can_moderate());
        assert!(!user_with("user", false).can_moderate());
    }
}
