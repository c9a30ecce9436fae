//! User account models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Account role. All authorization decisions branch on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Salesperson,
}

/// User row from the database, including the credential encoding.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub is_approved: bool,
    pub is_primary_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Single gate for owner-only operations.
    pub fn require_owner(&self) -> Result<()> {
        match self.role {
            Role::Owner => Ok(()),
            Role::Salesperson => Err(AppError::Forbidden),
        }
    }

    /// Gate for operations reserved to the primary admin.
    pub fn require_primary_admin(&self) -> Result<()> {
        if self.is_primary_admin {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

/// User as exposed to clients, with the credential encoding stripped.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub is_approved: bool,
    pub is_primary_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            is_approved: user.is_approved,
            is_primary_admin: user.is_primary_admin,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(role: Role, is_primary_admin: bool) -> User {
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: "salt:hash".to_string(),
            full_name: "Test User".to_string(),
            role,
            is_approved: true,
            is_primary_admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_require_owner() {
        assert!(user_with(Role::Owner, false).require_owner().is_ok());
        assert!(matches!(
            user_with(Role::Salesperson, false).require_owner(),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_require_primary_admin() {
        assert!(user_with(Role::Owner, true).require_primary_admin().is_ok());
        // A plain owner is not the primary admin.
        assert!(matches!(
            user_with(Role::Owner, false).require_primary_admin(),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_public_user_strips_password_hash() {
        let user = user_with(Role::Salesperson, false);
        let public = PublicUser::from(user.clone());
        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "test@example.com");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
        assert_eq!(
            serde_json::to_string(&Role::Salesperson).unwrap(),
            "\"salesperson\""
        );
    }
}
