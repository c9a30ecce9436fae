//! Session model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Session row: an opaque bearer token tied to a user and an expiry.
///
/// Expiry is enforced at lookup time; expired rows may linger in the table
/// and must never be treated as valid.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session_expiring_at(expires_at: DateTime<Utc>) -> Session {
        Session {
            token: "deadbeef".to_string(),
            user_id: Uuid::new_v4(),
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let session = session_expiring_at(Utc::now() - Duration::hours(1));
        assert!(session.is_expired());
    }

    #[test]
    fn test_future_expiry_is_not_expired() {
        let session = session_expiring_at(Utc::now() + Duration::days(7));
        assert!(!session.is_expired());
    }
}
