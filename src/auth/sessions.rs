//! Session issuance and validation against the sessions table.
//!
//! Tokens are opaque 256-bit random values. Validation always consults the
//! database so that revocation and expiry are visible to every instance
//! immediately; nothing about a session is cached in-process.

use chrono::{Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Session, User};

const TOKEN_LEN: usize = 32;

/// Sessions live for seven days from issuance; no sliding renewal.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Generate an unguessable session token (32 random bytes, hex encoded).
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_LEN];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Create a session for a user and return the bearer token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String> {
    let now = Utc::now();
    let session = Session {
        token: generate_token(),
        user_id,
        expires_at: now + Duration::days(SESSION_TTL_DAYS),
        created_at: now,
    };

    sqlx::query(
        "INSERT INTO sessions (token, user_id, expires_at, created_at) VALUES ($1, $2, $3, $4)",
    )
    .bind(&session.token)
    .bind(session.user_id)
    .bind(session.expires_at)
    .bind(session.created_at)
    .execute(pool)
    .await?;

    info!(%user_id, "session created");
    Ok(session.token)
}

/// Resolve a token to its owning user.
///
/// Unknown, expired, and orphaned tokens all resolve to `None`. Expiry is
/// filtered in the query itself; expired rows are not relied on being
/// deleted. Lookups never extend the expiry.
pub async fn session_user(pool: &PgPool, token: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT
            u.id, u.email, u.password_hash, u.full_name, u.role,
            u.is_approved, u.is_primary_admin, u.created_at
        FROM users u
        JOIN sessions s ON s.user_id = u.id
        WHERE s.token = $1
          AND s.expires_at > now()
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Delete a session. Deleting an unknown or already-deleted token is a
/// no-op.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<()> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_64_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LEN * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }
}
