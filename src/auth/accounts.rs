//! Account registration, sign-in, and the approval workflow.
//!
//! New accounts start pending until an owner approves them. The very first
//! registrant bootstraps the system: they become the primary admin, owner
//! role, approved immediately.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::sessions;
use crate::error::{AppError, Result};
use crate::models::{PublicUser, Role, User};

const USER_COLUMNS: &str =
    "id, email, password_hash, full_name, role, is_approved, is_primary_admin, created_at";

fn map_unique_email(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.constraint() == Some("users_email_key") => {
            AppError::DuplicateEmail
        }
        _ => AppError::Database(err),
    }
}

/// Register a new account.
///
/// The first-user check runs inside the INSERT so two concurrent
/// registrations cannot both observe an empty table; the partial unique
/// index on `is_primary_admin` backstops the race at the store level.
pub async fn register(
    pool: &PgPool,
    email: &str,
    password: &str,
    full_name: &str,
    requested_role: Role,
) -> Result<PublicUser> {
    let email = email.trim().to_lowercase();

    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = hash_password(password);

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (email, password_hash, full_name, role, is_approved, is_primary_admin)
        SELECT
            $1, $2, $3,
            CASE WHEN NOT EXISTS (SELECT 1 FROM users) THEN 'owner'::user_role ELSE $4 END,
            NOT EXISTS (SELECT 1 FROM users),
            NOT EXISTS (SELECT 1 FROM users)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&email)
    .bind(&password_hash)
    .bind(full_name)
    .bind(requested_role)
    .fetch_one(pool)
    .await
    .map_err(map_unique_email)?;

    info!(user_id = %user.id, role = ?user.role, approved = user.is_approved, "registered account");
    Ok(user.into())
}

/// Sign in with email and password, returning the redacted user and a
/// fresh session token.
pub async fn sign_in(pool: &PgPool, email: &str, password: &str) -> Result<(PublicUser, String)> {
    let email = email.trim().to_lowercase();

    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(&email)
    .fetch_optional(pool)
    .await?;

    // Unknown email and wrong password take the same exit.
    let Some(user) = user else {
        return Err(AppError::InvalidCredentials);
    };
    if !verify_password(password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    if !user.is_approved {
        return Err(AppError::PendingApproval);
    }

    let token = sessions::create_session(pool, user.id).await?;
    info!(user_id = %user.id, "signed in");
    Ok((user.into(), token))
}

/// Approve a pending account.
pub async fn approve_user(pool: &PgPool, user_id: Uuid) -> Result<()> {
    let result = sqlx::query("UPDATE users SET is_approved = TRUE WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    info!(%user_id, "account approved");
    Ok(())
}

/// Reject (delete) a pending account. The primary admin can never be
/// rejected; the guard lives in the WHERE clause so the call degrades to a
/// no-op instead of failing.
pub async fn reject_user(pool: &PgPool, user_id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = $1 AND is_primary_admin = FALSE")
        .bind(user_id)
        .execute(pool)
        .await?;

    info!(%user_id, "account rejected");
    Ok(())
}

/// Create an additional admin account directly in the approved state.
///
/// This bypasses the pending state: it is an explicit trust grant by the
/// primary admin, not a self-registration. The new admin is never the
/// primary admin.
pub async fn create_admin(
    pool: &PgPool,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<PublicUser> {
    let email = email.trim().to_lowercase();

    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = hash_password(password);

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (email, password_hash, full_name, role, is_approved, is_primary_admin)
        VALUES ($1, $2, $3, 'owner'::user_role, TRUE, FALSE)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&email)
    .bind(&password_hash)
    .bind(full_name)
    .fetch_one(pool)
    .await
    .map_err(map_unique_email)?;

    info!(user_id = %user.id, "admin account created");
    Ok(user.into())
}

/// All accounts awaiting approval, newest first.
pub async fn pending_users(pool: &PgPool) -> Result<Vec<PublicUser>> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE is_approved = FALSE ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(users.into_iter().map(PublicUser::from).collect())
}

/// Every account, newest first.
pub async fn all_users(pool: &PgPool) -> Result<Vec<PublicUser>> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(users.into_iter().map(PublicUser::from).collect())
}
