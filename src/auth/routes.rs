//! Authentication and account-management route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::accounts;
use crate::auth::extract::{CurrentUser, AUTH_COOKIE};
use crate::auth::sessions;
use crate::error::{AppError, Result};
use crate::models::{PublicUser, Role};
use crate::AppState;

/// Sign-up form payload
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Sign-up outcome. `pending_approval` tells the client to show the
/// waiting screen instead of entering the app.
#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub user: PublicUser,
    pub pending_approval: bool,
}

/// Sign-in form payload
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub user: PublicUser,
}

/// Payload for creating an additional admin
#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Router for /api/auth
pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
        .route("/me", get(me))
}

/// Router for /api/users (owner only)
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/pending", get(list_pending_users))
        .route("/:id/approve", post(approve))
        .route("/:id/reject", post(reject))
}

/// Router for /api/admins (primary admin only)
pub fn admins_router() -> Router<AppState> {
    Router::new().route("/", post(create_admin))
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(sessions::SESSION_TTL_DAYS))
        .path("/")
        .build()
}

fn require_field(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

/// Register a new account. The first registrant is signed in immediately;
/// everyone else lands in the pending queue.
async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<SignUpRequest>,
) -> Result<(CookieJar, Json<SignUpResponse>)> {
    require_field(&payload.email, "Email is required")?;
    require_field(&payload.password, "Password is required")?;
    require_field(&payload.full_name, "Full name is required")?;

    let requested_role = payload.role.unwrap_or(Role::Salesperson);
    let user = accounts::register(
        &state.db,
        &payload.email,
        &payload.password,
        &payload.full_name,
        requested_role,
    )
    .await?;

    // Auto-approved means this was the bootstrap registration; sign the
    // primary admin straight in.
    let jar = if user.is_approved {
        let token = sessions::create_session(&state.db, user.id).await?;
        jar.add(session_cookie(token))
    } else {
        jar
    };

    let pending_approval = !user.is_approved;
    Ok((jar, Json(SignUpResponse { user, pending_approval })))
}

async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<SignInRequest>,
) -> Result<(CookieJar, Json<SignInResponse>)> {
    let (user, token) = accounts::sign_in(&state.db, &payload.email, &payload.password).await?;
    let jar = jar.add(session_cookie(token));
    Ok((jar, Json(SignInResponse { user })))
}

/// Revoke the current session. Signing out without a session is a no-op.
async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> Result<(CookieJar, StatusCode)> {
    if let Some(cookie) = jar.get(AUTH_COOKIE) {
        sessions::delete_session(&state.db, cookie.value()).await?;
    }
    let jar = jar.remove(Cookie::build(AUTH_COOKIE).path("/").build());
    Ok((jar, StatusCode::NO_CONTENT))
}

async fn me(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(user.into())
}

async fn list_users(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<PublicUser>>> {
    user.require_owner()?;
    Ok(Json(accounts::all_users(&state.db).await?))
}

async fn list_pending_users(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<PublicUser>>> {
    user.require_owner()?;
    Ok(Json(accounts::pending_users(&state.db).await?))
}

async fn approve(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    user.require_owner()?;
    accounts::approve_user(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn reject(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    user.require_owner()?;
    accounts::reject_user(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_admin(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<PublicUser>)> {
    user.require_primary_admin()?;

    require_field(&payload.email, "Email is required")?;
    require_field(&payload.password, "Password is required")?;
    require_field(&payload.full_name, "Full name is required")?;

    let admin = accounts::create_admin(
        &state.db,
        &payload.email,
        &payload.password,
        &payload.full_name,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(admin)))
}
