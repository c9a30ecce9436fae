//! Request authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::sessions;
use crate::error::AppError;
use crate::models::User;
use crate::AppState;

/// Name of the session cookie.
pub const AUTH_COOKIE: &str = "auth_token";

/// The signed-in user, resolved from the session cookie.
///
/// Every request revalidates the token against the sessions table, so a
/// revoked or expired session is rejected immediately on all instances.
pub struct CurrentUser(pub User);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(AUTH_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(AppError::Unauthorized)?;

        let user = sessions::session_user(&state.db, &token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(CurrentUser(user))
    }
}
