//! Authentication extractors.
//!
//! Every protected operation is gated by a single cross-cutting check:
//! extract the bearer token from the `Authorization` header, resolve it
//! through the session registry, reject with 401 if unresolvable.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use curio_core::UserId;

use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;
use crate::store::{SessionRepository, UserRepository};

/// Extractor that requires an authenticated caller.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user_id): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {user_id}!")
/// }
/// ```
pub struct RequireAuth(pub UserId);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::Unauthorized)?;

        let user_id = SessionRepository::new(state.store())
            .resolve(token)
            .ok_or(AppError::Unauthorized)?;

        Ok(Self(user_id))
    }
}

/// Extractor that requires the caller to be the administrator.
///
/// Resolves the session like [`RequireAuth`], then loads the user and
/// rejects with 403 unless its role is admin.
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireAuth(user_id) = RequireAuth::from_request_parts(parts, state).await?;

        let user = UserRepository::new(state.store())
            .get_by_id(user_id)
            .ok_or(AppError::Unauthorized)?;

        if !user.role.is_admin() {
            return Err(AppError::Forbidden);
        }

        Ok(Self(user))
    }
}

/// Extract the bearer token from the `Authorization` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}
