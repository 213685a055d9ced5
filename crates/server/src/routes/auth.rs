//! Auth route handlers.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::models::{ProfilePatch, PublicUser};
use crate::services::AuthService;
use crate::state::AppState;

/// Registration payload.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for register and login: a fresh session plus the user.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Register a new user.
///
/// POST /api/auth/register
///
/// # Errors
///
/// 400 for an invalid payload or an already-registered email.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(req) = payload?;

    let auth = AuthService::new(state.store());
    let (token, user) = auth.register(&req.name, &req.email, &req.password)?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(Json(AuthResponse {
        token,
        user: PublicUser::from(&user),
    }))
}

/// Login with email and password.
///
/// POST /api/auth/login
///
/// # Errors
///
/// 400 for an invalid payload; 401 for wrong credentials (whether the email
/// or the password was wrong is deliberately not revealed).
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(req) = payload?;

    let auth = AuthService::new(state.store());
    let (token, user) = auth.login(&req.email, &req.password)?;

    Ok(Json(AuthResponse {
        token,
        user: PublicUser::from(&user),
    }))
}

/// The currently authenticated user.
///
/// GET /api/auth/me
///
/// # Errors
///
/// 401 without a valid session token.
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
) -> Result<Json<PublicUser>, AppError> {
    let user = AuthService::new(state.store()).current_user(user_id)?;
    Ok(Json(PublicUser::from(&user)))
}

/// Apply a partial profile update.
///
/// PUT /api/users/me
///
/// Malformed fields are silently ignored, keeping prior values.
///
/// # Errors
///
/// 401 without a valid session token.
pub async fn update_profile(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    payload: Result<Json<ProfilePatch>, JsonRejection>,
) -> Result<Json<PublicUser>, AppError> {
    let Json(patch) = payload?;

    let user = AuthService::new(state.store()).update_profile(user_id, &patch)?;
    Ok(Json(PublicUser::from(&user)))
}
