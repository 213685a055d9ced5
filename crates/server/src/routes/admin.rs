//! Admin route handlers.

use axum::{Json, extract::State};

use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::services::{AdminService, AdminSnapshot};
use crate::state::AppState;

/// Aggregate snapshot over users, listings, and purchase ledgers.
///
/// GET /api/admin/data
///
/// # Errors
///
/// 401 without a valid session token; 403 unless the caller is the
/// administrator.
pub async fn data(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<AdminSnapshot>, AppError> {
    Ok(Json(AdminService::new(state.store()).snapshot()))
}
