//! Checkout and purchase-history route handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::models::PurchaseRecord;
use crate::services::TradeService;
use crate::state::AppState;

/// Checkout response: exactly the newly created records.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub purchases: Vec<PurchaseRecord>,
}

/// Convert the caller's cart into purchase records.
///
/// POST /api/checkout
///
/// Resolvable entries are snapshotted into the ledger; dangling entries are
/// silently dropped; the cart is cleared atomically.
///
/// # Errors
///
/// 401 without a valid session token.
pub async fn checkout(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
) -> Result<Json<CheckoutResponse>, AppError> {
    let purchases = TradeService::new(state.store()).checkout(user_id);
    tracing::info!(user_id = %user_id, count = purchases.len(), "checkout completed");
    Ok(Json(CheckoutResponse { purchases }))
}

/// The caller's full purchase history, in append order.
///
/// GET /api/purchases
///
/// # Errors
///
/// 401 without a valid session token.
pub async fn history(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
) -> Result<Json<Vec<PurchaseRecord>>, AppError> {
    Ok(Json(TradeService::new(state.store()).history(user_id)))
}
