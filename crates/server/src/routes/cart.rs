//! Cart route handlers.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Deserialize;

use curio_core::ListingId;

use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::models::{Cart, ResolvedCartItem};
use crate::services::TradeService;
use crate::state::AppState;

/// Payload naming the listing to add or remove.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMutationRequest {
    pub listing_id: ListingId,
}

/// The caller's cart, created lazily on first access.
///
/// GET /api/cart
///
/// # Errors
///
/// 401 without a valid session token.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
) -> Result<Json<Cart>, AppError> {
    Ok(Json(TradeService::new(state.store()).cart(user_id)))
}

/// Add a listing to the cart. Idempotent.
///
/// POST /api/cart/add
///
/// # Errors
///
/// 404 if the listing does not exist; 401 without a valid session token.
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    payload: Result<Json<CartMutationRequest>, JsonRejection>,
) -> Result<Json<Cart>, AppError> {
    let Json(req) = payload?;

    let cart = TradeService::new(state.store()).add_to_cart(user_id, req.listing_id)?;
    Ok(Json(cart))
}

/// Remove a listing from the cart. A no-op if absent.
///
/// POST /api/cart/remove
///
/// # Errors
///
/// 401 without a valid session token.
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    payload: Result<Json<CartMutationRequest>, JsonRejection>,
) -> Result<Json<Cart>, AppError> {
    let Json(req) = payload?;

    let cart = TradeService::new(state.store()).remove_from_cart(user_id, req.listing_id);
    Ok(Json(cart))
}

/// The cart resolved against the catalog for display.
///
/// GET /api/cart/resolved
///
/// Entries whose listing has since been deleted are dropped without error.
///
/// # Errors
///
/// 401 without a valid session token.
pub async fn resolved(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
) -> Result<Json<Vec<ResolvedCartItem>>, AppError> {
    Ok(Json(TradeService::new(state.store()).resolved_cart(user_id)))
}
