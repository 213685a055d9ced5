//! Listing route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    extract::rejection::JsonRejection,
};
use serde::{Deserialize, Serialize};

use curio_core::{Category, ListingId};

use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::models::{Listing, ListingDraft, ListingPatch};
use crate::services::CatalogService;
use crate::state::AppState;

/// Browse query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListingsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Browse response: matching listings plus the full category enumeration
/// for UI population, regardless of filtering.
#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub listings: Vec<Listing>,
    pub categories: [Category; 8],
}

/// Parse a path segment as a listing ID.
///
/// An ID that is not even well-formed cannot name a listing, so it maps to
/// the same not-found error as a missing one.
fn parse_listing_id(raw: &str) -> Result<ListingId, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound("listing".to_string()))
}

/// Browse the catalog, newest first.
///
/// GET /api/listings?search=&category=
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingsQuery>,
) -> Json<BrowseResponse> {
    let catalog = CatalogService::new(state.store());
    let listings = catalog.browse(query.search.as_deref(), query.category.as_deref());

    Json(BrowseResponse {
        listings,
        categories: Category::ALL,
    })
}

/// Get one listing.
///
/// GET /api/listings/{id}
///
/// # Errors
///
/// 404 if no listing has that ID.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Listing>, AppError> {
    let id = parse_listing_id(&id)?;
    let listing = CatalogService::new(state.store()).get(id)?;
    Ok(Json(listing))
}

/// The caller's own listings.
///
/// GET /api/me/listings
///
/// # Errors
///
/// 401 without a valid session token.
pub async fn mine(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
) -> Result<Json<Vec<Listing>>, AppError> {
    let listings = CatalogService::new(state.store()).owned_by(user_id);
    Ok(Json(listings))
}

/// Create a listing owned by the caller.
///
/// POST /api/listings
///
/// # Errors
///
/// 400 for an invalid draft; 401 without a valid session token.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    payload: Result<Json<ListingDraft>, JsonRejection>,
) -> Result<Json<Listing>, AppError> {
    let Json(draft) = payload?;

    let listing = CatalogService::new(state.store()).create(user_id, draft)?;
    tracing::info!(listing_id = %listing.id, seller_id = %user_id, "listing created");
    Ok(Json(listing))
}

/// Apply a partial update to a listing.
///
/// PUT /api/listings/{id}
///
/// # Errors
///
/// 404 if absent; 403 unless the caller is the owning seller; 400 for an
/// invalid supplied field.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    Path(id): Path<String>,
    payload: Result<Json<ListingPatch>, JsonRejection>,
) -> Result<Json<Listing>, AppError> {
    let Json(patch) = payload?;
    let id = parse_listing_id(&id)?;

    let listing = CatalogService::new(state.store()).update(user_id, id, patch)?;
    Ok(Json(listing))
}

/// Delete a listing, returning the removed record.
///
/// DELETE /api/listings/{id}
///
/// # Errors
///
/// 404 if absent; 403 unless the caller is the owning seller or the
/// administrator.
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<Listing>, AppError> {
    let id = parse_listing_id(&id)?;

    let removed = CatalogService::new(state.store()).delete(user_id, id)?;
    tracing::info!(listing_id = %removed.id, "listing deleted");
    Ok(Json(removed))
}
