//! Cart types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use curio_core::ListingId;

use super::Listing;

/// A reference to a listing awaiting purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub listing_id: ListingId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub added_at: DateTime<Utc>,
}

/// A user's pending, unpurchased selection of listings.
///
/// Created lazily on first access; a listing appears at most once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    pub items: Vec<CartEntry>,
}

impl Cart {
    /// Whether the cart already holds an entry for the listing.
    #[must_use]
    pub fn contains(&self, listing_id: ListingId) -> bool {
        self.items.iter().any(|entry| entry.listing_id == listing_id)
    }
}

/// A cart entry resolved against the catalog for display.
///
/// Entries whose listing has since been deleted never appear in the
/// resolved view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCartItem {
    pub listing: Listing,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub added_at: DateTime<Utc>,
}
