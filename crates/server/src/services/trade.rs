//! Cart and checkout service.
//!
//! The cart is a per-user ephemeral selection of listing references; checkout
//! converts it into immutable purchase records in one atomic step.

use thiserror::Error;

use curio_core::{ListingId, UserId};

use crate::models::{Cart, PurchaseRecord, ResolvedCartItem};
use crate::store::{CartRepository, ListingRepository, PurchaseRepository, Store};

/// Errors that can occur during cart and checkout operations.
#[derive(Debug, Error)]
pub enum TradeError {
    /// The listing to add does not exist.
    #[error("listing not found")]
    ListingNotFound,
}

/// Cart and checkout service.
pub struct TradeService<'a> {
    listings: ListingRepository<'a>,
    carts: CartRepository<'a>,
    purchases: PurchaseRepository<'a>,
}

impl<'a> TradeService<'a> {
    /// Create a new trade service.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            listings: ListingRepository::new(store),
            carts: CartRepository::new(store),
            purchases: PurchaseRepository::new(store),
        }
    }

    /// A user's cart, created lazily on first access.
    #[must_use]
    pub fn cart(&self, user_id: UserId) -> Cart {
        self.carts.get_or_create(user_id)
    }

    /// Add a listing to the cart (idempotent).
    ///
    /// # Errors
    ///
    /// Returns `TradeError::ListingNotFound` if the listing does not exist
    /// at the time of addition.
    pub fn add_to_cart(&self, user_id: UserId, listing_id: ListingId) -> Result<Cart, TradeError> {
        if self.listings.get(listing_id).is_none() {
            return Err(TradeError::ListingNotFound);
        }
        Ok(self.carts.add(user_id, listing_id))
    }

    /// Remove a listing from the cart; a no-op if absent.
    #[must_use]
    pub fn remove_from_cart(&self, user_id: UserId, listing_id: ListingId) -> Cart {
        self.carts.remove(user_id, listing_id)
    }

    /// The cart resolved against the catalog for display.
    ///
    /// Entries whose listing has since been deleted are dropped without
    /// error.
    #[must_use]
    pub fn resolved_cart(&self, user_id: UserId) -> Vec<ResolvedCartItem> {
        self.carts
            .get_or_create(user_id)
            .items
            .into_iter()
            .filter_map(|entry| {
                self.listings.get(entry.listing_id).map(|listing| {
                    ResolvedCartItem {
                        listing,
                        added_at: entry.added_at,
                    }
                })
            })
            .collect()
    }

    /// Convert the cart into purchase records, atomically clearing it.
    ///
    /// Returns exactly the newly created records; dangling entries are
    /// silently dropped.
    #[must_use]
    pub fn checkout(&self, user_id: UserId) -> Vec<PurchaseRecord> {
        self.purchases.checkout(user_id)
    }

    /// The user's full purchase history, in append order.
    #[must_use]
    pub fn history(&self, user_id: UserId) -> Vec<PurchaseRecord> {
        self.purchases.history(user_id)
    }
}
