//! Cart repository.

use chrono::Utc;

use curio_core::{ListingId, UserId};

use super::Store;
use crate::models::{Cart, CartEntry};

/// Repository for per-user carts.
pub struct CartRepository<'a> {
    store: &'a Store,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Get a user's cart, creating an empty one on first access.
    #[must_use]
    pub fn get_or_create(&self, user_id: UserId) -> Cart {
        self.store
            .write()
            .carts
            .entry(user_id)
            .or_default()
            .clone()
    }

    /// Add a listing to the cart.
    ///
    /// Idempotent: if the listing is already present the cart is returned
    /// unchanged.
    #[must_use]
    pub fn add(&self, user_id: UserId, listing_id: ListingId) -> Cart {
        let mut tables = self.store.write();
        let cart = tables.carts.entry(user_id).or_default();

        if !cart.contains(listing_id) {
            cart.items.push(CartEntry {
                listing_id,
                added_at: Utc::now(),
            });
        }

        cart.clone()
    }

    /// Remove a listing from the cart; a no-op if it is absent.
    #[must_use]
    pub fn remove(&self, user_id: UserId, listing_id: ListingId) -> Cart {
        let mut tables = self.store.write();
        let cart = tables.carts.entry(user_id).or_default();
        cart.items.retain(|entry| entry.listing_id != listing_id);
        cart.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_creation() {
        let store = Store::new();
        let repo = CartRepository::new(&store);
        let cart = repo.get_or_create(UserId::generate());
        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let store = Store::new();
        let repo = CartRepository::new(&store);
        let user = UserId::generate();
        let listing = ListingId::generate();

        let first = repo.add(user, listing);
        let second = repo.add(user, listing);
        assert_eq!(first.items.len(), 1);
        assert_eq!(second.items.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = Store::new();
        let repo = CartRepository::new(&store);
        let user = UserId::generate();

        let cart = repo.remove(user, ListingId::generate());
        assert!(cart.items.is_empty());

        let listing = ListingId::generate();
        let _ = repo.add(user, listing);
        let cart = repo.remove(user, listing);
        assert!(cart.items.is_empty());
    }
}
