//! Listing repository.

use curio_core::{Category, ListingId, UserId};

use super::{RepositoryError, Store};
use crate::models::Listing;

/// Repository for catalog listings.
pub struct ListingRepository<'a> {
    store: &'a Store,
}

impl<'a> ListingRepository<'a> {
    /// Create a new listing repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Insert a freshly created listing.
    pub fn insert(&self, listing: Listing) {
        self.store.write().listings.push(listing);
    }

    /// Get a listing by ID.
    #[must_use]
    pub fn get(&self, id: ListingId) -> Option<Listing> {
        self.store
            .read()
            .listings
            .iter()
            .find(|l| l.id == id)
            .cloned()
    }

    /// Browse the catalog: newest first, optionally filtered.
    ///
    /// `search` is a case-insensitive substring match against the title
    /// only; `category` is an exact match. The filters compose with AND.
    /// The sort is stable, so listings created at the same instant keep
    /// insertion order.
    #[must_use]
    pub fn browse(&self, search: Option<&str>, category: Option<Category>) -> Vec<Listing> {
        let tables = self.store.read();

        let mut listings: Vec<Listing> = tables
            .listings
            .iter()
            .filter(|l| {
                search.is_none_or(|needle| {
                    l.title.to_lowercase().contains(&needle.to_lowercase())
                })
            })
            .filter(|l| category.is_none_or(|c| l.category == c))
            .cloned()
            .collect();

        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        listings
    }

    /// All listings owned by a seller, in insertion order.
    #[must_use]
    pub fn by_seller(&self, seller_id: UserId) -> Vec<Listing> {
        self.store
            .read()
            .listings
            .iter()
            .filter(|l| l.seller_id == seller_id)
            .cloned()
            .collect()
    }

    /// Apply a mutation to a listing and return the updated copy.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the listing does not exist.
    pub fn update<F>(&self, id: ListingId, apply: F) -> Result<Listing, RepositoryError>
    where
        F: FnOnce(&mut Listing),
    {
        let mut tables = self.store.write();
        let listing = tables
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepositoryError::NotFound)?;

        apply(listing);
        Ok(listing.clone())
    }

    /// Remove a listing and return it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the listing does not exist.
    pub fn remove(&self, id: ListingId) -> Result<Listing, RepositoryError> {
        let mut tables = self.store.write();
        let index = tables
            .listings
            .iter()
            .position(|l| l.id == id)
            .ok_or(RepositoryError::NotFound)?;

        Ok(tables.listings.remove(index))
    }
}
