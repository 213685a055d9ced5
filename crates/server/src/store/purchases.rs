//! Purchase ledger repository.
//!
//! Purchase records are append-only: created by checkout, never mutated or
//! deleted.

use std::collections::HashMap;

use chrono::Utc;

use curio_core::{PurchaseId, UserId};

use super::Store;
use crate::models::PurchaseRecord;

/// Repository for per-user purchase ledgers.
pub struct PurchaseRepository<'a> {
    store: &'a Store,
}

impl<'a> PurchaseRepository<'a> {
    /// Create a new purchase repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Convert a user's cart into purchase records.
    ///
    /// Runs as a single critical section under the store's write guard:
    /// every cart entry is resolved against the catalog, resolvable entries
    /// are snapshotted into fresh records appended to the user's ledger,
    /// dangling entries (listing deleted after being carted) are silently
    /// dropped, and the cart is replaced with an empty one. Returns exactly
    /// the newly created records.
    #[must_use]
    pub fn checkout(&self, user_id: UserId) -> Vec<PurchaseRecord> {
        let mut tables = self.store.write();

        let entries = tables
            .carts
            .insert(user_id, crate::models::Cart::default())
            .map(|cart| cart.items)
            .unwrap_or_default();

        let now = Utc::now();
        let created: Vec<PurchaseRecord> = entries
            .iter()
            .filter_map(|entry| {
                tables
                    .listings
                    .iter()
                    .find(|l| l.id == entry.listing_id)
                    .map(|listing| PurchaseRecord {
                        id: PurchaseId::generate(),
                        listing: listing.clone(),
                        purchased_at: now,
                    })
            })
            .collect();

        tables
            .purchases
            .entry(user_id)
            .or_default()
            .extend(created.iter().cloned());

        created
    }

    /// Append a record directly to a user's ledger.
    ///
    /// Used by demo seeding; checkout is the only production writer.
    pub fn append(&self, user_id: UserId, record: PurchaseRecord) {
        self.store
            .write()
            .purchases
            .entry(user_id)
            .or_default()
            .push(record);
    }

    /// A user's full purchase history, in append (chronological) order.
    #[must_use]
    pub fn history(&self, user_id: UserId) -> Vec<PurchaseRecord> {
        self.store
            .read()
            .purchases
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Every user's ledger, keyed by user ID.
    #[must_use]
    pub fn grouped(&self) -> HashMap<UserId, Vec<PurchaseRecord>> {
        self.store.read().purchases.clone()
    }
}
