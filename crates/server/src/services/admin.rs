//! Admin service.
//!
//! Read-only aggregate projection over users, the catalog, and every
//! purchase ledger. Access is gated upstream by the admin extractor; users
//! are projected without credential digests.

use std::collections::HashMap;

use serde::Serialize;

use curio_core::{Category, UserId};

use crate::models::{Listing, PublicUser, PurchaseRecord};
use crate::store::{ListingRepository, PurchaseRepository, Store, UserRepository};

/// Aggregate snapshot returned to the administrator.
#[derive(Debug, Serialize)]
pub struct AdminSnapshot {
    pub users: Vec<PublicUser>,
    pub listings: Vec<Listing>,
    pub purchases: HashMap<UserId, Vec<PurchaseRecord>>,
    pub categories: [Category; 8],
}

/// Admin service.
pub struct AdminService<'a> {
    users: UserRepository<'a>,
    listings: ListingRepository<'a>,
    purchases: PurchaseRepository<'a>,
}

impl<'a> AdminService<'a> {
    /// Create a new admin service.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            users: UserRepository::new(store),
            listings: ListingRepository::new(store),
            purchases: PurchaseRepository::new(store),
        }
    }

    /// Build the aggregate snapshot.
    #[must_use]
    pub fn snapshot(&self) -> AdminSnapshot {
        AdminSnapshot {
            users: self.users.all().iter().map(PublicUser::from).collect(),
            listings: self.listings.browse(None, None),
            purchases: self.purchases.grouped(),
            categories: Category::ALL,
        }
    }
}
