//! In-memory storage for the marketplace.
//!
//! All state is volatile by design; the repository seam keeps handlers and
//! services ignorant of the backing structure so a durable store can be
//! swapped in later.
//!
//! # Tables
//!
//! - `users` - registered accounts (insertion order)
//! - `sessions` - bearer token to user mapping
//! - `listings` - the catalog (insertion order; browse sorts on demand)
//! - `carts` - per-user pending selections, created lazily
//! - `purchases` - per-user append-only purchase ledgers
//!
//! # Locking
//!
//! Every table lives in one [`Tables`] struct behind a single `RwLock`.
//! Reads share the read guard; each mutation takes the write guard, so a
//! multi-table operation such as checkout is a single critical section.

pub mod carts;
pub mod listings;
pub mod purchases;
pub mod sessions;
pub mod users;

pub use carts::CartRepository;
pub use listings::ListingRepository;
pub use purchases::PurchaseRepository;
pub use sessions::SessionRepository;
pub use users::UserRepository;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use curio_core::UserId;

use crate::models::{Cart, Listing, PurchaseRecord, User};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The referenced entity does not exist.
    #[error("not found")]
    NotFound,

    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// The raw marketplace tables.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub users: Vec<User>,
    pub sessions: HashMap<String, UserId>,
    pub listings: Vec<Listing>,
    pub carts: HashMap<UserId, Cart>,
    pub purchases: HashMap<UserId, Vec<PurchaseRecord>>,
}

/// Cloneable handle to the shared in-memory state.
///
/// The in-memory analogue of a connection pool: cheap to clone, passed to
/// repositories by reference.
#[derive(Debug, Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the shared read guard.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    /// Acquire the exclusive write guard.
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }
}
