//! Domain and wire types for the marketplace.
//!
//! Domain types (`User`) are kept separate from their serializable wire
//! projections (`PublicUser`); everything that crosses the API boundary is
//! camelCase with epoch-millisecond timestamps.

pub mod cart;
pub mod listing;
pub mod purchase;
pub mod user;

pub use cart::{Cart, CartEntry, ResolvedCartItem};
pub use listing::{Listing, ListingDraft, ListingPatch};
pub use purchase::PurchaseRecord;
pub use user::{ProfilePatch, PublicUser, User};
