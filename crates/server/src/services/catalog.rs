//! Catalog service.
//!
//! Create/read/update/delete for listings, scoped by owner, plus the public
//! browse operation with search/filter/sort.

use thiserror::Error;

use chrono::Utc;
use url::Url;

use curio_core::{Category, ListingId, Price, UserId};

use crate::models::{Listing, ListingDraft, ListingPatch};
use crate::store::{ListingRepository, RepositoryError, Store, UserRepository};

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The listing does not exist.
    #[error("listing not found")]
    NotFound,

    /// The caller is neither the owning seller nor an administrator.
    #[error("caller does not own this listing")]
    Forbidden,

    /// The payload failed validation.
    #[error("invalid listing: {0}")]
    InvalidListing(String),
}

/// Catalog service.
pub struct CatalogService<'a> {
    listings: ListingRepository<'a>,
    users: UserRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            listings: ListingRepository::new(store),
            users: UserRepository::new(store),
        }
    }

    /// Browse the catalog, newest first.
    ///
    /// `search` matches case-insensitively against titles; `category` is an
    /// exact match against the category's wire name. A category string
    /// outside the fixed enumeration matches nothing (it is a filter value,
    /// not a payload, so it is not an error). Blank filters are ignored.
    #[must_use]
    pub fn browse(&self, search: Option<&str>, category: Option<&str>) -> Vec<Listing> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        let category = category.map(str::trim).filter(|c| !c.is_empty());

        match category {
            None => self.listings.browse(search, None),
            Some(raw) => raw.parse::<Category>().map_or_else(
                |_| Vec::new(),
                |category| self.listings.browse(search, Some(category)),
            ),
        }
    }

    /// Get a listing by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no listing has that ID.
    pub fn get(&self, id: ListingId) -> Result<Listing, CatalogError> {
        self.listings.get(id).ok_or(CatalogError::NotFound)
    }

    /// All listings owned by a seller.
    #[must_use]
    pub fn owned_by(&self, seller_id: UserId) -> Vec<Listing> {
        self.listings.by_seller(seller_id)
    }

    /// Create a listing owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidListing` if the draft fails validation.
    pub fn create(&self, seller_id: UserId, draft: ListingDraft) -> Result<Listing, CatalogError> {
        validate_text("title", &draft.title)?;
        validate_text("description", &draft.description)?;
        let price = validate_price(draft.price)?;
        validate_image_url(&draft.image_url)?;

        let listing = Listing {
            id: ListingId::generate(),
            seller_id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            price,
            image_url: draft.image_url,
            created_at: Utc::now(),
        };
        self.listings.insert(listing.clone());

        Ok(listing)
    }

    /// Apply a partial update to a listing.
    ///
    /// Only the owning seller may update. Fields absent from the patch keep
    /// their prior values; supplied fields are validated by the creation
    /// rules.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the listing doesn't exist,
    /// `CatalogError::Forbidden` if the caller is not the seller, and
    /// `CatalogError::InvalidListing` if a supplied field is invalid.
    pub fn update(
        &self,
        caller: UserId,
        id: ListingId,
        patch: ListingPatch,
    ) -> Result<Listing, CatalogError> {
        let existing = self.get(id)?;
        if existing.seller_id != caller {
            return Err(CatalogError::Forbidden);
        }

        if let Some(title) = &patch.title {
            validate_text("title", title)?;
        }
        if let Some(description) = &patch.description {
            validate_text("description", description)?;
        }
        let price = patch.price.map(validate_price).transpose()?;
        if let Some(image_url) = &patch.image_url {
            validate_image_url(image_url)?;
        }

        let updated = self.listings.update(id, |listing| {
            if let Some(title) = patch.title {
                listing.title = title;
            }
            if let Some(description) = patch.description {
                listing.description = description;
            }
            if let Some(category) = patch.category {
                listing.category = category;
            }
            if let Some(price) = price {
                listing.price = price;
            }
            if let Some(image_url) = patch.image_url {
                listing.image_url = image_url;
            }
        });

        updated.map_err(|e| match e {
            RepositoryError::NotFound => CatalogError::NotFound,
            RepositoryError::Conflict(msg) => CatalogError::InvalidListing(msg),
        })
    }

    /// Delete a listing.
    ///
    /// Allowed for the owning seller and for administrators.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the listing doesn't exist and
    /// `CatalogError::Forbidden` if the caller is neither seller nor admin.
    pub fn delete(&self, caller: UserId, id: ListingId) -> Result<Listing, CatalogError> {
        let existing = self.get(id)?;

        if existing.seller_id != caller {
            let is_admin = self
                .users
                .get_by_id(caller)
                .is_some_and(|u| u.role.is_admin());
            if !is_admin {
                return Err(CatalogError::Forbidden);
            }
        }

        self.listings.remove(id).map_err(|e| match e {
            RepositoryError::NotFound => CatalogError::NotFound,
            RepositoryError::Conflict(msg) => CatalogError::InvalidListing(msg),
        })
    }
}

/// Validate a free-text field is non-empty.
fn validate_text(field: &str, value: &str) -> Result<(), CatalogError> {
    if value.is_empty() {
        return Err(CatalogError::InvalidListing(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}

/// Validate a raw price amount.
fn validate_price(minor_units: i64) -> Result<Price, CatalogError> {
    Price::new(minor_units).map_err(|e| CatalogError::InvalidListing(e.to_string()))
}

/// Validate an image URL: a well-formed URL, or empty for no image.
fn validate_image_url(image_url: &str) -> Result<(), CatalogError> {
    if image_url.is_empty() {
        return Ok(());
    }
    Url::parse(image_url)
        .map(|_| ())
        .map_err(|_| CatalogError::InvalidListing("imageUrl must be a valid URL".to_owned()))
}
