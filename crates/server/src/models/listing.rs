//! Listing types: the catalog entity plus its create/update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use curio_core::{Category, ListingId, Price, UserId};

/// An item offered for sale.
///
/// `seller_id` is an immutable back-reference to the creating user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub seller_id: UserId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Price in minor currency units (cents).
    pub price: Price,
    /// Image URL, or an empty string for no image.
    pub image_url: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a listing.
///
/// `price` and `image_url` arrive raw and are validated by the catalog
/// service so that every rejection surfaces as an invalid-payload error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: i64,
    #[serde(default)]
    pub image_url: String,
}

/// Partial update payload for a listing.
///
/// Only present fields overwrite; each supplied field is validated by the
/// same rules as creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
}

impl ListingPatch {
    /// Whether the patch carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_wire_shape() {
        let listing = Listing {
            id: ListingId::generate(),
            seller_id: UserId::generate(),
            title: "Vintage Lamp".to_string(),
            description: "A lamp.".to_string(),
            category: Category::Home,
            price: Price::new(500).unwrap(),
            image_url: String::new(),
            created_at: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
        };

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["category"], "Home");
        assert_eq!(json["price"], 500);
        assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
        assert!(json.get("sellerId").is_some());
        assert!(json.get("imageUrl").is_some());
    }

    #[test]
    fn test_draft_defaults_image_url() {
        let draft: ListingDraft = serde_json::from_str(
            r#"{"title":"Lamp","description":"A lamp.","category":"Home","price":500}"#,
        )
        .unwrap();
        assert_eq!(draft.image_url, "");
    }

    #[test]
    fn test_patch_partial_fields() {
        let patch: ListingPatch = serde_json::from_str(r#"{"price":750}"#).unwrap();
        assert_eq!(patch.price, Some(750));
        assert!(patch.title.is_none());
        assert!(!patch.is_empty());
        assert!(ListingPatch::default().is_empty());
    }

    #[test]
    fn test_patch_rejects_unknown_category() {
        assert!(serde_json::from_str::<ListingPatch>(r#"{"category":"Music"}"#).is_err());
    }
}
