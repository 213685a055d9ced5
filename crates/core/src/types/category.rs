//! Listing categories.
//!
//! A fixed, closed set of classification tags shared between client and
//! server. Values outside the set are rejected at deserialization.

use serde::{Deserialize, Serialize};

/// Category of a marketplace listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Books,
    Toys,
    Sports,
    #[serde(rename = "Pottery & Clay")]
    PotteryAndClay,
    Other,
}

impl Category {
    /// The full category enumeration, in display order.
    pub const ALL: [Self; 8] = [
        Self::Electronics,
        Self::Fashion,
        Self::Home,
        Self::Books,
        Self::Toys,
        Self::Sports,
        Self::PotteryAndClay,
        Self::Other,
    ];

    /// The wire/display name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Fashion => "Fashion",
            Self::Home => "Home",
            Self::Books => "Books",
            Self::Toys => "Toys",
            Self::Sports => "Sports",
            Self::PotteryAndClay => "Pottery & Clay",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}
