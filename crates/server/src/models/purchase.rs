//! Purchase ledger types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use curio_core::PurchaseId;

use super::Listing;

/// An immutable record of a completed purchase.
///
/// Embeds a full snapshot of the listing as of purchase time, so later
/// edits or deletion of the listing never alter purchase history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub id: PurchaseId,
    pub listing: Listing,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub purchased_at: DateTime<Utc>,
}
