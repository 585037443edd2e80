use chrono::{DateTime, Utc};

/// A recorded purchase. Immutable once appended to the ledger.
///
/// `user_id` and `product_id` refer to records that existed at creation time;
/// they are plain identifier values, not live references.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

/// Payload for recording a new purchase.
#[derive(Debug, Clone)]
pub struct PurchaseCreate {
    pub user_id: String,
    pub product_id: String,
    pub quantity: u32,
}
