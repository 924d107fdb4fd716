use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of an order: a product reference and a quantity.
///
/// `product_id` is never validated against the product catalog; a dangling
/// reference renders as "Unknown Product" with price 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    /// References a customer-like user id, by convention only.
    pub user_id: u64,
    /// Used only for display grouping.
    pub date: DateTime<Utc>,
    pub products: Vec<LineItem>,
}
