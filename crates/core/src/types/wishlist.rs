//! Wishlist records.

use serde::{Deserialize, Serialize};

use super::CategorySummary;

/// An entry on a customer's wishlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Backend identifier; empty string when the payload carried none.
    pub id: String,
    pub product_id: String,
    /// Embedded product snapshot, when the backend populated it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<WishlistProduct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Product snapshot embedded in a wishlist entry.
///
/// Richer than [`super::ProductSummary`]: wishlist views also render stock
/// and category information when the backend provides it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,
}
