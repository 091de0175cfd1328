//! Order records.

use serde::{Deserialize, Serialize};

use super::{OrderStatus, UserSummary};

/// An order with its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend identifier; empty string when the payload carried none.
    pub id: String,
    pub user_id: String,
    /// Embedded buyer summary, when the backend populated it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    pub items: Vec<OrderItem>,
    /// Order total as computed by the backend. The server is authoritative;
    /// clients never sum line items.
    pub total: f64,
    pub status: OrderStatus,
    /// ISO 8601 creation timestamp, passed through unparsed.
    pub created_at: String,
    /// ISO 8601 update timestamp, passed through unparsed.
    pub updated_at: String,
}

/// A single line item of an order.
///
/// Either `price` or `line_total` may be absent on the wire; the missing
/// one is derived from the other at normalization time so both are always
/// populated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    /// Embedded product summary, when the backend populated it. Views fall
    /// back to `product_id` when this is `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductSummary>,
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    /// Line total (`price * quantity` when the wire omitted it).
    pub line_total: f64,
}

/// Product summary embedded in an order line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub price: f64,
}
