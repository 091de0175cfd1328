//! Product and review records.

use serde::{Deserialize, Serialize};

use super::CategorySummary;

/// A product as rendered by catalog and admin views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier; empty string when the payload carried none.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price as sent by the backend; this layer never does price math.
    pub price: f64,
    /// Units in stock.
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Owning category id (may be empty when unassigned).
    pub category_id: String,
    /// Embedded category summary, when the backend populated it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,
    pub reviews: Vec<Review>,
    /// ISO 8601 creation timestamp, passed through unparsed.
    pub created_at: String,
    /// ISO 8601 update timestamp, passed through unparsed.
    pub updated_at: String,
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    /// Star rating. Input forms constrain this to 1-5; the value is passed
    /// through as received.
    pub rating: i64,
    pub comment: String,
    pub created_at: String,
}
