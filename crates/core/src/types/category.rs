//! Category records.

use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend identifier; empty string when the payload carried none.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Banner image, when the category has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// ISO 8601 creation timestamp, passed through unparsed.
    pub created_at: String,
    /// ISO 8601 update timestamp, passed through unparsed.
    pub updated_at: String,
}

/// Category summary embedded in other entities (products, wishlist items).
///
/// Distinct from [`Category`]: an absent embedded category means the parent
/// record carries `None`, never a zeroed-out summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
