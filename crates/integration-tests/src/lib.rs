//! Integration tests for the Mangust client.
//!
//! # Test Categories
//!
//! - `normalize_pipeline` - Raw backend payloads, in every envelope
//!   convention the backend has shipped, through extraction and
//!   normalization into canonical records
//! - `pagination_flow` - The page contract, pager navigation, and the
//!   list-fetch state machine driven the way a view drives them
//!
//! The fixtures here reproduce real payload quirks: `_id` vs `id`,
//! snake_case vs camelCase, wrapped vs bare list envelopes, and line items
//! missing one of unit price / line total.

#![cfg_attr(not(test), forbid(unsafe_code))]

use serde_json::{Value, json};

/// A raw order as the oldest backend revision serialized it: `_id`,
/// snake_case keys, `{data: [...]}` list envelope, `total_price`.
#[must_use]
pub fn legacy_order_fixture() -> Value {
    json!({
        "_id": "ord-legacy",
        "user_id": "usr-1",
        "user": {"_id": "usr-1", "name": "Ada", "email": "ada@example.com"},
        "items": [
            {"product_id": "prd-1", "quantity": 2, "line_total": 59.0,
             "product": {"_id": "prd-1", "name": "Sextant", "price": 29.5}},
            {"product_id": "prd-2", "quantity": 1, "price": 12.0},
        ],
        "total_price": 71.0,
        "status": "processing",
        "created_at": "2023-11-05T08:30:00Z",
        "updated_at": "2023-11-06T10:00:00Z",
    })
}

/// The same order as the current backend revision serializes it.
#[must_use]
pub fn current_order_fixture() -> Value {
    json!({
        "id": "ord-legacy",
        "userId": "usr-1",
        "user": {"id": "usr-1", "name": "Ada", "email": "ada@example.com"},
        "items": [
            {"productId": "prd-1", "quantity": 2, "lineTotal": 59.0,
             "product": {"id": "prd-1", "name": "Sextant", "price": 29.5}},
            {"productId": "prd-2", "quantity": 1, "price": 12.0},
        ],
        "total": 71.0,
        "status": "processing",
        "createdAt": "2023-11-05T08:30:00Z",
        "updatedAt": "2023-11-06T10:00:00Z",
    })
}

/// A raw product in mixed conventions, as some endpoints still emit.
#[must_use]
pub fn mixed_product_fixture() -> Value {
    json!({
        "_id": "prd-1",
        "name": "Sextant",
        "description": "Brass navigation instrument",
        "price": 29.5,
        "stock": 14,
        "imageUrl": "https://img.mangust.store/prd-1.png",
        "category_id": "cat-nav",
        "category": {"_id": "cat-nav", "name": "Navigation"},
        "reviews": [
            {"_id": "rev-1", "user_id": "usr-1", "user_name": "Ada",
             "rating": 5, "comment": "Precise.", "created_at": "2024-01-02T00:00:00Z"},
        ],
        "created_at": "2023-10-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
    })
}

/// Wrap records in each of the three list envelope conventions.
#[must_use]
pub fn bare_envelope(records: Vec<Value>) -> Value {
    Value::Array(records)
}

/// `{"items": [...], "total": n}` - the middle-era convention.
#[must_use]
pub fn items_envelope(records: Vec<Value>, total: u64) -> Value {
    json!({"items": records, "total": total})
}

/// `{"data": [...], "total_count": n}` - the oldest convention.
#[must_use]
pub fn data_envelope(records: Vec<Value>, total_count: u64) -> Value {
    json!({"data": records, "total_count": total_count})
}
