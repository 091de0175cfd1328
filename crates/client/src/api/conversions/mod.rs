//! Raw-record to canonical-entity conversion functions.
//!
//! One file per entity, mirroring the endpoint wrappers. All conversions
//! are total: any JSON-shaped input produces a record, with missing or
//! malformed fields degraded to defaults (empty string, zero, `None`).
//!
//! # Field resolution
//!
//! The backend emits both camelCase and snake_case spellings, sometimes in
//! the same payload. Resolution order is fixed: camelCase key, then
//! snake_case key, then any nested-alternate key, then the default. The
//! camelCase form is authoritative when both are present - helpers here
//! take their key lists in that order and must never be called with the
//! order reversed.
//!
//! Identifiers resolve as `id`, then `_id`, then `""`. The empty string is
//! the explicit "unknown id" sentinel, not an error; a record is never
//! dropped over id spelling.

mod categories;
mod orders;
mod products;
mod users;
mod wishlist;

pub use categories::{convert_category, convert_category_summary};
pub use orders::{convert_order, convert_order_item};
pub use products::{convert_product, convert_review};
pub use users::{convert_user, convert_user_summary};
pub use wishlist::convert_wishlist_item;

use serde_json::Value;

/// First present, non-null value among `keys`.
fn resolve<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| raw.get(key))
        .filter(|value| !value.is_null())
}

/// Resolve a string field, defaulting to `""`.
pub(crate) fn string_field(raw: &Value, keys: &[&str]) -> String {
    opt_string_field(raw, keys).unwrap_or_default()
}

/// Resolve an optional string field.
pub(crate) fn opt_string_field(raw: &Value, keys: &[&str]) -> Option<String> {
    resolve(raw, keys)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Resolve a numeric field, defaulting to `0.0`.
pub(crate) fn number_field(raw: &Value, keys: &[&str]) -> f64 {
    opt_number_field(raw, keys).unwrap_or_default()
}

/// Resolve an optional numeric field.
pub(crate) fn opt_number_field(raw: &Value, keys: &[&str]) -> Option<f64> {
    resolve(raw, keys).and_then(Value::as_f64)
}

/// Resolve an integer field, defaulting to `0`.
pub(crate) fn integer_field(raw: &Value, keys: &[&str]) -> i64 {
    opt_integer_field(raw, keys).unwrap_or_default()
}

/// Resolve an optional integer field.
pub(crate) fn opt_integer_field(raw: &Value, keys: &[&str]) -> Option<i64> {
    resolve(raw, keys).and_then(Value::as_i64)
}

/// Resolve the record identifier: `id`, then `_id`, then `""`.
///
/// Early backend revisions emitted numeric ids; those are stringified
/// rather than dropped.
pub(crate) fn id_field(raw: &Value) -> String {
    match resolve(raw, &["id", "_id"]) {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    }
}

/// Resolve an embedded object. Absent or non-object values are `None`;
/// views render their own fallback for missing embeds.
pub(crate) fn nested<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|value| value.is_object())
}

/// Resolve an embedded array, defaulting to empty.
pub(crate) fn nested_list<'a>(raw: &'a Value, key: &str) -> &'a [Value] {
    raw.get(key).and_then(Value::as_array).map_or(&[], Vec::as_slice)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_wins_when_both_present() {
        let raw = json!({"categoryId": "c1", "category_id": "c2"});
        assert_eq!(string_field(&raw, &["categoryId", "category_id"]), "c1");
    }

    #[test]
    fn test_snake_case_fallback() {
        let raw = json!({"category_id": "c2"});
        assert_eq!(string_field(&raw, &["categoryId", "category_id"]), "c2");
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let raw = json!({"categoryId": null, "category_id": "c2"});
        assert_eq!(string_field(&raw, &["categoryId", "category_id"]), "c2");
    }

    #[test]
    fn test_missing_field_defaults() {
        let raw = json!({});
        assert_eq!(string_field(&raw, &["name"]), "");
        assert!((number_field(&raw, &["price"]) - 0.0).abs() < f64::EPSILON);
        assert_eq!(integer_field(&raw, &["stock"]), 0);
        assert_eq!(opt_string_field(&raw, &["imageUrl", "image_url"]), None);
    }

    #[test]
    fn test_wrong_type_degrades_to_default() {
        let raw = json!({"name": 7, "price": "ten"});
        assert_eq!(string_field(&raw, &["name"]), "");
        assert!((number_field(&raw, &["price"]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_id_field_prefers_id_over_underscore_id() {
        assert_eq!(id_field(&json!({"id": "a", "_id": "b"})), "a");
        assert_eq!(id_field(&json!({"_id": "b"})), "b");
        assert_eq!(id_field(&json!({})), "");
    }

    #[test]
    fn test_id_field_stringifies_numbers() {
        assert_eq!(id_field(&json!({"id": 42})), "42");
    }

    #[test]
    fn test_nested_rejects_non_objects() {
        assert!(nested(&json!({"category": {"id": "c1"}}), "category").is_some());
        assert!(nested(&json!({"category": "c1"}), "category").is_none());
        assert!(nested(&json!({"category": null}), "category").is_none());
        assert!(nested(&json!({}), "category").is_none());
    }

    #[test]
    fn test_nested_list_defaults_to_empty() {
        assert_eq!(nested_list(&json!({"reviews": [1, 2]}), "reviews").len(), 2);
        assert!(nested_list(&json!({"reviews": "no"}), "reviews").is_empty());
        assert!(nested_list(&json!({}), "reviews").is_empty());
    }
}
