//! Response envelope classification.
//!
//! The backend's list endpoints evolved through three envelope
//! conventions, all still live on different endpoints:
//!
//! ```json
//! [ ...rawEntity ]
//! { "items": [ ...rawEntity ], "total": 42 }
//! { "data": [ ...rawEntity ], "total_count": 42 }
//! ```
//!
//! and single-entity endpoints through two (`rawEntity` or
//! `{"data": rawEntity}`). Rather than probing properties speculatively,
//! every body is classified into [`ListEnvelope`] exactly once, which
//! makes the precedence order (bare array, then `items`, then `data`)
//! explicit and exhaustively matched. Classification never fails; shapes
//! that fit nothing yield an empty list.

use serde_json::Value;

use mangust_core::Page;

/// Classified shape of a list response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEnvelope<'a> {
    /// Bare top-level array.
    Array(&'a [Value]),
    /// `{"items": [...]}` wrapper.
    Items(&'a [Value]),
    /// `{"data": [...]}` wrapper.
    Data(&'a [Value]),
    /// A lone object - a single-entity body, not a list.
    Single(&'a Value),
    /// Null, scalar, or an object with no recognizable list key.
    Opaque,
}

impl<'a> ListEnvelope<'a> {
    /// Classify `body`. Precedence: bare array, `items`, `data`, single
    /// object. Both wrapper keys may be present; `items` wins.
    #[must_use]
    pub fn classify(body: &'a Value) -> Self {
        if let Some(entries) = body.as_array() {
            return Self::Array(entries);
        }
        let Some(map) = body.as_object() else {
            return Self::Opaque;
        };
        if let Some(entries) = map.get("items").and_then(Value::as_array) {
            return Self::Items(entries);
        }
        if let Some(entries) = map.get("data").and_then(Value::as_array) {
            return Self::Data(entries);
        }
        Self::Single(body)
    }

    /// The raw entity records, in order. Empty for [`Self::Single`] and
    /// [`Self::Opaque`].
    #[must_use]
    pub const fn entries(self) -> &'a [Value] {
        match self {
            Self::Array(entries) | Self::Items(entries) | Self::Data(entries) => entries,
            Self::Single(_) | Self::Opaque => &[],
        }
    }
}

/// Extract the raw entity records from a list body.
///
/// Never fails: unrecognized shapes yield an empty slice.
#[must_use]
pub fn extract_paginated_items(body: &Value) -> &[Value] {
    ListEnvelope::classify(body).entries()
}

/// Extract the reported total from a list body.
///
/// Reads `total`, falling back to `total_count`. `None` means the backend
/// did not report a count; callers treat that as "more pages may exist",
/// never as zero results.
#[must_use]
pub fn extract_total(body: &Value) -> Option<u64> {
    let map = body.as_object()?;
    let value = map.get("total").or_else(|| map.get("total_count"))?;
    number_as_count(value)
}

/// Unwrap a single-entity body.
///
/// Accepts `rawEntity` or `{"data": rawEntity}`; anything else is handed
/// to the normalizer as-is, which degrades it to a record of defaults.
#[must_use]
pub fn extract_entity(body: &Value) -> &Value {
    match body.get("data") {
        Some(inner) if inner.is_object() => inner,
        _ => body,
    }
}

/// Apply envelope extraction and per-record normalization to a list body.
///
/// `items` is always a (possibly empty) vector; a partially-malformed
/// record renders with blanks rather than aborting the whole list.
pub fn page_of<T>(body: &Value, normalize: impl Fn(&Value) -> T) -> Page<T> {
    let items = extract_paginated_items(body).iter().map(normalize).collect();
    Page {
        items,
        total: extract_total(body),
    }
}

/// Interpret a JSON value as a non-negative count.
fn number_as_count(value: &Value) -> Option<u64> {
    if let Some(count) = value.as_u64() {
        return Some(count);
    }
    // Some revisions of the backend serialized counts as floats.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f as u64)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_bare_array() {
        let body = json!([{"id": "1"}, {"id": "2"}]);
        assert!(matches!(
            ListEnvelope::classify(&body),
            ListEnvelope::Array(entries) if entries.len() == 2
        ));
    }

    #[test]
    fn test_classify_items_wrapper() {
        let body = json!({"items": [{"id": "1"}], "total": 1});
        assert!(matches!(
            ListEnvelope::classify(&body),
            ListEnvelope::Items(entries) if entries.len() == 1
        ));
    }

    #[test]
    fn test_classify_data_wrapper() {
        let body = json!({"data": [{"id": "1"}]});
        assert!(matches!(
            ListEnvelope::classify(&body),
            ListEnvelope::Data(entries) if entries.len() == 1
        ));
    }

    #[test]
    fn test_items_wins_over_data() {
        let body = json!({"items": [{"id": "a"}], "data": [{"id": "b"}, {"id": "c"}]});
        let entries = extract_paginated_items(&body);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.first().unwrap()["id"], "a");
    }

    #[test]
    fn test_unrecognized_shapes_yield_empty() {
        assert!(extract_paginated_items(&json!({"id": "1"})).is_empty());
        assert!(extract_paginated_items(&Value::Null).is_empty());
        assert!(extract_paginated_items(&json!(42)).is_empty());
        // A non-array value under a list key does not count.
        assert!(extract_paginated_items(&json!({"items": "nope"})).is_empty());
    }

    #[test]
    fn test_extract_total() {
        assert_eq!(extract_total(&json!({"total": 5})), Some(5));
        assert_eq!(extract_total(&json!({"total_count": 7})), Some(7));
        assert_eq!(extract_total(&json!({})), None);
        assert_eq!(extract_total(&Value::Null), None);
        assert_eq!(extract_total(&json!({"total": "5"})), None);
    }

    #[test]
    fn test_extract_total_prefers_total_over_total_count() {
        assert_eq!(
            extract_total(&json!({"total": 5, "total_count": 7})),
            Some(5)
        );
    }

    #[test]
    fn test_extract_total_accepts_float_counts() {
        assert_eq!(extract_total(&json!({"total": 25.0})), Some(25));
        assert_eq!(extract_total(&json!({"total": -3.0})), None);
    }

    #[test]
    fn test_extract_entity_unwraps_data() {
        let body = json!({"data": {"id": "1"}});
        assert_eq!(extract_entity(&body), &json!({"id": "1"}));
    }

    #[test]
    fn test_extract_entity_passes_bare_object_through() {
        let body = json!({"id": "1"});
        assert_eq!(extract_entity(&body), &body);
    }

    #[test]
    fn test_extract_entity_ignores_non_object_data() {
        // {"data": [...]} is a list envelope, not a single entity.
        let body = json!({"data": [1, 2]});
        assert_eq!(extract_entity(&body), &body);
    }

    #[test]
    fn test_page_of_maps_and_attaches_total() {
        let body = json!({"items": [{"n": 1}, {"n": 2}], "total": 9});
        let page = page_of(&body, |raw| raw["n"].as_i64().unwrap_or(0));
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, Some(9));
    }

    #[test]
    fn test_page_of_opaque_body_is_empty_page() {
        let page = page_of(&Value::Null, |_| 0);
        assert!(page.items.is_empty());
        assert_eq!(page.total, None);
    }
}
