//! Product and review conversion functions.

use serde_json::Value;

use mangust_core::{Product, Review};

use super::{
    convert_category_summary, id_field, integer_field, nested, nested_list, number_field,
    opt_string_field, string_field,
};

pub fn convert_product(raw: &Value) -> Product {
    Product {
        id: id_field(raw),
        name: string_field(raw, &["name"]),
        description: string_field(raw, &["description"]),
        price: number_field(raw, &["price"]),
        stock: integer_field(raw, &["stock"]),
        image_url: opt_string_field(raw, &["imageUrl", "image_url"]),
        category_id: string_field(raw, &["categoryId", "category_id"]),
        category: nested(raw, "category").map(convert_category_summary),
        reviews: nested_list(raw, "reviews").iter().map(convert_review).collect(),
        created_at: string_field(raw, &["createdAt", "created_at"]),
        updated_at: string_field(raw, &["updatedAt", "updated_at"]),
    }
}

pub fn convert_review(raw: &Value) -> Review {
    Review {
        id: id_field(raw),
        user_id: string_field(raw, &["userId", "user_id"]),
        user_name: string_field(raw, &["userName", "user_name"]),
        // Input forms constrain ratings to 1-5; out-of-range values are the
        // backend's to reject, not ours to clamp.
        rating: integer_field(raw, &["rating"]),
        comment: string_field(raw, &["comment"]),
        created_at: string_field(raw, &["createdAt", "created_at"]),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let raw = json!({
            "_id": "p1",
            "name": "Spyglass",
            "description": "Brass, collapsible",
            "price": 129.5,
            "stock": 3,
            "image_url": "https://img/p1.png",
            "category_id": "c1",
            "category": {"_id": "c1", "name": "Optics"},
            "reviews": [
                {"_id": "r1", "user_id": "u1", "user_name": "Ada", "rating": 5, "comment": "sharp"}
            ],
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z",
        });

        let product = convert_product(&raw);
        assert_eq!(product.id, "p1");
        assert!((product.price - 129.5).abs() < f64::EPSILON);
        assert_eq!(product.stock, 3);
        assert_eq!(product.category_id, "c1");

        let category = product.category.unwrap();
        assert_eq!(category.id, "c1");
        assert_eq!(category.name, "Optics");

        assert_eq!(product.reviews.len(), 1);
        let review = product.reviews.first().unwrap();
        assert_eq!(review.user_name, "Ada");
        assert_eq!(review.rating, 5);
    }

    #[test]
    fn test_missing_category_is_none_not_stub() {
        let product = convert_product(&json!({"id": "p1", "name": "Spyglass"}));
        assert!(product.category.is_none());
        assert!(product.reviews.is_empty());
    }

    #[test]
    fn test_present_but_empty_category_is_a_default_record() {
        let product = convert_product(&json!({"id": "p1", "category": {}}));
        let category = product.category.unwrap();
        assert_eq!(category.id, "");
        assert_eq!(category.name, "");
    }

    #[test]
    fn test_rating_passes_through_unclamped() {
        let review = convert_review(&json!({"id": "r1", "rating": 11}));
        assert_eq!(review.rating, 11);
    }

    #[test]
    fn test_canonical_record_round_trips_unchanged() {
        let product = convert_product(&json!({
            "id": "p1",
            "name": "Spyglass",
            "description": "Brass",
            "price": 10.0,
            "stock": 2,
            "imageUrl": "https://img/p1.png",
            "categoryId": "c1",
            "category": {"id": "c1", "name": "Optics"},
            "reviews": [],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-02-01T00:00:00Z",
        }));
        let reserialized = serde_json::to_value(&product).unwrap();
        assert_eq!(convert_product(&reserialized), product);
    }
}
