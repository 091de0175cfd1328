//! Canonical entity records.
//!
//! These are the flat, typed shapes every backend payload is normalized
//! into. Serialized forms use camelCase keys - the canonical client-side
//! convention - so a record that round-trips through JSON re-normalizes to
//! itself.

mod category;
mod order;
mod product;
mod status;
mod user;
mod wishlist;

pub use category::{Category, CategorySummary};
pub use order::{Order, OrderItem, ProductSummary};
pub use product::{Product, Review};
pub use status::{OrderStatus, Role};
pub use user::{User, UserSummary};
pub use wishlist::{WishlistItem, WishlistProduct};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_json_uses_camel_case_keys() {
        let product = Product {
            id: "p1".to_string(),
            name: "Spyglass".to_string(),
            description: String::new(),
            price: 10.0,
            stock: 2,
            image_url: Some("https://img/p1.png".to_string()),
            category_id: "c1".to_string(),
            category: None,
            reviews: vec![],
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: String::new(),
        };

        let json = serde_json::to_value(&product).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(keys.contains(&"categoryId"));
        assert!(keys.contains(&"imageUrl"));
        assert!(keys.contains(&"createdAt"));
        assert!(!keys.contains(&"category_id"));
    }

    #[test]
    fn test_absent_optionals_are_omitted_not_null() {
        let item = WishlistItem {
            id: "w1".to_string(),
            product_id: "p1".to_string(),
            product: None,
            user_id: None,
            created_at: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        let map = json.as_object().unwrap();
        assert!(!map.contains_key("product"));
        assert!(!map.contains_key("userId"));
        assert!(!map.contains_key("createdAt"));
    }

    #[test]
    fn test_status_serializes_to_wire_form() {
        let json = serde_json::to_value(OrderStatus::Shipped).unwrap();
        assert_eq!(json, serde_json::json!("shipped"));
        let json = serde_json::to_value(Role::Admin).unwrap();
        assert_eq!(json, serde_json::json!("admin"));
    }
}
