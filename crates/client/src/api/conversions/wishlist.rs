//! Wishlist conversion functions.

use serde_json::Value;

use mangust_core::{WishlistItem, WishlistProduct};

use super::{
    convert_category_summary, id_field, nested, number_field, opt_integer_field, opt_string_field,
    string_field,
};

pub fn convert_wishlist_item(raw: &Value) -> WishlistItem {
    WishlistItem {
        id: id_field(raw),
        product_id: string_field(raw, &["productId", "product_id"]),
        product: nested(raw, "product").map(convert_wishlist_product),
        user_id: opt_string_field(raw, &["userId", "user_id"]),
        created_at: opt_string_field(raw, &["createdAt", "created_at"]),
    }
}

fn convert_wishlist_product(raw: &Value) -> WishlistProduct {
    WishlistProduct {
        id: id_field(raw),
        name: string_field(raw, &["name"]),
        price: number_field(raw, &["price"]),
        description: opt_string_field(raw, &["description"]),
        stock: opt_integer_field(raw, &["stock"]),
        category_id: opt_string_field(raw, &["categoryId", "category_id"]),
        category: nested(raw, "category").map(convert_category_summary),
    }
}
