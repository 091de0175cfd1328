//! Order conversion functions, including line-item price derivation.

use serde_json::Value;

use mangust_core::{Order, OrderItem, OrderStatus, ProductSummary};

use super::{
    convert_user_summary, id_field, integer_field, nested, nested_list, number_field,
    opt_number_field, string_field,
};

pub fn convert_order(raw: &Value) -> Order {
    Order {
        id: id_field(raw),
        user_id: string_field(raw, &["userId", "user_id"]),
        user: nested(raw, "user").map(convert_user_summary),
        items: nested_list(raw, "items").iter().map(convert_order_item).collect(),
        // The server's total is authoritative; older revisions called the
        // field totalPrice. Never recomputed from items here.
        total: number_field(raw, &["total", "totalPrice", "total_price"]),
        status: string_field(raw, &["status"]).parse().unwrap_or_default(),
        created_at: string_field(raw, &["createdAt", "created_at"]),
        updated_at: string_field(raw, &["updatedAt", "updated_at"]),
    }
}

/// Convert one line item, deriving whichever of unit price and line total
/// the wire omitted.
///
/// The derivation is symmetric and never overwrites: a record carrying
/// both fields keeps both exactly as sent, even when they disagree.
pub fn convert_order_item(raw: &Value) -> OrderItem {
    let quantity = integer_field(raw, &["quantity"]);
    let price = opt_number_field(raw, &["price", "unitPrice", "unit_price"]);
    let line_total = opt_number_field(raw, &["lineTotal", "line_total"]);

    #[allow(clippy::cast_precision_loss)]
    let (price, line_total) = match (price, line_total) {
        (Some(price), Some(line_total)) => (price, line_total),
        (Some(price), None) => (price, price * quantity as f64),
        (None, Some(line_total)) => {
            let price = if quantity > 0 {
                line_total / quantity as f64
            } else {
                0.0
            };
            (price, line_total)
        }
        (None, None) => (0.0, 0.0),
    };

    OrderItem {
        product_id: string_field(raw, &["productId", "product_id"]),
        product: nested(raw, "product").map(convert_product_summary),
        quantity,
        price,
        line_total,
    }
}

fn convert_product_summary(raw: &Value) -> ProductSummary {
    ProductSummary {
        id: id_field(raw),
        name: string_field(raw, &["name"]),
        price: number_field(raw, &["price"]),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_with_embedded_user_and_items() {
        let raw = json!({
            "_id": "o1",
            "user_id": "u1",
            "user": {"_id": "u1", "name": "Ada", "email": "ada@example.com"},
            "items": [
                {"product_id": "p1", "quantity": 2, "price": 10.0,
                 "product": {"_id": "p1", "name": "Spyglass", "price": 10.0}}
            ],
            "total": 20.0,
            "status": "shipped",
            "created_at": "2024-01-01T00:00:00Z",
        });

        let order = convert_order(&raw);
        assert_eq!(order.id, "o1");
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.user.unwrap().name, "Ada");

        let item = order.items.first().unwrap();
        assert_eq!(item.product.as_ref().unwrap().name, "Spyglass");
        assert!((item.line_total - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_user_is_none_for_fallback_rendering() {
        let order = convert_order(&json!({"id": "o1", "userId": "u1"}));
        assert!(order.user.is_none());
        assert_eq!(order.user_id, "u1");
    }

    #[test]
    fn test_total_priority_over_legacy_total_price() {
        let order = convert_order(&json!({"id": "o1", "total": 15.0, "total_price": 99.0}));
        assert!((order.total - 15.0).abs() < f64::EPSILON);

        let legacy = convert_order(&json!({"id": "o2", "totalPrice": 42.0}));
        assert!((legacy.total - 42.0).abs() < f64::EPSILON);

        let snake = convert_order(&json!({"id": "o3", "total_price": 7.0}));
        assert!((snake.total - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_never_summed_from_items() {
        let order = convert_order(&json!({
            "id": "o1",
            "items": [{"productId": "p1", "quantity": 3, "price": 10.0}],
        }));
        assert!((order.total - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_status_degrades_to_pending() {
        let order = convert_order(&json!({"id": "o1", "status": "refunded"}));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_item_derives_price_from_line_total() {
        let item = convert_order_item(&json!({"productId": "p1", "quantity": 4, "lineTotal": 40.0}));
        assert!((item.price - 10.0).abs() < f64::EPSILON);
        assert!((item.line_total - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_item_derives_line_total_from_price() {
        let item = convert_order_item(&json!({"productId": "p1", "quantity": 4, "price": 10.0}));
        assert!((item.price - 10.0).abs() < f64::EPSILON);
        assert!((item.line_total - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_item_with_both_fields_keeps_both_untouched() {
        // Deliberately inconsistent input: both values are preserved.
        let item = convert_order_item(&json!({"quantity": 4, "price": 10.0, "lineTotal": 35.0}));
        assert!((item.price - 10.0).abs() < f64::EPSILON);
        assert!((item.line_total - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_item_zero_quantity_yields_zero_price() {
        let item = convert_order_item(&json!({"quantity": 0, "lineTotal": 40.0}));
        assert!((item.price - 0.0).abs() < f64::EPSILON);
        assert!((item.line_total - 40.0).abs() < f64::EPSILON);
    }
}
