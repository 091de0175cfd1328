//! Category conversion functions.

use serde_json::Value;

use mangust_core::{Category, CategorySummary};

use super::{id_field, opt_string_field, string_field};

pub fn convert_category(raw: &Value) -> Category {
    Category {
        id: id_field(raw),
        name: string_field(raw, &["name"]),
        description: string_field(raw, &["description"]),
        image_url: opt_string_field(raw, &["imageUrl", "image_url"]),
        created_at: string_field(raw, &["createdAt", "created_at"]),
        updated_at: string_field(raw, &["updatedAt", "updated_at"]),
    }
}

pub fn convert_category_summary(raw: &Value) -> CategorySummary {
    CategorySummary {
        id: id_field(raw),
        name: string_field(raw, &["name"]),
        image_url: opt_string_field(raw, &["imageUrl", "image_url"]),
    }
}
