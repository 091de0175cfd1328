//! User and profile conversion functions.

use serde_json::Value;

use mangust_core::{User, UserSummary};

use super::{id_field, opt_string_field, string_field};

/// Convert an account record from the admin user list or the profile
/// endpoint. Several fields accumulated alternate spellings across backend
/// revisions (`username`, `photo`, `phoneNumber`, `location`); the current
/// names are authoritative when both appear.
pub fn convert_user(raw: &Value) -> User {
    User {
        id: id_field(raw),
        name: string_field(raw, &["name", "username"]),
        email: string_field(raw, &["email"]),
        role: string_field(raw, &["role"]).parse().unwrap_or_default(),
        phone: opt_string_field(raw, &["phone", "phoneNumber", "phone_number"]),
        address: opt_string_field(raw, &["address", "location"]),
        avatar: opt_string_field(raw, &["avatar", "photo", "image"]),
        bio: opt_string_field(raw, &["bio"]),
        created_at: opt_string_field(raw, &["createdAt", "created_at"]),
        updated_at: opt_string_field(raw, &["updatedAt", "updated_at"]),
    }
}

pub fn convert_user_summary(raw: &Value) -> UserSummary {
    UserSummary {
        id: id_field(raw),
        name: string_field(raw, &["name", "username"]),
        email: string_field(raw, &["email"]),
    }
}
