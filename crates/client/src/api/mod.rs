//! REST API client for the Mangust backend.
//!
//! # Architecture
//!
//! - One [`ApiClient`] per process, cheap to clone; endpoint wrappers live
//!   in per-entity `impl ApiClient` blocks (`products`, `categories`,
//!   `orders`, `users`, `wishlist`, `auth`)
//! - Raw bodies arrive as `serde_json::Value`; [`envelope`] classifies the
//!   response envelope and [`conversions`] turns raw records into
//!   `mangust-core` entities
//! - Normalization is total - malformed fields degrade to defaults. Only
//!   the transport boundary fails, and those failures surface verbatim as
//!   [`ApiError`]

mod auth;
mod categories;
mod client;
pub mod conversions;
pub mod envelope;
mod orders;
mod products;
mod users;
mod wishlist;

pub use auth::{Credentials, Registration};
pub use categories::{CreateCategory, UpdateCategory};
pub use client::ApiClient;
pub use orders::{CreateOrder, CreateOrderItem, OrderFilter};
pub use products::{AddReview, CreateProduct, UpdateProduct};
pub use users::UpdateProfile;

use thiserror::Error;

/// Errors that can occur when talking to the backend.
///
/// Shape problems in otherwise-successful responses are NOT errors - the
/// normalizer degrades them to defaults. Everything here is a transport or
/// protocol failure and propagates to the caller unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network, DNS, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-2xx status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON, or a login response was missing
    /// its token.
    #[error("Parse error: {0}")]
    Parse(String),
}
