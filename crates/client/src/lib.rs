//! Mangust REST client.
//!
//! Talks to the Mangust store's REST backend and reconciles its historically
//! inconsistent payload shapes into the canonical records defined in
//! `mangust-core`. The backend's list endpoints evolved through at least
//! three envelope conventions (`[...]`, `{items: [...]}`, `{data: [...]}`)
//! and two id spellings (`id` vs `_id`); everything above this crate sees
//! one stable model.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven client configuration
//! - [`session`] - The explicit, read-only authenticated-user snapshot
//! - [`api`] - Transport, envelope extraction, per-entity normalizers, and
//!   typed endpoint wrappers
//! - [`list`] - The list-fetch state machine with stale-response guarding
//!
//! # Example
//!
//! ```rust,ignore
//! use mangust_client::{api::ApiClient, config::ClientConfig};
//! use mangust_core::PageRequest;
//!
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//!
//! let page = client.list_products(None, PageRequest::new(1, 20)).await?;
//! for product in &page.items {
//!     println!("{} - {}", product.name, product.price);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod list;
pub mod session;

pub use api::{ApiClient, ApiError};
pub use config::{ClientConfig, ConfigError};
pub use list::{FetchSpec, ListEvent, ListState};
pub use session::{CurrentUser, Session};
