//! Mangust Core - Shared types library.
//!
//! This crate provides common types used across all Mangust client components:
//! - `client` - REST API client with response normalization
//! - `cli` - Command-line console for store management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere, including the pure
//! pagination state machine that UI shells drive directly.
//!
//! # Modules
//!
//! - [`types`] - Canonical entity records (products, categories, orders,
//!   users, wishlist) as produced by the client's response normalizer
//! - [`pagination`] - The offset/limit page contract and the pager
//!   navigation state machine shared by every list view

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pagination;
pub mod types;

pub use pagination::*;
pub use types::*;
