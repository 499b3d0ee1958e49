//! High-level AliExpress SDK: the `AliexpressApi` facade with default
//! filling, input validation, product-id extraction and a category cache.
//!
//! Wraps the `aliexpress_api` client crate. Empty search and list results
//! surface here as "not found" errors.

pub mod api;
pub mod cache;
pub mod categories;
pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod validation;

pub use aliexpress_api;
pub use aliexpress_api::request;
pub use aliexpress_api::types;
pub use aliexpress_api::{Currency, Language, LinkType, OneOrMany, OrderStatus, ProductType, SortBy};

pub use api::AliexpressApi;
pub use config::ApiConfig;
pub use error::AliexpressError;
