//! # cloudcmp-client - Service Catalog Client
//!
//! Typed access to the catalog backend's read-only HTTP endpoints.
//!
//! Depends on `cloudcmp-core` for domain types and errors.
//!
//! ## Public API
//!
//! - [`BaseUrl`] - Validated backend origin, fixed at startup
//! - [`CatalogClient`] - reqwest-backed implementation of [`CatalogSource`]
//! - [`CatalogSource`] - The six catalog operations as an async trait
//! - [`CatalogPage`], [`Comparison`], [`HealthStatus`] - Response payloads
//!
//! Every call issues exactly one request. Nothing is cached or retried.

pub mod base_url;
pub mod client;
pub mod source;
pub mod wire;

pub use base_url::BaseUrl;
pub use client::{CatalogClient, DEFAULT_TIMEOUT};
pub use source::{CatalogSource, LocalCatalogSource};
pub use wire::{query_pairs, CatalogPage, Comparison, HealthStatus};
