//! # cloudcmp-core - Core Domain Types
//!
//! Foundation crate for cloudcmp. Provides the catalog domain types, error
//! handling, and logging setup shared by every other crate.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Service`] - A single cataloged offering (immutable, sourced from the backend)
//! - [`Category`] - The fixed set of twelve service categories
//! - [`PricingModel`] - The fixed set of pricing models
//! - [`FilterCriteria`], [`FilterPatch`], [`Patch`] - Catalog filter state and partial updates
//! - [`ThemeMode`] - Light/dark display mode
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cloudcmp_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all cloudcmp crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt, UNAVAILABLE_MESSAGE};
pub use types::{
    Category, FilterCriteria, FilterPatch, FreeTierChoice, Patch, PricingModel, Service,
    ThemeMode, DEFAULT_REGION_AVAILABILITY,
};
