//! Catalog access trait
//!
//! The app layer is generic over this trait so update/action tests can run
//! against an in-memory catalog.

use cloudcmp_core::{Category, FilterCriteria, Result, Service};

use crate::wire::{CatalogPage, Comparison, HealthStatus};

/// Read-only catalog operations
#[trait_variant::make(CatalogSource: Send)]
pub trait LocalCatalogSource {
    /// `GET /api/services` with the given filters
    async fn list_services(&self, criteria: &FilterCriteria) -> Result<CatalogPage>;

    /// `GET /api/services/{id}`; a missing id yields `Error::NotFound`
    async fn get_service(&self, id: &str) -> Result<Service>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn services_by_category(&self, category: Category) -> Result<Vec<Service>>;

    /// `GET /api/compare` for a comma-joined id list
    async fn compare(&self, ids: &[String]) -> Result<Comparison>;

    async fn health(&self) -> Result<HealthStatus>;
}
