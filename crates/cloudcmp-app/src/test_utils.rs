//! Test helpers: in-memory catalog and service builders

use std::sync::Mutex;

use cloudcmp_client::{CatalogPage, CatalogSource, Comparison, HealthStatus};
use cloudcmp_core::prelude::*;
use cloudcmp_core::{Category, FilterCriteria, PricingModel, Service, DEFAULT_REGION_AVAILABILITY};

pub fn service(id: &str) -> Service {
    Service {
        id: id.to_string(),
        name: format!("Service {id}"),
        description: format!("{id} description"),
        category: Category::Compute,
        key_features: vec!["Fast".into(), "Cheap".into()],
        pricing_notes: "Pay as you go.".into(),
        pricing_models: vec![PricingModel::OnDemand],
        use_cases: vec!["Testing".into()],
        limitations: vec![],
        free_tier_available: true,
        region_availability: DEFAULT_REGION_AVAILABILITY.to_string(),
        documentation_url: Some(format!("https://docs.example.com/{id}")),
    }
}

pub fn page(ids: &[&str]) -> CatalogPage {
    let services: Vec<Service> = ids.iter().map(|id| service(id)).collect();
    CatalogPage {
        total_count: services.len(),
        services,
        categories: vec![Category::Compute, Category::Storage],
    }
}

/// Catalog that returns a fixed page (or always fails) and records requests
#[derive(Debug, Default)]
pub struct FakeCatalog {
    page: Option<CatalogPage>,
    requests: Mutex<Vec<FilterCriteria>>,
}

impl FakeCatalog {
    pub fn with_page(page: CatalogPage) -> Self {
        Self {
            page: Some(page),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<FilterCriteria> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn page(&self) -> Result<CatalogPage> {
        self.page
            .clone()
            .ok_or_else(|| Error::unavailable("connection refused"))
    }
}

impl CatalogSource for FakeCatalog {
    async fn list_services(&self, criteria: &FilterCriteria) -> Result<CatalogPage> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(criteria.clone());
        self.page()
    }

    async fn get_service(&self, id: &str) -> Result<Service> {
        self.page()?
            .services
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::not_found(id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.page()?.categories)
    }

    async fn services_by_category(&self, category: Category) -> Result<Vec<Service>> {
        Ok(self
            .page()?
            .services
            .into_iter()
            .filter(|s| s.category == category)
            .collect())
    }

    async fn compare(&self, ids: &[String]) -> Result<Comparison> {
        let services: Vec<Service> = self
            .page()?
            .services
            .into_iter()
            .filter(|s| ids.contains(&s.id))
            .collect();
        Ok(Comparison {
            comparison_count: services.len(),
            services,
            comparison_criteria: vec!["Category".into()],
        })
    }

    async fn health(&self) -> Result<HealthStatus> {
        let page = self.page()?;
        Ok(HealthStatus {
            status: "healthy".into(),
            services_count: page.total_count,
        })
    }
}
