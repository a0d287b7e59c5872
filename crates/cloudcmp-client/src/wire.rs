//! Response payloads and query translation

use serde::{Deserialize, Serialize};

use cloudcmp_core::{Category, FilterCriteria, Service};

/// Body of `GET /api/services`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub services: Vec<Service>,
    pub total_count: usize,
    /// All categories known to the backend, not only those in `services`
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Body of `GET /api/compare`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub services: Vec<Service>,
    pub comparison_criteria: Vec<String>,
    pub comparison_count: usize,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub services_count: usize,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Body of `GET /api/categories`
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesBody {
    pub categories: Vec<Category>,
}

/// Translate criteria into query parameters.
///
/// Only keys that are set are emitted, so empty criteria yield no query string.
pub fn query_pairs(criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(3);
    if let Some(category) = criteria.category {
        pairs.push(("category", category.as_str().to_string()));
    }
    if let Some(free_tier) = criteria.free_tier {
        pairs.push(("free_tier", free_tier.to_string()));
    }
    if let Some(search) = &criteria.search {
        pairs.push(("search", search.clone()));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_emit_nothing() {
        assert!(query_pairs(&FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_set_keys_are_emitted() {
        let criteria = FilterCriteria {
            search: Some("queue".into()),
            category: Some(Category::Management),
            free_tier: Some(false),
        };
        assert_eq!(
            query_pairs(&criteria),
            vec![
                ("category", "Management & Governance".to_string()),
                ("free_tier", "false".to_string()),
                ("search", "queue".to_string()),
            ]
        );
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status":"healthy","services_count":18}"#).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.services_count, 18);
    }

    #[test]
    fn test_catalog_page_tolerates_missing_categories() {
        let page: CatalogPage =
            serde_json::from_str(r#"{"services":[],"total_count":0}"#).unwrap();
        assert!(page.categories.is_empty());
    }
}
