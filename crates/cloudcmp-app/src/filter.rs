//! Filter state controller

use cloudcmp_core::{Category, FilterCriteria, FilterPatch, FreeTierChoice};

/// One catalog fetch to schedule, carrying the criteria it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub criteria: FilterCriteria,
}

/// Owns the current [`FilterCriteria`].
///
/// Every mutation returns exactly one [`FetchRequest`].
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    criteria: FilterCriteria,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Shallow-merge `patch` into the current criteria
    pub fn update(&mut self, patch: FilterPatch) -> FetchRequest {
        self.criteria.merge(patch);
        self.request()
    }

    /// Reset to no constraints
    pub fn clear(&mut self) -> FetchRequest {
        self.criteria = FilterCriteria::default();
        self.request()
    }

    /// Fetch for the current criteria without changing them (initial load, retry)
    pub fn request(&self) -> FetchRequest {
        FetchRequest {
            criteria: self.criteria.clone(),
        }
    }

    /// Search text currently applied, empty when unset
    pub fn search_text(&self) -> &str {
        self.criteria.search.as_deref().unwrap_or("")
    }

    pub fn free_tier_choice(&self) -> FreeTierChoice {
        FreeTierChoice::from_filter(self.criteria.free_tier)
    }

    /// Category after the current one: All, then each of `categories`, then All
    pub fn next_category(&self, categories: &[Category]) -> Option<Category> {
        match self.criteria.category {
            None => categories.first().copied(),
            Some(current) => categories
                .iter()
                .position(|c| *c == current)
                .and_then(|i| categories.get(i + 1))
                .copied(),
        }
    }

    /// Free-tier filter after the current one: All, true, false, All
    pub fn next_free_tier(&self) -> Option<bool> {
        self.free_tier_choice().cycle().as_filter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_merges_and_returns_request() {
        let mut filter = FilterController::new();
        let req = filter.update(FilterPatch::category(Some(Category::Storage)));
        assert_eq!(req.criteria.category, Some(Category::Storage));

        let req = filter.update(FilterPatch::search("s3"));
        assert_eq!(req.criteria.category, Some(Category::Storage));
        assert_eq!(req.criteria.search.as_deref(), Some("s3"));
        assert_eq!(filter.criteria(), &req.criteria);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut filter = FilterController::new();
        filter.update(FilterPatch::free_tier(Some(true)));
        filter.update(FilterPatch::search("db"));

        let req = filter.clear();
        assert!(req.criteria.is_empty());
        assert!(filter.criteria().is_empty());
        assert_eq!(filter.search_text(), "");
    }

    #[test]
    fn test_next_category_cycles_through_all() {
        let categories = [Category::Compute, Category::Storage];
        let mut filter = FilterController::new();

        let next = filter.next_category(&categories);
        assert_eq!(next, Some(Category::Compute));
        filter.update(FilterPatch::category(next));

        let next = filter.next_category(&categories);
        assert_eq!(next, Some(Category::Storage));
        filter.update(FilterPatch::category(next));

        assert_eq!(filter.next_category(&categories), None);
    }

    #[test]
    fn test_next_category_with_no_categories() {
        let filter = FilterController::new();
        assert_eq!(filter.next_category(&[]), None);
    }

    #[test]
    fn test_next_category_unknown_current_returns_to_all() {
        let mut filter = FilterController::new();
        filter.update(FilterPatch::category(Some(Category::Security)));
        assert_eq!(filter.next_category(&[Category::Compute]), None);
    }

    #[test]
    fn test_next_free_tier_cycle() {
        let mut filter = FilterController::new();
        assert_eq!(filter.next_free_tier(), Some(true));
        filter.update(FilterPatch::free_tier(Some(true)));
        assert_eq!(filter.next_free_tier(), Some(false));
        filter.update(FilterPatch::free_tier(Some(false)));
        assert_eq!(filter.next_free_tier(), None);
    }
}
