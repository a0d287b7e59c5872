//! Comparison selection set
//!
//! Holds full service records in the order they were selected. The set is
//! independent of the displayed catalog and is not reconciled when the
//! catalog is refetched.

use cloudcmp_core::prelude::*;
use cloudcmp_core::Service;

/// Maximum number of services that can be compared at once
pub const MAX_SELECTION: usize = 5;

/// Outcome of a successful [`SelectionSet::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
    /// Id is neither selected nor in the displayed list; nothing changed
    Unknown,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    services: Vec<Service>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove `id`.
    ///
    /// Ids already selected are removed even when they are no longer in
    /// `displayed`. New ids are looked up in `displayed`. Selecting beyond
    /// [`MAX_SELECTION`] fails with `CapacityExceeded` and leaves the set as is.
    pub fn toggle(&mut self, id: &str, displayed: &[Service]) -> Result<Toggled> {
        if self.remove(id) {
            return Ok(Toggled::Removed);
        }

        let Some(service) = displayed.iter().find(|s| s.id == id) else {
            return Ok(Toggled::Unknown);
        };

        if self.services.len() >= MAX_SELECTION {
            return Err(Error::CapacityExceeded {
                capacity: MAX_SELECTION,
            });
        }

        self.services.push(service.clone());
        Ok(Toggled::Added)
    }

    /// Remove `id` if present, keeping the order of the rest
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.services.len();
        self.services.retain(|s| s.id != id);
        self.services.len() != before
    }

    pub fn clear(&mut self) {
        self.services.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.services.iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.services.len() >= MAX_SELECTION
    }

    /// Services in selection order
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    pub fn as_slice(&self) -> &[Service] {
        &self.services
    }

    /// Service at a zero-based comparison column
    pub fn get(&self, index: usize) -> Option<&Service> {
        self.services.get(index)
    }

    pub fn ids(&self) -> Vec<String> {
        self.services.iter().map(|s| s.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudcmp_core::{Category, DEFAULT_REGION_AVAILABILITY};

    fn service(id: &str) -> Service {
        Service {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            category: Category::Compute,
            key_features: vec![],
            pricing_notes: String::new(),
            pricing_models: vec![],
            use_cases: vec![],
            limitations: vec![],
            free_tier_available: false,
            region_availability: DEFAULT_REGION_AVAILABILITY.to_string(),
            documentation_url: None,
        }
    }

    fn catalog(ids: &[&str]) -> Vec<Service> {
        ids.iter().map(|id| service(id)).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let displayed = catalog(&["a", "b"]);
        let mut set = SelectionSet::new();

        assert_eq!(set.toggle("a", &displayed).unwrap(), Toggled::Added);
        assert!(set.contains("a"));
        assert_eq!(set.toggle("a", &displayed).unwrap(), Toggled::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_selection_order_is_preserved() {
        let displayed = catalog(&["a", "b", "c"]);
        let mut set = SelectionSet::new();
        set.toggle("c", &displayed).unwrap();
        set.toggle("a", &displayed).unwrap();
        set.toggle("b", &displayed).unwrap();
        set.remove("a");
        assert_eq!(set.ids(), vec!["c", "b"]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let displayed = catalog(&["a"]);
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle("zzz", &displayed).unwrap(), Toggled::Unknown);
        assert!(set.is_empty());
    }

    #[test]
    fn test_sixth_selection_is_rejected() {
        let displayed = catalog(&["a", "b", "c", "d", "e", "f"]);
        let mut set = SelectionSet::new();
        for id in ["a", "b", "c", "d", "e"] {
            set.toggle(id, &displayed).unwrap();
        }
        assert!(set.is_full());

        let err = set.toggle("f", &displayed).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { capacity: 5 }));
        assert_eq!(set.len(), 5);
        assert!(!set.contains("f"));
    }

    #[test]
    fn test_full_set_still_allows_removal() {
        let displayed = catalog(&["a", "b", "c", "d", "e"]);
        let mut set = SelectionSet::new();
        for id in ["a", "b", "c", "d", "e"] {
            set.toggle(id, &displayed).unwrap();
        }
        assert_eq!(set.toggle("c", &displayed).unwrap(), Toggled::Removed);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_selected_service_removable_after_leaving_catalog() {
        let mut set = SelectionSet::new();
        set.toggle("a", &catalog(&["a", "b"])).unwrap();

        // Catalog refetched with a filter that excludes "a"
        let filtered = catalog(&["b"]);
        assert!(set.contains("a"));
        assert_eq!(set.toggle("a", &filtered).unwrap(), Toggled::Removed);
    }

    #[test]
    fn test_clear() {
        let displayed = catalog(&["a", "b"]);
        let mut set = SelectionSet::new();
        set.toggle("a", &displayed).unwrap();
        set.toggle("b", &displayed).unwrap();
        set.clear();
        assert_eq!(set.len(), 0);
        assert_eq!(set.get(0), None);
    }
}
