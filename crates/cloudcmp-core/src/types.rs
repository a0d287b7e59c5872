//! Core domain type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Region text the backend reports when a service does not specify one
pub const DEFAULT_REGION_AVAILABILITY: &str = "Most AWS regions";

/// Fixed enumeration of service categories
///
/// Serialized with the exact display strings used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Compute")]
    Compute,
    #[serde(rename = "Storage")]
    Storage,
    #[serde(rename = "Database")]
    Database,
    #[serde(rename = "Networking")]
    Networking,
    #[serde(rename = "Security")]
    Security,
    #[serde(rename = "Analytics")]
    Analytics,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Containers")]
    Containers,
    #[serde(rename = "Serverless")]
    Serverless,
    #[serde(rename = "Developer Tools")]
    DeveloperTools,
    #[serde(rename = "Management & Governance")]
    Management,
    #[serde(rename = "Internet of Things")]
    InternetOfThings,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 12] = [
        Category::Compute,
        Category::Storage,
        Category::Database,
        Category::Networking,
        Category::Security,
        Category::Analytics,
        Category::MachineLearning,
        Category::Containers,
        Category::Serverless,
        Category::DeveloperTools,
        Category::Management,
        Category::InternetOfThings,
    ];

    /// Display string, identical to the wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Compute => "Compute",
            Category::Storage => "Storage",
            Category::Database => "Database",
            Category::Networking => "Networking",
            Category::Security => "Security",
            Category::Analytics => "Analytics",
            Category::MachineLearning => "Machine Learning",
            Category::Containers => "Containers",
            Category::Serverless => "Serverless",
            Category::DeveloperTools => "Developer Tools",
            Category::Management => "Management & Governance",
            Category::InternetOfThings => "Internet of Things",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::invalid_category(s))
    }
}

/// Fixed enumeration of pricing models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingModel {
    #[serde(rename = "On-Demand")]
    OnDemand,
    #[serde(rename = "Reserved Instances")]
    Reserved,
    #[serde(rename = "Spot Pricing")]
    Spot,
    #[serde(rename = "Free Tier")]
    FreeTier,
    #[serde(rename = "Pay-per-use")]
    PayPerUse,
}

impl PricingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::OnDemand => "On-Demand",
            PricingModel::Reserved => "Reserved Instances",
            PricingModel::Spot => "Spot Pricing",
            PricingModel::FreeTier => "Free Tier",
            PricingModel::PayPerUse => "Pay-per-use",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cataloged offering
///
/// Sourced entirely from the backend and never mutated by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Display order is significant
    pub key_features: Vec<String>,
    pub pricing_notes: String,
    pub pricing_models: Vec<PricingModel>,
    pub use_cases: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub limitations: Vec<String>,
    #[serde(default)]
    pub free_tier_available: bool,
    #[serde(default = "default_region_availability")]
    pub region_availability: String,
    /// `None` means there is no link, which is distinct from an empty string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
}

impl Service {
    /// The documentation link, unless it is absent or blank
    pub fn documentation_link(&self) -> Option<&str> {
        self.documentation_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

fn default_region_availability() -> String {
    DEFAULT_REGION_AVAILABILITY.to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter criteria
// ─────────────────────────────────────────────────────────────────────────────

/// Active search/category/free-tier constraints for the catalog listing
///
/// Every `None` field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_tier: Option<bool>,
}

impl FilterCriteria {
    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none() && self.free_tier.is_none()
    }

    /// Shallow-merge a patch into these criteria.
    ///
    /// `Keep` leaves a key unchanged, `Clear` removes it, `Set` replaces it.
    pub fn merge(&mut self, patch: FilterPatch) {
        patch.search.apply(&mut self.search);
        patch.category.apply(&mut self.category);
        patch.free_tier.apply(&mut self.free_tier);
    }

    /// Copy of these criteria with `patch` merged in
    pub fn merged(&self, patch: FilterPatch) -> Self {
        let mut next = self.clone();
        next.merge(patch);
        next
    }
}

/// Update for a single criteria key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key absent from the update
    #[default]
    Keep,
    /// Key explicitly set to "undefined"
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    /// `Some(v)` becomes `Set(v)`, `None` becomes `Clear`
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Set(v),
            None => Patch::Clear,
        }
    }

    pub fn apply(self, slot: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Clear => *slot = None,
            Patch::Set(v) => *slot = Some(v),
        }
    }
}

/// Partial update for [`FilterCriteria`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search: Patch<String>,
    pub category: Patch<Category>,
    pub free_tier: Patch<bool>,
}

impl FilterPatch {
    /// Patch that only touches the search text.
    ///
    /// Empty text clears the key, matching an empty search box.
    pub fn search(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            search: if text.is_empty() {
                Patch::Clear
            } else {
                Patch::Set(text)
            },
            ..Self::default()
        }
    }

    pub fn category(category: Option<Category>) -> Self {
        Self {
            category: Patch::from_option(category),
            ..Self::default()
        }
    }

    pub fn free_tier(free_tier: Option<bool>) -> Self {
        Self {
            free_tier: Patch::from_option(free_tier),
            ..Self::default()
        }
    }
}

/// The three free-tier filter choices offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FreeTierChoice {
    #[default]
    All,
    Available,
    NotAvailable,
}

impl FreeTierChoice {
    pub fn from_filter(value: Option<bool>) -> Self {
        match value {
            None => FreeTierChoice::All,
            Some(true) => FreeTierChoice::Available,
            Some(false) => FreeTierChoice::NotAvailable,
        }
    }

    pub fn as_filter(self) -> Option<bool> {
        match self {
            FreeTierChoice::All => None,
            FreeTierChoice::Available => Some(true),
            FreeTierChoice::NotAvailable => Some(false),
        }
    }

    /// Cycle to the next choice (wraps around)
    pub fn cycle(self) -> Self {
        match self {
            FreeTierChoice::All => FreeTierChoice::Available,
            FreeTierChoice::Available => FreeTierChoice::NotAvailable,
            FreeTierChoice::NotAvailable => FreeTierChoice::All,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FreeTierChoice::All => "All Services",
            FreeTierChoice::Available => "Free Tier Available",
            FreeTierChoice::NotAvailable => "No Free Tier",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Two-valued display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}
