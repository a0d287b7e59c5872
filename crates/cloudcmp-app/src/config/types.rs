//! Configuration types for cloudcmp
//!
//! Defines:
//! - `Settings` - Contents of `config.toml`
//! - `ApiSettings`, `CatalogSettings`, `UiSettings` - its sections

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Origin used in development mode
pub const DEVELOPMENT_ORIGIN: &str = "http://localhost:8000";

/// Which backend origin to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default)]
    pub environment: Environment,

    /// Backend origin, required when `environment = "production"`
    #[serde(default)]
    pub origin: Option<String>,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            origin: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Apply only the response to the latest fetch
    #[serde(default = "default_true")]
    pub discard_stale_responses: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            discard_stale_responses: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Capture mouse clicks (overlay dismissal)
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Command used to open documentation links; empty = platform opener
    #[serde(default)]
    pub browser: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse: true,
            browser: String::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.environment, Environment::Development);
        assert_eq!(settings.api.timeout(), Duration::from_secs(10));
        assert!(settings.catalog.discard_stale_responses);
        assert!(settings.ui.mouse);
        assert!(settings.ui.browser.is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[api]
environment = "production"
origin = "https://catalog.example.com"

[ui]
mouse = false
"#,
        )
        .unwrap();

        assert_eq!(settings.api.environment, Environment::Production);
        assert_eq!(
            settings.api.origin.as_deref(),
            Some("https://catalog.example.com")
        );
        assert_eq!(settings.api.timeout_ms, 10_000);
        assert!(!settings.ui.mouse);
        assert!(settings.catalog.discard_stale_responses);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.api.environment, Environment::Development);
        assert!(settings.api.origin.is_none());
    }
}
