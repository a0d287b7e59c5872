//! Settings loading and base URL resolution

use std::path::{Path, PathBuf};

use cloudcmp_client::BaseUrl;
use cloudcmp_core::prelude::*;

use super::types::{Environment, Settings, DEVELOPMENT_ORIGIN};

const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/cloudcmp/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cloudcmp").join(CONFIG_FILENAME))
}

/// Load settings from `path`, or the default location when `None`.
///
/// A missing file yields defaults. An unreadable or unparsable file is logged
/// and also yields defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory available, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Resolve the backend origin once at startup.
///
/// Precedence: explicit override, then the production origin, then the
/// development origin.
pub fn resolve_base_url(settings: &Settings, override_url: Option<&str>) -> Result<BaseUrl> {
    if let Some(url) = override_url {
        info!("Using API URL from command line: {}", url);
        return BaseUrl::parse(url);
    }

    match settings.api.environment {
        Environment::Production => {
            let origin = settings
                .api
                .origin
                .as_deref()
                .filter(|o| !o.trim().is_empty())
                .ok_or_else(|| {
                    Error::config_invalid("api.origin is required when environment = \"production\"")
                })?;
            BaseUrl::parse(origin)
        }
        Environment::Development => BaseUrl::parse(DEVELOPMENT_ORIGIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("config.toml")));
        assert_eq!(settings.api.environment, Environment::Development);
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[api]\ntimeout_ms = 2500\n\n[catalog]\ndiscard_stale_responses = false\n",
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.api.timeout_ms, 2500);
        assert!(!settings.catalog.discard_stale_responses);
    }

    #[test]
    fn test_load_invalid_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is [not valid toml").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.api.timeout_ms, 10_000);
    }

    #[test]
    fn test_resolve_development_default() {
        let base = resolve_base_url(&Settings::default(), None).unwrap();
        assert_eq!(base.as_str(), "http://localhost:8000");
    }

    #[test]
    fn test_resolve_production_origin() {
        let mut settings = Settings::default();
        settings.api.environment = Environment::Production;
        settings.api.origin = Some("https://catalog.example.com/".into());

        let base = resolve_base_url(&settings, None).unwrap();
        assert_eq!(base.as_str(), "https://catalog.example.com");
    }

    #[test]
    fn test_resolve_production_without_origin_is_fatal() {
        let mut settings = Settings::default();
        settings.api.environment = Environment::Production;

        let err = resolve_base_url(&settings, None).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_override_wins() {
        let mut settings = Settings::default();
        settings.api.environment = Environment::Production;
        settings.api.origin = Some("https://catalog.example.com".into());

        let base = resolve_base_url(&settings, Some("http://127.0.0.1:9000")).unwrap();
        assert_eq!(base.as_str(), "http://127.0.0.1:9000");
    }
}
