//! Configuration loading

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, resolve_base_url};
pub use types::{
    ApiSettings, CatalogSettings, Environment, Settings, UiSettings, DEVELOPMENT_ORIGIN,
};
