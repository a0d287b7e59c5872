//! cloudcmp - Browse and compare AWS services from the terminal
//!
//! Wires configuration, the catalog client and either the interactive
//! browser or a headless JSON command together.

pub mod cli;
pub mod commands;

use std::io;
use std::sync::Arc;

use cloudcmp_app::config::{default_config_path, load_settings, resolve_base_url, Settings};
use cloudcmp_app::{FileThemeStore, MemoryThemeStore, ThemePreference, ThemeStore};
use cloudcmp_client::CatalogClient;
use cloudcmp_core::prelude::*;

use crate::cli::Cli;

/// Main application entry point
pub async fn run(cli: Cli) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; stdout belongs to the TUI or the JSON output
    cloudcmp_core::logging::init()?;

    let config_path = cli.config.clone().or_else(default_config_path);
    let settings = load_settings(config_path.as_deref());
    let base_url = resolve_base_url(&settings, cli.api_url.as_deref())?;
    info!("Catalog backend: {}", base_url);

    let client = CatalogClient::new(base_url, settings.api.timeout())?;

    let result = match &cli.command {
        Some(command) => commands::execute(&client, command, &mut io::stdout()).await,
        None => run_tui(settings, client).await,
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("cloudcmp exiting");
    result
}

async fn run_tui(settings: Settings, client: CatalogClient) -> Result<()> {
    let store: Box<dyn ThemeStore> = match FileThemeStore::default_path() {
        Some(path) => {
            debug!("Theme preference file: {}", path.display());
            Box::new(FileThemeStore::new(path))
        }
        None => {
            warn!("No data directory available, theme choice will not persist");
            Box::new(MemoryThemeStore::default())
        }
    };

    let theme = ThemePreference::load(store);
    cloudcmp_tui::run(settings, Arc::new(client), theme).await
}
