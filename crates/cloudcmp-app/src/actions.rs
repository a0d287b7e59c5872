//! Action handlers: UpdateAction dispatch and background task spawning

use std::process::Command;
use std::sync::Arc;

use tokio::sync::mpsc;

use cloudcmp_client::CatalogSource;
use cloudcmp_core::prelude::*;
use cloudcmp_core::FilterCriteria;

use crate::fetch::RequestId;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::theme::{ThemePreference, ThemeStore};

/// Collaborators the actions need, owned by the event loop
pub struct ActionContext<C, S: ThemeStore> {
    pub source: Arc<C>,
    pub theme: ThemePreference<S>,
    /// Browser command from settings; empty = platform opener
    pub browser: String,
}

impl<C, S: ThemeStore> ActionContext<C, S> {
    pub fn new(source: Arc<C>, theme: ThemePreference<S>, browser: impl Into<String>) -> Self {
        Self {
            source,
            theme,
            browser: browser.into(),
        }
    }
}

/// Execute an action, spawning a background task where it does I/O
pub fn handle_action<C, S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    ctx: &mut ActionContext<C, S>,
) where
    C: CatalogSource + Send + Sync + 'static,
    S: ThemeStore,
{
    match action {
        UpdateAction::FetchCatalog {
            request_id,
            criteria,
        } => {
            spawn_catalog_fetch(Arc::clone(&ctx.source), request_id, criteria, msg_tx);
        }

        UpdateAction::PersistTheme(mode) => {
            if let Err(e) = ctx.theme.set(mode) {
                warn!("Failed to persist theme preference: {}", e);
            }
        }

        UpdateAction::OpenUrl(url) => {
            info!("Opening {}", url);
            if let Err(e) = open_url_in_browser(&url, &ctx.browser) {
                warn!("Failed to open {}: {}", url, e);
                let _ = msg_tx.try_send(Message::ActionFailed {
                    message: format!("Could not open browser: {e}"),
                });
            }
        }
    }
}

/// Fetch the catalog and report the outcome tagged with `request_id`
pub fn spawn_catalog_fetch<C>(
    source: Arc<C>,
    request_id: RequestId,
    criteria: FilterCriteria,
    msg_tx: mpsc::Sender<Message>,
) where
    C: CatalogSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match source.list_services(&criteria).await {
            Ok(page) => Message::CatalogLoaded { request_id, page },
            Err(e) => {
                error!("Catalog fetch {} failed: {}", request_id, e);
                Message::CatalogFailed {
                    request_id,
                    message: e.user_message(),
                }
            }
        };
        if msg_tx.send(message).await.is_err() {
            debug!("Event loop gone before catalog fetch {} returned", request_id);
        }
    });
}

/// Open `url` with `browser`, or the platform default when empty
pub(crate) fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{page, FakeCatalog};
    use crate::theme::MemoryThemeStore;
    use cloudcmp_core::{Category, ThemeMode};

    fn context(catalog: FakeCatalog) -> ActionContext<FakeCatalog, MemoryThemeStore> {
        ActionContext::new(
            Arc::new(catalog),
            ThemePreference::load(MemoryThemeStore::default()),
            "",
        )
    }

    #[tokio::test]
    async fn test_fetch_success_sends_loaded() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut ctx = context(FakeCatalog::with_page(page(&["ec2", "s3"])));
        let mut seq = crate::fetch::RequestSequencer::default();
        let id = seq.issue();

        handle_action(
            UpdateAction::FetchCatalog {
                request_id: id,
                criteria: FilterCriteria::default(),
            },
            tx,
            &mut ctx,
        );

        match rx.recv().await {
            Some(Message::CatalogLoaded { request_id, page }) => {
                assert_eq!(request_id, id);
                assert_eq!(page.services.len(), 2);
            }
            other => panic!("expected CatalogLoaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_sends_generic_message() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut ctx = context(FakeCatalog::failing());
        let id = crate::fetch::RequestSequencer::default().issue();

        handle_action(
            UpdateAction::FetchCatalog {
                request_id: id,
                criteria: FilterCriteria::default(),
            },
            tx,
            &mut ctx,
        );

        match rx.recv().await {
            Some(Message::CatalogFailed { message, .. }) => {
                assert_eq!(message, cloudcmp_core::UNAVAILABLE_MESSAGE);
            }
            other => panic!("expected CatalogFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_passes_criteria_through() {
        let (tx, mut rx) = mpsc::channel(4);
        let catalog = FakeCatalog::with_page(page(&["ec2"]));
        let mut ctx = context(catalog);
        let criteria = FilterCriteria {
            category: Some(Category::Compute),
            ..Default::default()
        };

        handle_action(
            UpdateAction::FetchCatalog {
                request_id: crate::fetch::RequestSequencer::default().issue(),
                criteria: criteria.clone(),
            },
            tx,
            &mut ctx,
        );
        rx.recv().await.unwrap();

        assert_eq!(ctx.source.requests(), vec![criteria]);
    }

    #[test]
    fn test_persist_theme_writes_store() {
        let (tx, _rx) = mpsc::channel(1);
        let mut ctx = context(FakeCatalog::failing());

        handle_action(UpdateAction::PersistTheme(ThemeMode::Dark), tx, &mut ctx);

        assert_eq!(ctx.theme.mode(), ThemeMode::Dark);
        assert_eq!(ctx.theme.store().stored(), Some(true));
    }
}
