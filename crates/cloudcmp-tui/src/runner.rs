//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use cloudcmp_app::actions::ActionContext;
use cloudcmp_app::config::Settings;
use cloudcmp_app::message::Message;
use cloudcmp_app::process::process_message;
use cloudcmp_app::signals;
use cloudcmp_app::state::AppState;
use cloudcmp_app::theme::{ThemePreference, ThemeStore};
use cloudcmp_client::CatalogSource;
use cloudcmp_core::prelude::*;
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the catalog browser until the user quits
pub async fn run<C, S>(settings: Settings, source: Arc<C>, theme: ThemePreference<S>) -> Result<()>
where
    C: CatalogSource + Send + Sync + 'static,
    S: ThemeStore,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mouse = settings.ui.mouse;
    if mouse {
        if let Err(e) = terminal::enable_mouse() {
            warn!("Mouse support unavailable: {}", e);
        }
    }

    let mut state = AppState::with_settings(&settings, theme.mode());
    info!("Starting with {} theme", state.theme.display_name());

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let mut ctx = ActionContext::new(source, theme, settings.ui.browser.clone());

    // Initial fetch with empty criteria
    process_message(&mut state, Message::LoadCatalog, &msg_tx, &mut ctx);

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &mut ctx);

    if mouse {
        terminal::disable_mouse();
    }
    ratatui::restore();

    result
}

/// Main event loop: drain background messages, draw, poll input
fn run_loop<C, S>(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    ctx: &mut ActionContext<C, S>,
) -> Result<()>
where
    C: CatalogSource + Send + Sync + 'static,
    S: ThemeStore,
{
    while !state.should_quit() {
        // Fetch results, signals and action failures
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, ctx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        let size = terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);
        if let Some(message) = event::poll(screen)? {
            process_message(state, message, msg_tx, ctx);
        }
    }

    info!("Quit requested");
    Ok(())
}
