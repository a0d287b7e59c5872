//! Message processing
//!
//! Runs a message through the TEA update loop, following up on chained
//! messages and dispatching any resulting actions.

use tokio::sync::mpsc;

use cloudcmp_client::CatalogSource;

use crate::actions::{handle_action, ActionContext};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::ThemeStore;

/// Process a message through the TEA update function
pub fn process_message<C, S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    ctx: &mut ActionContext<C, S>,
) where
    C: CatalogSource + Send + Sync + 'static,
    S: ThemeStore,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), ctx);
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::input_key::InputKey;
    use crate::test_utils::{page, FakeCatalog};
    use crate::theme::{MemoryThemeStore, ThemePreference};
    use cloudcmp_core::ThemeMode;

    #[tokio::test]
    async fn test_startup_fetch_round_trip() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut ctx = ActionContext::new(
            Arc::new(FakeCatalog::with_page(page(&["a", "b", "c"]))),
            ThemePreference::load(MemoryThemeStore::default()),
            "",
        );
        let mut state = AppState::new();

        process_message(&mut state, Message::LoadCatalog, &tx, &mut ctx);
        let reply = rx.recv().await.unwrap();
        process_message(&mut state, reply, &tx, &mut ctx);

        assert!(state.catalog.loaded_once);
        assert_eq!(state.catalog.services.len(), 3);
    }

    #[test]
    fn test_key_chain_toggles_and_persists_theme() {
        let (tx, _rx) = mpsc::channel(8);
        let mut ctx = ActionContext::new(
            Arc::new(FakeCatalog::failing()),
            ThemePreference::load(MemoryThemeStore::default()),
            "",
        );
        let mut state = AppState::new();

        process_message(&mut state, Message::Key(InputKey::Char('t')), &tx, &mut ctx);

        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(ctx.theme.store().stored(), Some(true));
    }
}
