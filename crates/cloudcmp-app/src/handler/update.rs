//! Main update function - handles state transitions (TEA pattern)

use cloudcmp_core::prelude::*;
use cloudcmp_core::FilterPatch;

use crate::message::Message;
use crate::selection::Toggled;
use crate::state::{AppState, UiMode};

use super::{catalog, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            state.notice = None;
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Click { inside_overlay } => handle_click(state, inside_overlay),

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Filter Messages
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            if state.ui_mode == UiMode::Browse {
                state.ui_mode = UiMode::SearchInput;
            }
            UpdateResult::none()
        }

        Message::EndSearch => {
            if state.ui_mode == UiMode::SearchInput {
                state.ui_mode = UiMode::Browse;
            }
            UpdateResult::none()
        }

        Message::SearchInput { text } => {
            catalog::handle_filter_patch(state, FilterPatch::search(text))
        }

        Message::CycleCategory => catalog::handle_cycle_category(state),
        Message::CycleFreeTier => catalog::handle_cycle_free_tier(state),
        Message::ClearFilters => catalog::handle_clear_filters(state),

        // ─────────────────────────────────────────────────────────
        // Catalog Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadCatalog => {
            let request = state.filter.request();
            catalog::issue_fetch(state, request)
        }

        Message::CatalogLoaded { request_id, page } => {
            catalog::handle_catalog_loaded(state, request_id, page)
        }

        Message::CatalogFailed {
            request_id,
            message,
        } => catalog::handle_catalog_failed(state, request_id, message),

        // ─────────────────────────────────────────────────────────
        // Grid / Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::NavigateGrid(nav) => {
            state.grid.navigate(nav, state.catalog.services.len());
            UpdateResult::none()
        }

        Message::ToggleSelection { id } => handle_toggle_selection(state, &id),

        Message::RemoveFromComparison { id } => {
            if state.selection.remove(&id) {
                debug!("Removed {} from comparison", id);
            }
            UpdateResult::none()
        }

        Message::ClearSelection => {
            state.selection.clear();
            UpdateResult::none()
        }

        Message::ToggleComparison => {
            state.show_comparison = !state.show_comparison;
            UpdateResult::none()
        }

        Message::ScrollComparison(delta) => {
            state.comparison_offset = if delta < 0 {
                state
                    .comparison_offset
                    .saturating_sub(usize::from(delta.unsigned_abs()))
            } else {
                state.comparison_offset.saturating_add(delta as usize)
            };
            UpdateResult::none()
        }

        Message::DismissCapacityWarning => {
            if state.ui_mode == UiMode::CapacityWarning {
                state.ui_mode = UiMode::Browse;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Theme Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            UpdateResult::action(UpdateAction::PersistTheme(state.theme))
        }

        // ─────────────────────────────────────────────────────────
        // Detail Overlay Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenDetails { id } => {
            if let Some(service) = state.catalog.find(&id).cloned() {
                state.ui_mode = UiMode::Details(Box::new(service));
                state.detail_scroll = 0;
            }
            UpdateResult::none()
        }

        Message::CloseDetails => {
            if matches!(state.ui_mode, UiMode::Details(_)) {
                state.ui_mode = UiMode::Browse;
            }
            UpdateResult::none()
        }

        Message::ScrollDetails(delta) => {
            state.detail_scroll = if delta < 0 {
                state.detail_scroll.saturating_sub(delta.unsigned_abs())
            } else {
                state.detail_scroll.saturating_add(delta as u16)
            };
            UpdateResult::none()
        }

        Message::OpenDocumentation { url } => {
            if url.trim().is_empty() {
                state.notice = Some("No documentation link".to_string());
                UpdateResult::none()
            } else {
                UpdateResult::action(UpdateAction::OpenUrl(url))
            }
        }

        Message::ActionFailed { message } => {
            state.notice = Some(message);
            UpdateResult::none()
        }
    }
}

/// Clicks inside the overlay are consumed; clicks outside close it
fn handle_click(state: &mut AppState, inside_overlay: bool) -> UpdateResult {
    match state.ui_mode {
        UiMode::Details(_) if inside_overlay => UpdateResult::none(),
        UiMode::Details(_) => UpdateResult::message(Message::CloseDetails),
        UiMode::CapacityWarning => UpdateResult::message(Message::DismissCapacityWarning),
        _ => UpdateResult::none(),
    }
}

fn handle_toggle_selection(state: &mut AppState, id: &str) -> UpdateResult {
    match state.selection.toggle(id, &state.catalog.services) {
        Ok(Toggled::Added) => debug!("Selected {} ({} total)", id, state.selection.len()),
        Ok(Toggled::Removed) => debug!("Deselected {} ({} total)", id, state.selection.len()),
        Ok(Toggled::Unknown) => debug!("Ignoring toggle for unknown service {}", id),
        Err(Error::CapacityExceeded { capacity }) => {
            info!("Selection full ({}), rejecting {}", capacity, id);
            state.ui_mode = UiMode::CapacityWarning;
        }
        Err(e) => state.notice = Some(e.user_message()),
    }
    UpdateResult::none()
}
