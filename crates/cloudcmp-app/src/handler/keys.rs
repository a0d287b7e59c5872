//! Key event handlers for different UI modes

use crate::grid::GridNav;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, CatalogStatus, UiMode};

/// Lines moved by PageUp/PageDown in the detail overlay
const DETAIL_PAGE: i16 = 10;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.ui_mode == UiMode::CapacityWarning {
        // Blocking notice: the key only dismisses it
        return Some(Message::DismissCapacityWarning);
    }

    if matches!(state.catalog.status, CatalogStatus::Failed(_)) {
        return handle_key_error(key);
    }

    if !state.catalog.loaded_once {
        return handle_key_loading(key);
    }

    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Details(_) => handle_key_details(state, key),
        UiMode::CapacityWarning => None,
    }
}

/// Handle key events before the first catalog arrives
fn handle_key_loading(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        _ => None,
    }
}

/// Handle key events on the error screen
fn handle_key_error(key: InputKey) -> Option<Message> {
    match key {
        // Retry
        InputKey::Char('r') | InputKey::Enter => Some(Message::LoadCatalog),
        InputKey::Char('x') => Some(Message::ClearFilters),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the card grid
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    let focused = state.focused_service();

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc if state.show_comparison => Some(Message::ToggleComparison),

        // Filters
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('c') => Some(Message::CycleCategory),
        InputKey::Char('f') => Some(Message::CycleFreeTier),
        InputKey::Char('x') => Some(Message::ClearFilters),
        InputKey::Char('r') => Some(Message::LoadCatalog),

        // Navigation
        InputKey::Left | InputKey::Char('h') => Some(Message::NavigateGrid(GridNav::Left)),
        InputKey::Right | InputKey::Char('l') => Some(Message::NavigateGrid(GridNav::Right)),
        InputKey::Up | InputKey::Char('k') => Some(Message::NavigateGrid(GridNav::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::NavigateGrid(GridNav::Down)),
        InputKey::PageUp => Some(Message::NavigateGrid(GridNav::PageUp)),
        InputKey::PageDown => Some(Message::NavigateGrid(GridNav::PageDown)),
        InputKey::Home | InputKey::Char('g') => Some(Message::NavigateGrid(GridNav::Home)),
        InputKey::End | InputKey::Char('G') => Some(Message::NavigateGrid(GridNav::End)),

        // Card actions
        InputKey::Char(' ') => focused.map(|s| Message::ToggleSelection { id: s.id.clone() }),
        InputKey::Enter => focused.map(|s| Message::OpenDetails { id: s.id.clone() }),
        InputKey::Char('o') => focused
            .and_then(|s| s.documentation_link())
            .map(|url| Message::OpenDocumentation {
                url: url.to_string(),
            }),

        // Comparison
        InputKey::Char('v') => Some(Message::ToggleComparison),
        InputKey::Char('C') => Some(Message::ClearSelection),
        InputKey::Char('J') if state.show_comparison => Some(Message::ScrollComparison(1)),
        InputKey::Char('K') if state.show_comparison => Some(Message::ScrollComparison(-1)),
        InputKey::Char(c @ '1'..='5') if state.show_comparison => {
            let index = c.to_digit(10)? as usize - 1;
            state
                .selection
                .get(index)
                .map(|s| Message::RemoveFromComparison { id: s.id.clone() })
        }

        InputKey::Char('t') => Some(Message::ToggleTheme),

        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Leave search input, keeping the query
        InputKey::Esc | InputKey::Enter => Some(Message::EndSearch),

        InputKey::Backspace => {
            let mut text = state.filter.search_text().to_string();
            text.pop()?;
            Some(Message::SearchInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(c) => {
            let mut text = state.filter.search_text().to_string();
            text.push(c);
            Some(Message::SearchInput { text })
        }

        _ => None,
    }
}

/// Handle key events in the detail overlay
fn handle_key_details(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') | InputKey::Enter => Some(Message::CloseDetails),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollDetails(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDetails(1)),
        InputKey::PageUp => Some(Message::ScrollDetails(-DETAIL_PAGE)),
        InputKey::PageDown => Some(Message::ScrollDetails(DETAIL_PAGE)),
        InputKey::Char('o') => state
            .details_service()
            .and_then(|s| s.documentation_link())
            .map(|url| Message::OpenDocumentation {
                url: url.to_string(),
            }),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
