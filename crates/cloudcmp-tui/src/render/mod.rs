//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use cloudcmp_app::state::{AppState, CatalogStatus, UiMode};
use cloudcmp_app::MAX_SELECTION;
use cloudcmp_core::Error;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Only mutates the widget state that tracks rendering info: the grid
/// layout, comparison offset and detail scroll position.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let p = palette::for_mode(state.theme);

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(p.deepest_bg).fg(p.text_primary));
    frame.render_widget(bg_block, area);

    if let CatalogStatus::Failed(message) = &state.catalog.status {
        frame.render_widget(widgets::ErrorScreen::new(message, p), area);
        return;
    }

    // Later fetches keep the grid and report loading in the status line
    if !state.catalog.loaded_once {
        frame.render_widget(widgets::LoadingScreen::new(p), area);
        return;
    }

    let areas = layout::create(area, state.show_comparison);

    frame.render_widget(widgets::MainHeader::new(state.theme, p), areas.header);

    let filter_bar = widgets::FilterBar::new(state.filter.criteria(), p)
        .editing(state.ui_mode == UiMode::SearchInput);
    frame.render_widget(filter_bar, areas.filters);

    let status = widgets::StatusLine::new(state.catalog.services.len(), state.selection.len(), p)
        .show_comparison(state.show_comparison)
        .loading(state.catalog.is_loading())
        .notice(state.notice.as_deref());
    frame.render_widget(status, areas.status);

    if let Some(comparison_area) = areas.comparison {
        frame.render_stateful_widget(
            widgets::ComparisonTable::new(state.selection.as_slice(), p),
            comparison_area,
            &mut state.comparison_offset,
        );
    }

    frame.render_stateful_widget(
        widgets::ServiceGrid::new(&state.catalog.services, &state.selection, p),
        areas.grid,
        &mut state.grid,
    );

    frame.render_widget(widgets::KeyHints::new(&state.ui_mode, p), areas.hints);

    // Overlays last so they sit above everything
    match &state.ui_mode {
        UiMode::Details(service) => {
            frame.render_stateful_widget(
                widgets::DetailOverlay::new(service, p),
                area,
                &mut state.detail_scroll,
            );
        }
        UiMode::CapacityWarning => {
            let message = Error::CapacityExceeded {
                capacity: MAX_SELECTION,
            }
            .user_message();
            frame.render_widget(widgets::CapacityWarning::new(&message, p), area);
        }
        UiMode::Browse | UiMode::SearchInput => {}
    }
}
