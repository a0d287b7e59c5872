//! Full-screen rendering tests for `view`

use super::*;
use crate::test_utils::{service, TestTerminal};
use cloudcmp_app::handler::{update, UpdateAction};
use cloudcmp_app::Message;
use cloudcmp_client::CatalogPage;
use cloudcmp_core::{Category, Service, ThemeMode};

fn catalog() -> Vec<Service> {
    vec![
        service("s3", "Amazon S3"),
        service("ebs", "Amazon EBS"),
        service("efs", "Amazon EFS"),
    ]
}

/// Drive a fetch through update so the state looks like a live session
fn loaded_state(services: Vec<Service>) -> AppState {
    let mut state = AppState::new();
    let request_id = match update(&mut state, Message::LoadCatalog).action {
        Some(UpdateAction::FetchCatalog { request_id, .. }) => request_id,
        other => panic!("expected FetchCatalog, got {other:?}"),
    };
    update(
        &mut state,
        Message::CatalogLoaded {
            request_id,
            page: CatalogPage {
                total_count: services.len(),
                services,
                categories: vec![Category::Storage],
            },
        },
    );
    state
}

fn draw(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_loading_screen_before_first_response() {
    let mut state = AppState::new();
    update(&mut state, Message::LoadCatalog);

    let term = draw(&mut state);
    assert!(term.buffer_contains(widgets::LOADING_TEXT));
    assert!(!term.buffer_contains("Showing"));
}

#[test]
fn test_browse_screen_shows_header_filters_and_cards() {
    let mut state = loaded_state(catalog());
    let term = draw(&mut state);

    assert!(term.buffer_contains("AWS Service Comparison"));
    assert!(term.buffer_contains("All Categories"));
    assert!(term.buffer_contains("Showing 3 services"));
    assert!(term.buffer_contains("Amazon S3"));
    assert!(term.buffer_contains("Amazon EBS"));
    assert!(!term.buffer_contains("services selected"));
}

#[test]
fn test_grid_layout_reported_back_to_state() {
    let mut state = loaded_state(catalog());
    draw(&mut state);
    // 100 columns fit two cards per row
    assert_eq!(state.grid.columns, 2);
}

#[test]
fn test_failed_fetch_shows_error_screen() {
    let mut state = loaded_state(catalog());
    let request_id = match update(&mut state, Message::LoadCatalog).action {
        Some(UpdateAction::FetchCatalog { request_id, .. }) => request_id,
        other => panic!("expected FetchCatalog, got {other:?}"),
    };
    update(
        &mut state,
        Message::CatalogFailed {
            request_id,
            message: cloudcmp_core::UNAVAILABLE_MESSAGE.to_string(),
        },
    );

    let term = draw(&mut state);
    assert!(term.buffer_contains("Error"));
    assert!(term.buffer_contains("Retry"));
    assert!(term.buffer_contains(cloudcmp_core::UNAVAILABLE_MESSAGE));
    assert!(!term.buffer_contains("Amazon S3"));
}

#[test]
fn test_refetch_keeps_grid_and_shows_loading() {
    let mut state = loaded_state(catalog());
    update(&mut state, Message::LoadCatalog);

    let term = draw(&mut state);
    assert!(term.buffer_contains("Amazon S3"));
    assert!(term.buffer_contains("Loading..."));
}

#[test]
fn test_selection_and_comparison_panel() {
    let mut state = loaded_state(catalog());
    update(&mut state, Message::ToggleSelection { id: "ebs".into() });
    update(&mut state, Message::ToggleSelection { id: "s3".into() });
    update(&mut state, Message::ToggleComparison);

    let term = draw(&mut state);
    assert!(term.buffer_contains("2 services selected"));
    assert!(term.buffer_contains("Hide Comparison"));
    assert!(term.buffer_contains("Service Comparison (2 services)"));
    // Selection order, not catalog order
    assert!(term.buffer_contains("Amazon EBS [1×]"));
    assert!(term.buffer_contains("Amazon S3 [2×]"));
}

#[test]
fn test_comparison_toggled_on_with_empty_selection() {
    let mut state = loaded_state(catalog());
    update(&mut state, Message::ToggleComparison);

    let term = draw(&mut state);
    assert!(term.buffer_contains("No services selected for comparison"));
}

#[test]
fn test_detail_overlay_over_grid() {
    let mut state = loaded_state(catalog());
    update(&mut state, Message::OpenDetails { id: "efs".into() });

    let term = draw(&mut state);
    assert!(term.buffer_contains("Amazon EFS"));
    assert!(term.buffer_contains("Additional Information"));
    assert!(term.buffer_contains("Region Availability: All regions"));
}

#[test]
fn test_capacity_warning_overlay() {
    let services: Vec<Service> = (0..6)
        .map(|i| service(&format!("svc{i}"), &format!("Service {i}")))
        .collect();
    let mut state = loaded_state(services);
    for i in 0..6 {
        update(
            &mut state,
            Message::ToggleSelection {
                id: format!("svc{i}"),
            },
        );
    }
    assert_eq!(state.ui_mode, UiMode::CapacityWarning);

    let term = draw(&mut state);
    assert!(term.buffer_contains("You can compare up to 5 services at a time."));
    assert!(term.buffer_contains("5 services selected"));
}

#[test]
fn test_dark_theme_background() {
    let mut state = loaded_state(catalog());
    state.theme = ThemeMode::Dark;

    let term = draw(&mut state);
    assert!(term.buffer_contains("☾ Dark"));
    assert_eq!(
        term.buffer()[(0, 39)].bg,
        crate::theme::palette::DARK.deepest_bg
    );
}

#[test]
fn test_search_mode_shows_cursor_and_hints() {
    let mut state = loaded_state(catalog());
    update(&mut state, Message::StartSearch);

    let term = draw(&mut state);
    assert!(term.buffer_contains("▏"));
    assert!(term.buffer_contains("Ctrl-U clear"));
}
