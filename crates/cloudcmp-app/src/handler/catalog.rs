//! Filter changes and catalog fetch outcomes

use cloudcmp_client::CatalogPage;
use cloudcmp_core::prelude::*;
use cloudcmp_core::FilterPatch;

use crate::fetch::RequestId;
use crate::filter::FetchRequest;
use crate::state::{AppState, CatalogStatus, UiMode};

use super::{UpdateAction, UpdateResult};

/// Tag a fetch with a fresh request id and hand it to the event loop
pub fn issue_fetch(state: &mut AppState, request: FetchRequest) -> UpdateResult {
    let request_id = state.sequencer.issue();
    state.catalog.status = CatalogStatus::Loading;
    debug!("Issuing catalog fetch {} for {:?}", request_id, request.criteria);

    UpdateResult::action(UpdateAction::FetchCatalog {
        request_id,
        criteria: request.criteria,
    })
}

pub fn handle_filter_patch(state: &mut AppState, patch: FilterPatch) -> UpdateResult {
    let request = state.filter.update(patch);
    issue_fetch(state, request)
}

pub fn handle_cycle_category(state: &mut AppState) -> UpdateResult {
    let next = state.filter.next_category(&state.catalog.categories);
    handle_filter_patch(state, FilterPatch::category(next))
}

pub fn handle_cycle_free_tier(state: &mut AppState) -> UpdateResult {
    let next = state.filter.next_free_tier();
    handle_filter_patch(state, FilterPatch::free_tier(next))
}

pub fn handle_clear_filters(state: &mut AppState) -> UpdateResult {
    let request = state.filter.clear();
    issue_fetch(state, request)
}

/// Replace the displayed list, count and categories in full
pub fn handle_catalog_loaded(
    state: &mut AppState,
    request_id: RequestId,
    page: CatalogPage,
) -> UpdateResult {
    if !state.sequencer.is_current(request_id) {
        debug!("Discarding stale catalog response {}", request_id);
        return UpdateResult::none();
    }

    info!(
        "Catalog {} loaded: {} services, {} categories",
        request_id,
        page.services.len(),
        page.categories.len()
    );

    state.catalog.services = page.services;
    state.catalog.total_count = page.total_count;
    state.catalog.categories = page.categories;
    state.catalog.status = CatalogStatus::Ready;
    state.catalog.loaded_once = true;
    state.grid.clamp(state.catalog.services.len());

    UpdateResult::none()
}

/// Keep the previous list, switch to the error screen
pub fn handle_catalog_failed(
    state: &mut AppState,
    request_id: RequestId,
    message: String,
) -> UpdateResult {
    if !state.sequencer.is_current(request_id) {
        debug!("Discarding stale catalog failure {}", request_id);
        return UpdateResult::none();
    }

    warn!("Catalog {} failed: {}", request_id, message);
    state.catalog.status = CatalogStatus::Failed(message);
    state.ui_mode = UiMode::Browse;

    UpdateResult::none()
}
