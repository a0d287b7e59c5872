//! Application state (Model in TEA pattern)

use cloudcmp_core::{Category, Service, ThemeMode};

use crate::config::Settings;
use crate::fetch::RequestSequencer;
use crate::filter::FilterController;
use crate::grid::GridViewState;
use crate::selection::SelectionSet;

/// Current UI mode/screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiMode {
    /// Card grid (and comparison panel when shown)
    #[default]
    Browse,

    /// Typing into the search box
    SearchInput,

    /// Full-record overlay for one service
    Details(Box<Service>),

    /// Blocking "selection is full" notice; the next key dismisses it
    CapacityWarning,
}

/// Outcome of the most recent catalog fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    /// User-facing failure message
    Failed(String),
}

/// Last successfully fetched catalog and the status of the current fetch
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub categories: Vec<Category>,
    pub total_count: usize,
    pub status: CatalogStatus,
    /// Whether any fetch has succeeded yet
    pub loaded_once: bool,
}

impl Catalog {
    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            CatalogStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,

    pub catalog: Catalog,

    pub filter: FilterController,

    pub selection: SelectionSet,

    pub theme: ThemeMode,

    pub grid: GridViewState,

    /// Comparison panel visibility
    pub show_comparison: bool,

    /// First visible comparison line (clamped during render)
    pub comparison_offset: usize,

    /// Scroll offset inside the detail overlay
    pub detail_scroll: u16,

    pub sequencer: RequestSequencer,

    /// One-line transient notice shown in the status line
    pub notice: Option<String>,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default(), ThemeMode::Light)
    }

    pub fn with_settings(settings: &Settings, theme: ThemeMode) -> Self {
        Self {
            ui_mode: UiMode::Browse,
            catalog: Catalog::default(),
            filter: FilterController::new(),
            selection: SelectionSet::new(),
            theme,
            grid: GridViewState::new(),
            show_comparison: false,
            comparison_offset: 0,
            detail_scroll: 0,
            sequencer: RequestSequencer::new(settings.catalog.discard_stale_responses),
            notice: None,
            quitting: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    /// Service under the grid cursor
    pub fn focused_service(&self) -> Option<&Service> {
        self.catalog.services.get(self.grid.cursor)
    }

    /// Service shown in the detail overlay
    pub fn details_service(&self) -> Option<&Service> {
        match &self.ui_mode {
            UiMode::Details(service) => Some(&**service),
            _ => None,
        }
    }
}
