//! Message types for the application (TEA pattern)

use cloudcmp_client::CatalogPage;

use crate::fetch::RequestId;
use crate::grid::GridNav;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse click, already hit-tested against the detail overlay
    Click { inside_overlay: bool },

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Filter Messages
    // ─────────────────────────────────────────────────────────
    /// Focus the search box
    StartSearch,

    /// Leave the search box, keeping the query
    EndSearch,

    /// Search box contents changed
    SearchInput { text: String },

    /// Advance the category filter (All → each category → All)
    CycleCategory,

    /// Advance the free-tier filter (All → available → not available → All)
    CycleFreeTier,

    ClearFilters,

    // ─────────────────────────────────────────────────────────
    // Catalog Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch with the current criteria (startup, retry, refresh)
    LoadCatalog,

    CatalogLoaded {
        request_id: RequestId,
        page: CatalogPage,
    },

    CatalogFailed {
        request_id: RequestId,
        /// User-facing message
        message: String,
    },

    // ─────────────────────────────────────────────────────────
    // Grid / Selection Messages
    // ─────────────────────────────────────────────────────────
    NavigateGrid(GridNav),

    /// Add or remove a service from the comparison selection
    ToggleSelection { id: String },

    /// Remove a service from the comparison (column header action)
    RemoveFromComparison { id: String },

    ClearSelection,

    /// Show or hide the comparison panel
    ToggleComparison,

    /// Scroll the comparison table by a signed number of lines
    ScrollComparison(i16),

    DismissCapacityWarning,

    // ─────────────────────────────────────────────────────────
    // Theme Messages
    // ─────────────────────────────────────────────────────────
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Detail Overlay Messages
    // ─────────────────────────────────────────────────────────
    OpenDetails { id: String },

    CloseDetails,

    /// Scroll the overlay by a signed number of lines
    ScrollDetails(i16),

    /// Open a documentation link in the browser
    OpenDocumentation { url: String },

    /// A background action failed; shown as a notice
    ActionFailed { message: String },
}
