//! Custom widget components

mod capacity_warning;
pub mod comparison_table;
pub mod detail_overlay;
mod filter_bar;
mod header;
pub mod modal_overlay;
mod screens;
pub mod service_card;
mod service_grid;
mod status_line;
pub mod text;

pub use capacity_warning::CapacityWarning;
pub use comparison_table::{comparison_rows, ComparisonRow, ComparisonTable};
pub use detail_overlay::{detail_overlay_rect, DetailOverlay};
pub use filter_bar::{FilterBar, SINGLE_LINE_WIDTH};
pub use header::MainHeader;
pub use screens::{ErrorScreen, LoadingScreen, LOADING_TEXT};
pub use service_card::{feature_preview, truncate_pricing_notes, ServiceCard};
pub use service_grid::{grid_dimensions, ServiceGrid};
pub use status_line::{KeyHints, StatusLine};
