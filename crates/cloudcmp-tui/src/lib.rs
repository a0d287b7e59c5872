//! cloudcmp-tui - Terminal UI for cloudcmp
//!
//! Renders the catalog grid, comparison table and detail overlay with
//! ratatui, polls crossterm for keyboard and mouse input, and drives the
//! cloudcmp-app update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
