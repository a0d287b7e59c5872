//! Light and dark themes for the catalog browser.
//!
//! - `palette` holds the two color sets and picks one from a [`ThemeMode`]
//! - `styles` builds semantic styles and blocks from a palette
//!
//! [`ThemeMode`]: cloudcmp_core::ThemeMode

pub mod palette;
pub mod styles;

pub use palette::Palette;
