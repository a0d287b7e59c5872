//! cloudcmp-app - Application state and orchestration for cloudcmp
//!
//! Implements the TEA (The Elm Architecture) pattern: [`AppState`] is the
//! model, [`Message`] the events, [`handler::update`] the pure transition
//! function, and [`actions`] runs the side effects it requests. Also holds
//! the filter, selection and theme controllers plus configuration loading.

pub mod actions;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod grid;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod selection;
pub mod signals;
pub mod state;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types
pub use actions::ActionContext;
pub use fetch::{RequestId, RequestSequencer};
pub use filter::{FetchRequest, FilterController};
pub use grid::{GridNav, GridViewState};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use selection::{SelectionSet, Toggled, MAX_SELECTION};
pub use state::{AppState, Catalog, CatalogStatus, UiMode};
pub use theme::{FileThemeStore, MemoryThemeStore, ThemePreference, ThemeStore};
