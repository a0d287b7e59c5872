//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `catalog`: Filter changes and catalog fetch outcomes

pub(crate) mod catalog;
pub(crate) mod keys;
pub(crate) mod update;


use cloudcmp_core::{FilterCriteria, ThemeMode};

use crate::fetch::RequestId;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the catalog for `criteria`; the response is tagged `request_id`
    FetchCatalog {
        request_id: RequestId,
        criteria: FilterCriteria,
    },

    /// Write the theme preference to its store
    PersistTheme(ThemeMode),

    /// Open a URL with the configured browser or the platform opener
    OpenUrl(String),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
