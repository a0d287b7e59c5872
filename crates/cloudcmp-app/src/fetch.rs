//! Catalog request sequencing
//!
//! Fetches are never cancelled, so responses can resolve out of order. Every
//! request is tagged with a [`RequestId`] and only the response to the most
//! recently issued request is applied.

use std::fmt;

/// Monotonically increasing tag for a catalog fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct RequestSequencer {
    latest: u64,
    discard_stale: bool,
}

impl Default for RequestSequencer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RequestSequencer {
    /// With `discard_stale = false` every response is applied, so whichever
    /// resolves last wins.
    pub fn new(discard_stale: bool) -> Self {
        Self {
            latest: 0,
            discard_stale,
        }
    }

    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    /// Most recently issued id, if any
    pub fn latest(&self) -> Option<RequestId> {
        (self.latest > 0).then_some(RequestId(self.latest))
    }

    /// Whether a response tagged `id` should be applied
    pub fn is_current(&self, id: RequestId) -> bool {
        !self.discard_stale || id.0 == self.latest
    }

    pub fn discards_stale(&self) -> bool {
        self.discard_stale
    }
}
