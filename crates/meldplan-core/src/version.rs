//! Content versions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Game content version an item was introduced in (e.g. 5.3, 5.55)
///
/// Compared numerically, so 5.3 is newer than 5.25.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch(pub f64);

impl Patch {
    /// Create a new patch marker
    pub fn new(version: f64) -> Self {
        Self(version)
    }

    /// Whether this patch is strictly newer than `other`
    pub fn is_newer_than(&self, other: Patch) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Patch {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

/// Process-wide version markers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Versions {
    /// Latest patch that has been released to players
    pub released: Patch,
}

impl Versions {
    /// Create with the given released patch
    pub fn new(released: impl Into<Patch>) -> Self {
        Self {
            released: released.into(),
        }
    }

    /// Whether content from `patch` is already available
    pub fn is_released(&self, patch: Patch) -> bool {
        !patch.is_newer_than(self.released)
    }
}
