//! Identity types for gear instances and jobs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed identifier of a gear instance
///
/// The magnitude is the catalog key. A negative id denotes the same catalog
/// item placed in the mirrored equipment slot (e.g. the second ring).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GearId(pub i32);

impl GearId {
    /// Create a new gear ID
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw signed value
    pub fn raw(&self) -> i32 {
        self.0
    }

    /// Catalog key for this instance
    pub fn abs(&self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Whether this id refers to the mirrored slot placement
    pub fn is_mirrored(&self) -> bool {
        self.0 < 0
    }

    /// The same catalog item under the opposite slot placement
    pub fn mirrored(&self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for GearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for GearId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Identifier of a job (class) that may wear gear
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Job(pub String);

impl Job {
    /// Create a new job ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Job {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
