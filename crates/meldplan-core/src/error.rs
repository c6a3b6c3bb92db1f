//! Error types for meldplan-core

use crate::GearId;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Gear {0} not exists")]
    GearNotFound(GearId),

    #[error("Gear {0} is already in the collection")]
    DuplicateGear(GearId),

    #[error("Gear {0} is not in the collection")]
    GearNotOwned(GearId),

    #[error("Materia slot {index} out of range (gear has {len} slots)")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("Invalid materia: {0}")]
    InvalidMateria(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
