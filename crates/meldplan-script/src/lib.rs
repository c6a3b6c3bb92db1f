//! Meldplan Script - RON loader for game data and settings
//!
//! Loads from RON files:
//! - Gear catalog entries
//! - Lookup tables (materia grades, job categories, stat highlights, caps)
//! - Content version markers
//! - User settings

mod error;
mod loader;
mod schema;
mod setting;

pub use error::{Error, Result};
pub use loader::Loader;
pub use schema::{GearFile, TablesFile};
pub use setting::{load_setting, parse_setting};
