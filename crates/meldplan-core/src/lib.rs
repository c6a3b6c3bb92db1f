//! Meldplan Core - gear stat derivation for a character builder
//!
//! This crate provides:
//! - Gear catalog and lookup tables (`Catalog`, `CapTable`, `MateriaGrades`, ...)
//! - Gear instances with fixed-length materia slots (`Gear`, `MateriaSlots`)
//! - Derived views: capped stats, meldable headroom, highlights, color (`GearView`)
//! - The owning collection answering "is this instance equipped" (`GearStore`)
//!
//! ## Usage
//!
//! ```
//! use meldplan_core::{stat_map, Env, GameData, Gear, GearDef, Materia, Setting};
//!
//! let mut data = GameData::new();
//! data.catalog.insert(
//!     GearDef::new(1, "Ring", 510, 12)
//!         .with_stats(stat_map([("CRT", 50)]))
//!         .with_materia_slot(2, false),
//! );
//! data.materia_grades.insert("CRT", vec![1, 2, 4, 6, 12, 9, 16, 36]);
//!
//! let gear = Gear::create(1, vec![Materia::new("CRT", 8)], &data)?;
//! let setting = Setting::default();
//! let view = gear.view(Env::new(&data, &setting))?;
//! assert_eq!(view.stats()["CRT"], 86);
//! # Ok::<(), meldplan_core::Error>(())
//! ```

mod catalog;
mod color;
mod data;
mod error;
mod gear;
mod identity;
mod materia;
mod setting;
pub mod stat;
mod store;
mod tables;
mod version;

pub use catalog::{Catalog, GearDef};
pub use color::{classify, rarity_color, source_color, ColorScheme, GearColor};
pub use data::GameData;
pub use error::{Error, Result};
pub use gear::{Env, Gear, GearView};
pub use identity::{GearId, Job};
pub use materia::{Materia, MateriaGrades, MateriaSlots, ADVANCED_SLOTS, MAX_GRADE};
pub use setting::Setting;
pub use stat::{stat_map, Stat, StatMap};
pub use store::GearStore;
pub use tables::{CapRule, CapTable, JobCategories, StatHighlights};
pub use version::{Patch, Versions};
