//! Static gear definitions and the catalog they live in

use crate::error::{Error, Result};
use crate::materia::ADVANCED_SLOTS;
use crate::{GearId, Patch, StatMap};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Catalog entry for one piece of gear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearDef {
    /// Catalog key
    pub id: u32,
    /// Display name
    pub name: String,
    /// Item level
    pub level: u32,
    /// Code into the job category table
    pub job_category: u32,
    /// Equipment slot; negated for the mirrored placement
    pub slot: i32,
    /// Number of guaranteed materia sockets
    #[serde(default)]
    pub materia_slot: usize,
    /// Whether advanced melding fills sockets up to five
    #[serde(default)]
    pub materia_advanced: bool,
    /// High quality variant
    #[serde(default)]
    pub hq: bool,
    /// Rarity tier used for coloring
    pub rarity: u8,
    /// Where the item comes from (free text, may be empty)
    #[serde(default)]
    pub source: String,
    /// Content version the item was added in
    pub patch: Patch,
    /// Base stats
    #[serde(default)]
    pub stats: StatMap,
}

impl GearDef {
    /// Create a definition with no sockets, stats or source
    pub fn new(id: u32, name: impl Into<String>, level: u32, slot: i32) -> Self {
        Self {
            id,
            name: name.into(),
            level,
            job_category: 0,
            slot,
            materia_slot: 0,
            materia_advanced: false,
            hq: false,
            rarity: 1,
            source: String::new(),
            patch: Patch::default(),
            stats: StatMap::new(),
        }
    }

    /// Number of materia entries a gear instance holds
    pub fn materia_capacity(&self) -> usize {
        if self.materia_advanced {
            ADVANCED_SLOTS
        } else {
            self.materia_slot
        }
    }

    /// Equipment slot an instance with `id` occupies
    pub fn placed_slot(&self, id: GearId) -> i32 {
        if id.is_mirrored() {
            -self.slot
        } else {
            self.slot
        }
    }

    pub fn with_stats(mut self, stats: StatMap) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_materia_slot(mut self, slots: usize, advanced: bool) -> Self {
        self.materia_slot = slots;
        self.materia_advanced = advanced;
        self
    }

    pub fn with_rarity(mut self, rarity: u8, source: impl Into<String>) -> Self {
        self.rarity = rarity;
        self.source = source.into();
        self
    }

    pub fn with_patch(mut self, patch: impl Into<Patch>) -> Self {
        self.patch = patch.into();
        self
    }

    pub fn with_job_category(mut self, code: u32) -> Self {
        self.job_category = code;
        self
    }
}

/// Immutable mapping from catalog key to gear definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    gears: IndexMap<u32, GearDef>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, returning the one it replaced
    pub fn insert(&mut self, def: GearDef) -> Option<GearDef> {
        self.gears.insert(def.id, def)
    }

    /// Resolve a (possibly mirrored) gear id to its definition
    pub fn lookup(&self, id: GearId) -> Result<&GearDef> {
        self.gears.get(&id.abs()).ok_or(Error::GearNotFound(id))
    }

    /// Get a definition by catalog key
    pub fn get(&self, key: u32) -> Option<&GearDef> {
        self.gears.get(&key)
    }

    /// Check if a catalog key exists
    pub fn contains(&self, key: u32) -> bool {
        self.gears.contains_key(&key)
    }

    /// Iterate over all definitions
    pub fn iter(&self) -> impl Iterator<Item = &GearDef> {
        self.gears.values()
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.gears.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.gears.is_empty()
    }
}
