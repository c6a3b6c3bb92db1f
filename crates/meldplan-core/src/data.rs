//! Game data every gear view reads from

use crate::error::Result;
use crate::{
    CapRule, CapTable, Catalog, GearDef, GearId, JobCategories, MateriaGrades, Patch,
    StatHighlights, StatMap, Versions,
};
use std::fmt;

/// Catalog, lookup tables and version markers
///
/// Owned by the embedding application; gear views only borrow it.
pub struct GameData {
    /// Gear definitions
    pub catalog: Catalog,
    /// Materia value per stat and grade
    pub materia_grades: MateriaGrades,
    /// Job category code to jobs
    pub job_categories: JobCategories,
    /// Stats flagged for over-cap warnings
    pub highlights: StatHighlights,
    /// Content version markers
    pub versions: Versions,
    /// Cap derivation
    cap_rule: Box<dyn CapRule>,
}

impl GameData {
    /// Create empty game data using a [`CapTable`] for caps
    pub fn new() -> Self {
        Self::with_cap_rule(CapTable::new())
    }

    /// Create empty game data with a custom cap derivation
    pub fn with_cap_rule(cap_rule: impl CapRule + 'static) -> Self {
        Self {
            catalog: Catalog::new(),
            materia_grades: MateriaGrades::new(),
            job_categories: JobCategories::new(),
            highlights: StatHighlights::new(),
            versions: Versions::default(),
            cap_rule: Box::new(cap_rule),
        }
    }

    /// Replace the cap derivation
    pub fn set_cap_rule(&mut self, cap_rule: impl CapRule + 'static) {
        self.cap_rule = Box::new(cap_rule);
    }

    /// Resolve a gear id against the catalog
    pub fn lookup(&self, id: GearId) -> Result<&GearDef> {
        self.catalog.lookup(id)
    }

    /// Caps for a definition
    pub fn caps(&self, def: &GearDef) -> StatMap {
        self.cap_rule.caps(def)
    }

    /// Move the released marker (e.g. when a new patch goes live)
    pub fn set_released(&mut self, patch: impl Into<Patch>) {
        self.versions.released = patch.into();
    }
}

impl Default for GameData {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameData")
            .field("catalog", &self.catalog.len())
            .field("materia_grades", &self.materia_grades)
            .field("job_categories", &self.job_categories)
            .field("highlights", &self.highlights)
            .field("versions", &self.versions)
            .finish_non_exhaustive()
    }
}
