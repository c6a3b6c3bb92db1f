//! RON data loader

use crate::error::{Error, Result};
use crate::schema::{GearFile, TablesFile};
use meldplan_core::{CapTable, GameData, Versions};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Loader for RON game data files
pub struct Loader {
    data: GameData,
    caps: CapTable,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            data: GameData::new(),
            caps: CapTable::new(),
        }
    }

    /// Load a single RON file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        debug!(file = filename, "loading data file");

        if filename.contains("gear") || content.contains("gears:") {
            self.load_gears_str(&content)
        } else if filename.contains("version") || content.contains("released:") {
            self.load_versions_str(&content)
        } else {
            self.load_tables_str(&content)
        }
    }

    /// Load gear definitions from a RON string
    pub fn load_gears_str(&mut self, content: &str) -> Result<()> {
        let file: GearFile = ron::from_str(content)?;
        let count = file.gears.len();
        // reject the whole file before touching the catalog
        let mut seen = HashSet::with_capacity(count);
        for gear in &file.gears {
            if self.data.catalog.contains(gear.id) || !seen.insert(gear.id) {
                return Err(Error::DuplicateDefinition(format!("gear {}", gear.id)));
            }
        }
        for gear in file.gears {
            self.data.catalog.insert(gear);
        }
        info!(count, total = self.data.catalog.len(), "loaded gear definitions");
        Ok(())
    }

    /// Load lookup tables from a RON string
    pub fn load_tables_str(&mut self, content: &str) -> Result<()> {
        let file: TablesFile = ron::from_str(content)?;
        if file.is_empty() {
            return Err(Error::InvalidSchema(
                "file contains no gears, versions or tables".to_string(),
            ));
        }
        let TablesFile {
            materia_grades,
            job_categories,
            highlights,
            caps,
        } = file;
        info!(
            materia_grades = materia_grades.0.len(),
            job_categories = job_categories.0.len(),
            highlights = highlights.0.len(),
            cap_levels = caps.0.len(),
            "loaded lookup tables"
        );
        self.data.materia_grades.extend(materia_grades);
        self.data.job_categories.extend(job_categories);
        self.data.highlights.extend(highlights);
        self.caps.extend(caps);
        Ok(())
    }

    /// Load version markers from a RON string
    pub fn load_versions_str(&mut self, content: &str) -> Result<()> {
        let versions: Versions = ron::from_str(content)?;
        info!(released = %versions.released, "loaded versions");
        self.data.versions = versions;
        Ok(())
    }

    /// Load all RON files from a directory
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        let mut entries = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        // directory order is platform dependent; later tables override earlier ones
        entries.sort();

        for file_path in entries {
            if file_path.extension().map(|e| e == "ron").unwrap_or(false) {
                self.load_file(&file_path)?;
            } else if file_path.is_dir() {
                self.load_directory(&file_path)?;
            }
        }

        Ok(())
    }

    /// Finish loading and return the game data
    pub fn finish(self) -> GameData {
        let mut data = self.data;
        data.set_cap_rule(self.caps);
        data
    }

    /// Get the current data (for inspection during loading)
    pub fn data(&self) -> &GameData {
        &self.data
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
