//! File layouts for RON data files

use meldplan_core::{CapTable, GearDef, JobCategories, MateriaGrades, StatHighlights};
use serde::{Deserialize, Serialize};

/// A file of gear definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GearFile {
    pub gears: Vec<GearDef>,
}

/// A file of lookup tables; every section is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesFile {
    /// Materia value per stat and grade
    pub materia_grades: MateriaGrades,
    /// Job category code to jobs
    pub job_categories: JobCategories,
    /// Stats flagged for over-cap warnings
    pub highlights: StatHighlights,
    /// Caps by item level and slot
    pub caps: CapTable,
}

impl TablesFile {
    /// Check if no section has entries
    pub fn is_empty(&self) -> bool {
        self.materia_grades.0.is_empty()
            && self.job_categories.0.is_empty()
            && self.highlights.0.is_empty()
            && self.caps.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meldplan_core::{Job, Stat};

    #[test]
    fn test_tables_file_ron() {
        let ron_str = r#"
        (
            materia_grades: { "CRT": [1, 2, 4, 6, 12, 9, 16, 36] },
            job_categories: { 59: ["PLD", "WAR", "DRK", "GNB"] },
            caps: { 510: { 12: { "CRT": 79 } } },
        )
        "#;

        let file: TablesFile = ron::from_str(ron_str).unwrap();
        assert_eq!(file.materia_grades.value(&Stat::new("CRT"), 8), Some(36));
        assert_eq!(file.job_categories.jobs(59)[0], Job::new("PLD"));
        assert!(file.highlights.0.is_empty());
        assert_eq!(file.caps.get(510, 12).map(|c| c["CRT"]), Some(79));
        assert!(!file.is_empty());
    }
}
