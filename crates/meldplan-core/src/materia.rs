//! Materia entries, the fixed-length slot vector and the grade value table

use crate::Stat;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Highest materia grade; the over-provisioned slot sentinel uses it
pub const MAX_GRADE: u8 = 5;

/// Slot count of gear that allows advanced (overmeld) melding
pub const ADVANCED_SLOTS: usize = 5;

/// A single materia socket
///
/// Empty when `stat` is `None`. Only entries with a stat contribute values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Materia {
    pub stat: Option<Stat>,
    pub grade: Option<u8>,
}

impl Materia {
    /// An empty socket
    pub const EMPTY: Materia = Materia {
        stat: None,
        grade: None,
    };

    /// Sentinel written when the supplied list exceeds the gear's capacity:
    /// any stat, max grade
    pub const ALL: Materia = Materia {
        stat: None,
        grade: Some(MAX_GRADE),
    };

    /// A materia of `stat` at `grade`
    pub fn new(stat: impl Into<Stat>, grade: u8) -> Self {
        Self {
            stat: Some(stat.into()),
            grade: Some(grade),
        }
    }

    /// Check if no stat is assigned
    pub fn is_empty(&self) -> bool {
        self.stat.is_none()
    }

    /// Check if this is the all-stat sentinel
    pub fn is_all(&self) -> bool {
        *self == Self::ALL
    }
}

/// Ordered materia sockets of one gear instance
///
/// Length is fixed by [`MateriaSlots::normalize`] when the gear is created.
/// After that, entries are only replaced one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MateriaSlots(Vec<Materia>);

impl MateriaSlots {
    /// Create from an as-supplied list (not yet normalized)
    pub fn new(materias: Vec<Materia>) -> Self {
        Self(materias)
    }

    /// Fit the list to `capacity` sockets
    ///
    /// A longer list is cut to `capacity` and its last kept socket becomes
    /// [`Materia::ALL`]. A shorter list is padded with empty sockets.
    pub fn normalize(&mut self, capacity: usize) {
        let len = self.0.len();
        if len > capacity {
            self.0.truncate(capacity);
            if let Some(boundary) = self.0.last_mut() {
                *boundary = Materia::ALL;
            }
            debug!(from = len, to = capacity, "truncated over-provisioned materia list");
        } else if len < capacity {
            self.0.resize(capacity, Materia::EMPTY);
            debug!(from = len, to = capacity, "padded materia list with empty slots");
        }
    }

    /// Replace the materia at `index`, returning the previous entry
    pub fn replace(&mut self, index: usize, materia: Materia) -> Option<Materia> {
        self.0
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, materia))
    }

    /// Get the materia at `index`
    pub fn get(&self, index: usize) -> Option<&Materia> {
        self.0.get(index)
    }

    /// Number of sockets
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the gear has no sockets
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the sockets in order
    pub fn iter(&self) -> impl Iterator<Item = &Materia> {
        self.0.iter()
    }

    /// Get the sockets as a slice
    pub fn as_slice(&self) -> &[Materia] {
        &self.0
    }
}

impl From<Vec<Materia>> for MateriaSlots {
    fn from(materias: Vec<Materia>) -> Self {
        Self(materias)
    }
}

/// Materia values per stat, indexed by `grade - 1`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MateriaGrades(pub IndexMap<Stat, Vec<i32>>);

impl MateriaGrades {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-grade values for a stat
    pub fn insert(&mut self, stat: impl Into<Stat>, values: Vec<i32>) {
        self.0.insert(stat.into(), values);
    }

    /// Value of `stat` at `grade` (1-based)
    pub fn value(&self, stat: &Stat, grade: u8) -> Option<i32> {
        let index = usize::from(grade).checked_sub(1)?;
        self.0.get(stat)?.get(index).copied()
    }

    /// Value contributed by a materia entry, `None` if it contributes nothing
    pub fn resolve(&self, materia: &Materia) -> Option<(Stat, i32)> {
        let stat = materia.stat.as_ref()?;
        let value = self.value(stat, materia.grade?)?;
        Some((stat.clone(), value))
    }

    /// Stats this table knows
    pub fn stats(&self) -> impl Iterator<Item = &Stat> {
        self.0.keys()
    }

    /// Merge another table into this one, later entries winning
    pub fn extend(&mut self, other: MateriaGrades) {
        self.0.extend(other.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(n: usize) -> MateriaSlots {
        MateriaSlots::new((0..n).map(|_| Materia::new("CRT", 8)).collect())
    }

    #[test]
    fn test_normalize_pads_short_list() {
        let mut materias = slots(1);
        materias.normalize(3);
        assert_eq!(materias.len(), 3);
        assert_eq!(materias.get(0), Some(&Materia::new("CRT", 8)));
        assert!(materias.get(1).unwrap().is_empty());
        assert!(materias.get(2).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_truncates_with_sentinel() {
        let mut materias = slots(4);
        materias.normalize(2);
        assert_eq!(materias.len(), 2);
        assert_eq!(materias.get(0), Some(&Materia::new("CRT", 8)));
        assert!(materias.get(1).unwrap().is_all());
    }

    #[test]
    fn test_normalize_is_noop_when_fitted() {
        let mut materias = slots(4);
        materias.normalize(2);
        let once = materias.clone();
        materias.normalize(2);
        assert_eq!(materias, once);

        let mut exact = slots(2);
        exact.normalize(2);
        assert_eq!(exact, slots(2));
    }

    #[test]
    fn test_normalize_to_zero() {
        let mut materias = slots(2);
        materias.normalize(0);
        assert!(materias.is_empty());
    }

    #[test]
    fn test_replace() {
        let mut materias = slots(0);
        materias.normalize(2);
        let previous = materias.replace(1, Materia::new("DET", 7));
        assert_eq!(previous, Some(Materia::EMPTY));
        assert_eq!(materias.get(1), Some(&Materia::new("DET", 7)));
        assert_eq!(materias.replace(2, Materia::EMPTY), None);
        assert_eq!(materias.len(), 2);
    }

    #[test]
    fn test_grade_lookup() {
        let mut grades = MateriaGrades::new();
        grades.insert("CRT", vec![1, 2, 4, 6, 12, 9, 16, 36]);
        let crt = Stat::new("CRT");
        assert_eq!(grades.value(&crt, 1), Some(1));
        assert_eq!(grades.value(&crt, 8), Some(36));
        assert_eq!(grades.value(&crt, 0), None);
        assert_eq!(grades.value(&crt, 9), None);
        assert_eq!(grades.resolve(&Materia::new("CRT", 5)), Some((crt, 12)));
        assert_eq!(grades.resolve(&Materia::EMPTY), None);
        assert_eq!(grades.resolve(&Materia::ALL), None);
    }

    #[test]
    fn test_materia_ron() {
        let materias: MateriaSlots =
            ron::from_str(r#"[(stat: Some("CRT"), grade: Some(8)), ()]"#).unwrap();
        assert_eq!(materias.len(), 2);
        assert_eq!(materias.get(0), Some(&Materia::new("CRT", 8)));
        assert!(materias.get(1).unwrap().is_empty());
    }
}
