//! Lookup tables the gear views read: caps, job categories, highlights

use crate::{GearDef, Job, Stat, StatMap};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Derives the per-stat caps of a gear definition
pub trait CapRule: Send + Sync {
    fn caps(&self, def: &GearDef) -> StatMap;
}

impl<F> CapRule for F
where
    F: Fn(&GearDef) -> StatMap + Send + Sync,
{
    fn caps(&self, def: &GearDef) -> StatMap {
        self(def)
    }
}

/// Caps by item level, then by absolute equipment slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapTable(pub IndexMap<u32, IndexMap<u32, StatMap>>);

impl CapTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caps for gear of `level` in `slot`
    pub fn insert(&mut self, level: u32, slot: u32, caps: StatMap) {
        self.0.entry(level).or_default().insert(slot, caps);
    }

    /// Caps for a level and slot, if known
    pub fn get(&self, level: u32, slot: u32) -> Option<&StatMap> {
        self.0.get(&level)?.get(&slot)
    }

    /// Merge another table into this one, later entries winning
    pub fn extend(&mut self, other: CapTable) {
        for (level, slots) in other.0 {
            self.0.entry(level).or_default().extend(slots);
        }
    }
}

impl CapRule for CapTable {
    fn caps(&self, def: &GearDef) -> StatMap {
        self.get(def.level, def.slot.unsigned_abs())
            .cloned()
            .unwrap_or_default()
    }
}

/// Job category code to the jobs it admits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobCategories(pub IndexMap<u32, Vec<Job>>);

impl JobCategories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: u32, jobs: Vec<Job>) {
        self.0.insert(code, jobs);
    }

    /// Jobs for a category; unknown codes admit nobody
    pub fn jobs(&self, code: u32) -> &[Job] {
        self.0.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn extend(&mut self, other: JobCategories) {
        self.0.extend(other.0);
    }
}

/// Stats worth warning about when base values already reach the cap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatHighlights(pub IndexMap<Stat, bool>);

impl StatHighlights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stat: impl Into<Stat>, highlight: bool) {
        self.0.insert(stat.into(), highlight);
    }

    pub fn is_highlighted(&self, stat: &Stat) -> bool {
        self.0.get(stat).copied().unwrap_or(false)
    }

    pub fn extend(&mut self, other: StatHighlights) {
        self.0.extend(other.0);
    }
}
