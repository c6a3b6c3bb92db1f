//! Gear instances and their derived views

use crate::error::{Error, Result};
use crate::stat::accumulate;
use crate::{
    classify, GameData, GearColor, GearDef, GearId, GearStore, Job, Materia, MateriaSlots, Patch,
    Setting, Stat, StatMap,
};
use indexmap::IndexMap;
use tracing::warn;

/// Everything outside the instance that its views depend on
#[derive(Debug, Clone, Copy)]
pub struct Env<'a> {
    pub data: &'a GameData,
    pub setting: &'a Setting,
}

impl<'a> Env<'a> {
    pub fn new(data: &'a GameData, setting: &'a Setting) -> Self {
        Self { data, setting }
    }
}

/// A piece of gear with its inserted materia
#[derive(Debug, Clone, PartialEq)]
pub struct Gear {
    id: GearId,
    materias: MateriaSlots,
}

impl Gear {
    /// Create an instance, fitting `materias` to the definition's capacity
    ///
    /// Fails with [`Error::GearNotFound`] if the id has no catalog entry.
    pub fn create(
        id: impl Into<GearId>,
        materias: impl Into<MateriaSlots>,
        data: &GameData,
    ) -> Result<Self> {
        let id = id.into();
        let def = data.lookup(id)?;
        let mut materias = materias.into();
        materias.normalize(def.materia_capacity());
        Ok(Self { id, materias })
    }

    pub fn id(&self) -> GearId {
        self.id
    }

    pub fn materias(&self) -> &MateriaSlots {
        &self.materias
    }

    /// Replace one materia entry, returning the previous one
    pub fn set_materia(&mut self, index: usize, materia: Materia) -> Result<Materia> {
        let len = self.materias.len();
        self.materias
            .replace(index, materia)
            .ok_or(Error::SlotOutOfRange { index, len })
    }

    /// Derived views of this instance, detached from any owning collection
    pub fn view<'a>(&'a self, env: Env<'a>) -> Result<GearView<'a>> {
        GearView::resolve(self, env, None)
    }
}

/// Read-only derived state of a gear instance
///
/// Every method recomputes from the current materia list, so a view taken
/// after [`Gear::set_materia`] reflects the change.
#[derive(Debug, Clone, Copy)]
pub struct GearView<'a> {
    gear: &'a Gear,
    def: &'a GearDef,
    env: Env<'a>,
    owner: Option<&'a GearStore>,
}

impl<'a> GearView<'a> {
    pub(crate) fn resolve(
        gear: &'a Gear,
        env: Env<'a>,
        owner: Option<&'a GearStore>,
    ) -> Result<Self> {
        let def = env.data.lookup(gear.id)?;
        Ok(Self {
            gear,
            def,
            env,
            owner,
        })
    }

    pub fn gear(&self) -> &'a Gear {
        self.gear
    }

    pub fn def(&self) -> &'a GearDef {
        self.def
    }

    pub fn id(&self) -> GearId {
        self.gear.id
    }

    /// Gear is never food; lets mixed listings tell the two apart
    pub fn is_food(&self) -> bool {
        false
    }

    pub fn name(&self) -> &'a str {
        &self.def.name
    }

    pub fn level(&self) -> u32 {
        self.def.level
    }

    /// Equipment slot, negated for mirrored instances
    pub fn slot(&self) -> i32 {
        self.def.placed_slot(self.gear.id)
    }

    /// Jobs that can wear this gear
    pub fn jobs(&self) -> &'a [Job] {
        self.env.data.job_categories.jobs(self.def.job_category)
    }

    pub fn materia_slot(&self) -> usize {
        self.def.materia_slot
    }

    pub fn materia_advanced(&self) -> bool {
        self.def.materia_advanced
    }

    pub fn materia_capacity(&self) -> usize {
        self.def.materia_capacity()
    }

    pub fn hq(&self) -> bool {
        self.def.hq
    }

    pub fn source(&self) -> &'a str {
        &self.def.source
    }

    pub fn patch(&self) -> Patch {
        self.def.patch
    }

    /// Display color under the configured scheme
    ///
    /// `None` when the scheme falls through to a rarity with no color.
    pub fn color(&self) -> Option<GearColor> {
        classify(
            self.def.rarity,
            &self.def.source,
            self.env.setting.gear_color_scheme,
        )
    }

    pub fn caps(&self) -> StatMap {
        self.env.data.caps(self.def)
    }

    pub fn bare_stats(&self) -> &'a StatMap {
        &self.def.stats
    }

    /// Sum of inserted materia values per stat
    pub fn materia_stats(&self) -> StatMap {
        let grades = &self.env.data.materia_grades;
        let mut stats = StatMap::new();
        for materia in self.gear.materias.iter().filter(|m| !m.is_empty()) {
            match grades.resolve(materia) {
                Some((stat, value)) => accumulate(&mut stats, &stat, value),
                None => {
                    warn!(gear = %self.gear.id, ?materia, "materia has no grade value, skipped")
                }
            }
        }
        stats
    }

    /// Base plus materia, clamped to caps
    ///
    /// Gear without sockets returns its base stats untouched. A stat with no
    /// cap is not clamped.
    pub fn stats(&self) -> StatMap {
        let bare = self.bare_stats();
        if self.materia_slot() == 0 {
            return bare.clone();
        }
        let materia = self.materia_stats();
        let caps = self.caps();
        let mut stats = StatMap::new();
        for stat in bare.keys().chain(materia.keys()) {
            if stats.contains_key(stat) {
                continue;
            }
            let total =
                bare.get(stat).copied().unwrap_or(0) + materia.get(stat).copied().unwrap_or(0);
            let capped = caps.get(stat).map_or(total, |&cap| total.min(cap));
            stats.insert(stat.clone(), capped);
        }
        stats
    }

    /// Room under each cap left by the base stats
    pub fn total_meldable_stats(&self) -> StatMap {
        let bare = self.bare_stats();
        self.caps()
            .into_iter()
            .map(|(stat, cap)| {
                let room = cap - bare.get(&stat).copied().unwrap_or(0);
                (stat, room)
            })
            .collect()
    }

    /// Room under each cap left after inserted materia; negative when over cap
    pub fn current_meldable_stats(&self) -> StatMap {
        let materia = self.materia_stats();
        self.total_meldable_stats()
            .into_iter()
            .map(|(stat, room)| {
                let left = room - materia.get(&stat).copied().unwrap_or(0);
                (stat, left)
            })
            .collect()
    }

    /// Highlighted base stats that already sit at or above their cap
    pub fn stat_highlights(&self) -> IndexMap<Stat, bool> {
        let caps = self.caps();
        let highlights = &self.env.data.highlights;
        self.bare_stats()
            .iter()
            .map(|(stat, &value)| {
                let capped = caps.get(stat).is_some_and(|&cap| value >= cap);
                (stat.clone(), highlights.is_highlighted(stat) && capped)
            })
            .collect()
    }

    /// Whether the item's patch has been released
    pub fn is_installed(&self) -> bool {
        self.env.data.versions.is_released(self.def.patch)
    }

    /// Whether this exact instance is the one equipped in its slot
    ///
    /// Detached views are never equipped.
    pub fn is_equipped(&self) -> bool {
        self.owner.is_some_and(|store| {
            store
                .equipped(&self.slot().to_string())
                .is_some_and(|equipped| std::ptr::eq(equipped, self.gear))
        })
    }
}
