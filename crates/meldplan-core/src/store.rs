//! Owning collection of gear instances

use crate::error::{Error, Result};
use crate::{Env, GameData, Gear, GearId, GearView, Materia, MateriaSlots};
use indexmap::IndexMap;

/// The gears a character owns and which of them is equipped per slot
#[derive(Debug, Clone, Default)]
pub struct GearStore {
    /// All gear instances by id
    gears: IndexMap<GearId, Gear>,
    /// Equipment slot (as string) -> equipped gear id
    equipped: IndexMap<String, GearId>,
}

impl GearStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gear instance and add it to the store
    ///
    /// Fails with [`Error::DuplicateGear`] if an instance with the same id is
    /// already owned; the existing instance is left untouched.
    pub fn create(
        &mut self,
        id: impl Into<GearId>,
        materias: impl Into<MateriaSlots>,
        data: &GameData,
    ) -> Result<&mut Gear> {
        let id = id.into();
        if self.gears.contains_key(&id) {
            return Err(Error::DuplicateGear(id));
        }
        let gear = Gear::create(id, materias, data)?;
        self.gears.insert(id, gear);
        Ok(&mut self.gears[&id])
    }

    /// Get a gear by id
    pub fn get(&self, id: GearId) -> Option<&Gear> {
        self.gears.get(&id)
    }

    /// Get a mutable reference to a gear
    pub fn get_mut(&mut self, id: GearId) -> Option<&mut Gear> {
        self.gears.get_mut(&id)
    }

    /// Remove a gear, unequipping it if needed
    pub fn remove(&mut self, id: GearId) -> Option<Gear> {
        let gear = self.gears.shift_remove(&id)?;
        self.equipped.retain(|_, equipped| *equipped != id);
        Some(gear)
    }

    /// Derived views of an owned gear
    pub fn view<'a>(&'a self, id: GearId, env: Env<'a>) -> Result<GearView<'a>> {
        let gear = self.gears.get(&id).ok_or(Error::GearNotOwned(id))?;
        GearView::resolve(gear, env, Some(self))
    }

    /// Put an owned gear into its equipment slot
    pub fn equip(&mut self, id: GearId, data: &GameData) -> Result<()> {
        if !self.gears.contains_key(&id) {
            return Err(Error::GearNotOwned(id));
        }
        let slot = data.lookup(id)?.placed_slot(id);
        self.equipped.insert(slot.to_string(), id);
        Ok(())
    }

    /// The gear equipped at a slot key
    pub fn equipped(&self, slot: &str) -> Option<&Gear> {
        self.equipped.get(slot).and_then(|id| self.gears.get(id))
    }

    /// Replace one materia of an owned gear after checking it against the grade table
    pub fn meld(
        &mut self,
        id: GearId,
        index: usize,
        materia: Materia,
        data: &GameData,
    ) -> Result<Materia> {
        if !materia.is_empty() && data.materia_grades.resolve(&materia).is_none() {
            return Err(Error::InvalidMateria(format!("{:?}", materia)));
        }
        self.gears
            .get_mut(&id)
            .ok_or(Error::GearNotOwned(id))?
            .set_materia(index, materia)
    }

    /// Get all gears
    pub fn iter(&self) -> impl Iterator<Item = &Gear> {
        self.gears.values()
    }

    /// Get the number of gears
    pub fn len(&self) -> usize {
        self.gears.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.gears.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::stat_map;
    use crate::{GearDef, Setting, Stat};

    fn data() -> GameData {
        let mut data = GameData::new();
        data.catalog.insert(
            GearDef::new(100, "Ring", 510, 12)
                .with_stats(stat_map([("CRT", 50)]))
                .with_materia_slot(2, false),
        );
        data.catalog.insert(GearDef::new(200, "Other Ring", 510, 12).with_materia_slot(2, false));
        data.catalog.insert(GearDef::new(300, "Body", 510, 4));
        data.materia_grades.insert("CRT", vec![1, 2, 4, 6, 12, 9, 16, 36]);
        data
    }

    #[test]
    fn test_equip_and_query() {
        let data = data();
        let setting = Setting::default();
        let env = Env::new(&data, &setting);
        let mut store = GearStore::new();
        store.create(100, MateriaSlots::default(), &data).unwrap();
        store.create(-100, MateriaSlots::default(), &data).unwrap();
        store.create(300, MateriaSlots::default(), &data).unwrap();

        store.equip(GearId::new(100), &data).unwrap();
        store.equip(GearId::new(-100), &data).unwrap();

        assert!(store.view(GearId::new(100), env).unwrap().is_equipped());
        assert!(store.view(GearId::new(-100), env).unwrap().is_equipped());
        assert!(!store.view(GearId::new(300), env).unwrap().is_equipped());
        assert_eq!(store.equipped("12").map(Gear::id), Some(GearId::new(100)));
        assert_eq!(store.equipped("-12").map(Gear::id), Some(GearId::new(-100)));
    }

    #[test]
    fn test_equip_replaces_slot() {
        let data = data();
        let setting = Setting::default();
        let env = Env::new(&data, &setting);
        let mut store = GearStore::new();
        store.create(100, MateriaSlots::default(), &data).unwrap();
        store.create(200, MateriaSlots::default(), &data).unwrap();

        store.equip(GearId::new(100), &data).unwrap();
        store.equip(GearId::new(200), &data).unwrap();

        assert!(!store.view(GearId::new(100), env).unwrap().is_equipped());
        assert!(store.view(GearId::new(200), env).unwrap().is_equipped());
    }

    #[test]
    fn test_is_equipped_uses_identity() {
        let data = data();
        let setting = Setting::default();
        let env = Env::new(&data, &setting);
        let mut store = GearStore::new();
        store.create(100, MateriaSlots::default(), &data).unwrap();
        store.equip(GearId::new(100), &data).unwrap();

        // an equal copy outside the store is a different instance
        let copy = store.get(GearId::new(100)).unwrap().clone();
        assert_eq!(&copy, store.get(GearId::new(100)).unwrap());
        assert!(!copy.view(env).unwrap().is_equipped());

        let other_store = store.clone();
        assert!(other_store.view(GearId::new(100), env).unwrap().is_equipped());
        assert!(!GearView::resolve(&copy, env, Some(&store)).unwrap().is_equipped());
    }

    #[test]
    fn test_view_requires_ownership() {
        let data = data();
        let setting = Setting::default();
        let store = GearStore::new();
        let err = store.view(GearId::new(100), Env::new(&data, &setting)).unwrap_err();
        assert_eq!(err, Error::GearNotOwned(GearId::new(100)));
    }

    #[test]
    fn test_create_unknown_gear() {
        let data = data();
        let mut store = GearStore::new();
        assert!(store.create(999, MateriaSlots::default(), &data).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_rejects_owned_id() {
        let data = data();
        let setting = Setting::default();
        let env = Env::new(&data, &setting);
        let mut store = GearStore::new();
        store.create(100, vec![Materia::new("CRT", 8)], &data).unwrap();
        store.equip(GearId::new(100), &data).unwrap();

        let err = store.create(100, MateriaSlots::default(), &data).unwrap_err();
        assert_eq!(err, Error::DuplicateGear(GearId::new(100)));

        // the equipped instance and its materia survive
        let view = store.view(GearId::new(100), env).unwrap();
        assert!(view.is_equipped());
        assert_eq!(view.gear().materias().get(0), Some(&Materia::new("CRT", 8)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_unequips() {
        let data = data();
        let mut store = GearStore::new();
        store.create(100, MateriaSlots::default(), &data).unwrap();
        store.equip(GearId::new(100), &data).unwrap();

        assert!(store.remove(GearId::new(100)).is_some());
        assert!(store.equipped("12").is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_meld() {
        let data = data();
        let setting = Setting::default();
        let mut store = GearStore::new();
        store.create(100, MateriaSlots::default(), &data).unwrap();
        let id = GearId::new(100);

        store.meld(id, 0, Materia::new("CRT", 6), &data).unwrap();
        let stats = store.view(id, Env::new(&data, &setting)).unwrap().stats();
        assert_eq!(stats.get(&Stat::new("CRT")), Some(&59));

        assert!(matches!(
            store.meld(id, 1, Materia::new("CRT", 9), &data),
            Err(Error::InvalidMateria(_))
        ));
        assert!(matches!(
            store.meld(id, 1, Materia::new("SPS", 1), &data),
            Err(Error::InvalidMateria(_))
        ));
        assert_eq!(
            store.meld(id, 2, Materia::EMPTY, &data),
            Err(Error::SlotOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            store.meld(GearId::new(200), 0, Materia::EMPTY, &data),
            Err(Error::GearNotOwned(GearId::new(200)))
        );
    }
}
