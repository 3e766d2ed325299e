//! Catalog Store - the campaign's shared entity definitions
//!
//! Characters hold ids only. Every lookup here may fail for a dangling id,
//! and callers treat a failed lookup as "render empty", never as an error.

use serde::{Deserialize, Serialize};

use crate::entities::{Gear, Item, Race, RpgClass, Spell, Weapon};
use talewright_domain::{ClassId, GearId, ItemId, RaceId, SpellId, WeaponId};

/// Read-only (from the loadout model's point of view) catalog of weapons,
/// gear, items, spells, races and classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub gear: Vec<Gear>,
    #[serde(default)]
    pub spells: Vec<Spell>,
    #[serde(default)]
    pub classes: Vec<RpgClass>,
    #[serde(default)]
    pub races: Vec<Race>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapons.push(weapon);
        self
    }

    pub fn with_gear(mut self, gear: Gear) -> Self {
        self.gear.push(gear);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_spell(mut self, spell: Spell) -> Self {
        self.spells.push(spell);
        self
    }

    pub fn with_class(mut self, class: RpgClass) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.races.push(race);
        self
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn weapon(&self, id: &WeaponId) -> Option<&Weapon> {
        self.weapons.iter().find(|w| &w.id == id)
    }

    pub fn gear(&self, id: &GearId) -> Option<&Gear> {
        self.gear.iter().find(|g| &g.id == id)
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn spell(&self, id: &SpellId) -> Option<&Spell> {
        self.spells.iter().find(|s| &s.id == id)
    }

    pub fn race(&self, id: &RaceId) -> Option<&Race> {
        self.races.iter().find(|r| &r.id == id)
    }

    pub fn class(&self, id: &ClassId) -> Option<&RpgClass> {
        self.classes.iter().find(|c| &c.id == id)
    }

    /// Distinct spell levels (cantrips excluded) granted by a class, ascending.
    pub fn spell_levels_for_class(&self, id: &ClassId) -> Vec<u32> {
        let Some(class) = self.class(id) else {
            return Vec::new();
        };
        let mut levels: Vec<u32> = class
            .spell_ids
            .iter()
            .filter_map(|spell_id| self.spell(spell_id))
            .map(|spell| spell.level)
            .filter(|level| *level > 0)
            .collect();
        levels.sort_unstable();
        levels.dedup();
        levels
    }

    // =========================================================================
    // Removal (callers are responsible for cascading into characters)
    // =========================================================================

    pub fn remove_weapon(&mut self, id: &WeaponId) -> Option<Weapon> {
        let idx = self.weapons.iter().position(|w| &w.id == id)?;
        Some(self.weapons.remove(idx))
    }

    pub fn remove_gear(&mut self, id: &GearId) -> Option<Gear> {
        let idx = self.gear.iter().position(|g| &g.id == id)?;
        Some(self.gear.remove(idx))
    }

    pub fn remove_item(&mut self, id: &ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|i| &i.id == id)?;
        Some(self.items.remove(idx))
    }
}
