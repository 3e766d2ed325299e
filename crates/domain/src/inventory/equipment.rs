//! Equipment state - which id occupies which body slot

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Slot name to optional occupant, for one category.
///
/// Keys may include slots that are no longer part of the character's race
/// layout (after a race change). Such stale keys are kept and rendered, but
/// the loadout manager never writes to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentSlots<Id: Ord> {
    slots: BTreeMap<String, Option<Id>>,
}

impl<Id: Ord> Default for EquipmentSlots<Id> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }
}

impl<Id: Clone + Ord> EquipmentSlots<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty slots for every name in `slot_names`.
    pub fn empty_for(slot_names: &[String]) -> Self {
        let mut equipment = Self::new();
        equipment.ensure_slots(slot_names);
        equipment
    }

    /// Occupant of `slot`, if any.
    pub fn get(&self, slot: &str) -> Option<&Id> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn is_occupied(&self, slot: &str) -> bool {
        self.get(slot).is_some()
    }

    /// Put `id` into `slot`, returning the previous occupant.
    pub fn set(&mut self, slot: &str, id: Id) -> Option<Id> {
        self.slots
            .insert(slot.to_string(), Some(id))
            .flatten()
    }

    /// Empty `slot`, returning its occupant. Unknown or already-empty
    /// slots are left exactly as they were.
    pub fn clear(&mut self, slot: &str) -> Option<Id> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Whether `id` occupies any slot.
    pub fn contains_id(&self, id: &Id) -> bool {
        self.slots.values().any(|occupant| occupant.as_ref() == Some(id))
    }

    /// Number of slots `id` occupies.
    pub fn count_of(&self, id: &Id) -> u32 {
        let count = self
            .slots
            .values()
            .filter(|occupant| occupant.as_ref() == Some(id))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Occupied slots as `(slot, id)` pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (&str, &Id)> {
        self.slots
            .iter()
            .filter_map(|(slot, occupant)| occupant.as_ref().map(|id| (slot.as_str(), id)))
    }

    /// All known slot names, occupied or not.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Add an empty key for every slot name not yet present.
    pub fn ensure_slots(&mut self, slot_names: &[String]) {
        for name in slot_names {
            self.slots.entry(name.clone()).or_insert(None);
        }
    }

    /// Empty every slot holding `id`, keeping the keys. Returns how many
    /// slots were cleared.
    pub fn clear_id(&mut self, id: &Id) -> u32 {
        let mut cleared = 0;
        for occupant in self.slots.values_mut() {
            if occupant.as_ref() == Some(id) {
                *occupant = None;
                cleared += 1;
            }
        }
        cleared
    }
}

impl<Id: Ord> FromIterator<(String, Option<Id>)> for EquipmentSlots<Id> {
    fn from_iter<T: IntoIterator<Item = (String, Option<Id>)>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
