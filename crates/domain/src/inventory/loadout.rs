//! Loadout - equipment slots and backpack of one category, moved as a unit

use crate::events::{BackpackChange, EquipOutcome, UnequipOutcome};
use crate::inventory::{Backpack, EquipmentSlots};

/// Paper-doll slots plus the backpack they exchange units with.
///
/// All transitions here move whole units between the two halves; none of
/// them consult the catalog or the race layout. Capability checks belong to
/// [`LoadoutManager`](crate::inventory::LoadoutManager).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loadout<Id: Ord> {
    pub(crate) equipped: EquipmentSlots<Id>,
    pub(crate) backpack: Backpack<Id>,
}

impl<Id: Ord> Default for Loadout<Id> {
    fn default() -> Self {
        Self {
            equipped: EquipmentSlots::default(),
            backpack: Backpack::default(),
        }
    }
}

impl<Id: Clone + Ord> Loadout<Id> {
    pub fn new(equipped: EquipmentSlots<Id>, backpack: Backpack<Id>) -> Self {
        Self { equipped, backpack }
    }

    pub fn equipped(&self) -> &EquipmentSlots<Id> {
        &self.equipped
    }

    pub fn backpack(&self) -> &Backpack<Id> {
        &self.backpack
    }

    /// Units of `id` owned: slots it occupies plus backpack quantity.
    pub fn total_owned(&self, id: &Id) -> u32 {
        self.equipped
            .count_of(id)
            .saturating_add(self.backpack.quantity(id))
    }

    /// Move one unit of `id` into `slot`, returning any displaced occupant
    /// to the backpack.
    pub(crate) fn equip(&mut self, id: Id, slot: &str) -> EquipOutcome<Id> {
        if self.equipped.get(slot) == Some(&id) {
            return EquipOutcome::AlreadyEquipped {
                slot: slot.to_string(),
            };
        }

        let from_backpack = self.backpack.remove_one(&id).is_some();
        let previous = self.equipped.set(slot, id.clone());
        if let Some(displaced) = &previous {
            self.backpack.add_one(displaced.clone());
        }

        EquipOutcome::Equipped {
            slot: slot.to_string(),
            id,
            previous,
            from_backpack,
        }
    }

    /// Move the occupant of `slot` back to the backpack.
    pub(crate) fn unequip(&mut self, slot: &str) -> UnequipOutcome<Id> {
        match self.equipped.clear(slot) {
            Some(id) => {
                self.backpack.add_one(id.clone());
                UnequipOutcome::Unequipped {
                    slot: slot.to_string(),
                    id,
                }
            }
            None => UnequipOutcome::SlotEmpty {
                slot: slot.to_string(),
            },
        }
    }

    /// Stack one more unit in the backpack, unless `id` is being worn.
    pub(crate) fn add_to_backpack(&mut self, id: Id) -> BackpackChange {
        if self.equipped.contains_id(&id) {
            return BackpackChange::Unchanged;
        }
        self.backpack.add_one(id)
    }

    pub(crate) fn set_backpack_quantity(&mut self, id: &Id, quantity: u32) -> BackpackChange {
        self.backpack.set_quantity(id, quantity)
    }

    /// Remove every trace of `id` (catalog delete cascade). Returns whether
    /// anything changed.
    pub(crate) fn purge(&mut self, id: &Id) -> bool {
        let removed = self.backpack.remove(id).is_some();
        let cleared = self.equipped.clear_id(id) > 0;
        removed || cleared
    }
}
