//! Loadout manager - the single mutation authority for character inventories
//!
//! Every equip, unequip and backpack change goes through [`LoadoutManager`].
//! It holds a read-only catalog handle for capability checks; the
//! state transitions themselves live on [`Loadout`](crate::inventory::Loadout)
//! and [`Backpack`](crate::inventory::Backpack).

use crate::aggregates::Character;
use crate::catalog::Catalog;
use crate::error::DomainError;
use crate::events::{BackpackChange, ConsumptionNotice, EquipOutcome, UnequipOutcome};
use crate::types::{BackpackCategory, EquipCategory};
use crate::value_objects::SlotLayout;
use talewright_domain::{GearId, ItemId, WeaponId};

/// Applies loadout operations to characters against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct LoadoutManager<'a> {
    catalog: &'a Catalog,
}

impl<'a> LoadoutManager<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Slot layout for the character's race as the catalog currently
    /// defines it. A race missing from the catalog gets the default layout.
    pub fn slot_layout(&self, character: &Character) -> SlotLayout {
        let race = character.race_id().and_then(|id| self.catalog.race(id));
        SlotLayout::for_race(race)
    }

    // =========================================================================
    // Equip / Unequip
    // =========================================================================

    /// Equip gear into `target_slot`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the gear is not in the catalog
    /// - `SlotMismatch` if the gear is made for a different slot
    /// - `SlotUnavailable` if the race has no such gear slot
    pub fn equip_gear(
        &self,
        character: &mut Character,
        gear_id: &GearId,
        target_slot: &str,
    ) -> Result<EquipOutcome<GearId>, DomainError> {
        let gear = self
            .catalog
            .gear(gear_id)
            .ok_or_else(|| DomainError::not_found("Gear", gear_id.as_str()))?;

        if gear.slot != target_slot {
            return Err(DomainError::slot_mismatch(&gear.slot, target_slot));
        }
        if !self
            .slot_layout(character)
            .has_slot(EquipCategory::Gear, target_slot)
        {
            return Err(DomainError::slot_unavailable(
                EquipCategory::Gear,
                target_slot,
            ));
        }

        Ok(character.gear_mut().equip(gear_id.clone(), target_slot))
    }

    /// Equip gear into the slot its catalog entry names.
    pub fn equip_gear_to_catalog_slot(
        &self,
        character: &mut Character,
        gear_id: &GearId,
    ) -> Result<EquipOutcome<GearId>, DomainError> {
        let slot = self
            .catalog
            .gear(gear_id)
            .map(|g| g.slot.clone())
            .ok_or_else(|| DomainError::not_found("Gear", gear_id.as_str()))?;
        self.equip_gear(character, gear_id, &slot)
    }

    /// Equip a weapon into `target_slot`.
    ///
    /// Weapons fit any weapon slot, so the catalog is not consulted; an id
    /// the catalog no longer knows is moved like any other and simply
    /// renders as unknown.
    ///
    /// # Errors
    ///
    /// `SlotUnavailable` if the race has no such weapon slot
    pub fn equip_weapon(
        &self,
        character: &mut Character,
        weapon_id: &WeaponId,
        target_slot: &str,
    ) -> Result<EquipOutcome<WeaponId>, DomainError> {
        if !self
            .slot_layout(character)
            .has_slot(EquipCategory::Weapon, target_slot)
        {
            return Err(DomainError::slot_unavailable(
                EquipCategory::Weapon,
                target_slot,
            ));
        }

        Ok(character.weapons_mut().equip(weapon_id.clone(), target_slot))
    }

    pub fn unequip_gear(&self, character: &mut Character, slot: &str) -> UnequipOutcome<GearId> {
        character.gear_mut().unequip(slot)
    }

    pub fn unequip_weapon(
        &self,
        character: &mut Character,
        slot: &str,
    ) -> UnequipOutcome<WeaponId> {
        character.weapons_mut().unequip(slot)
    }

    /// Category-dispatching unequip, used by the drag protocol.
    /// Occupant ids come back as plain strings.
    pub fn unequip(
        &self,
        character: &mut Character,
        category: EquipCategory,
        slot: &str,
    ) -> UnequipOutcome<String> {
        match category {
            EquipCategory::Gear => stringify_outcome(self.unequip_gear(character, slot)),
            EquipCategory::Weapon => stringify_outcome(self.unequip_weapon(character, slot)),
        }
    }

    // =========================================================================
    // Backpack
    // =========================================================================

    /// Stack one more unit of a catalog entry in the matching backpack.
    ///
    /// Gear and weapons that are currently worn are not added. Items always
    /// stack.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` is not in the catalog for that category.
    pub fn add_to_backpack(
        &self,
        character: &mut Character,
        category: BackpackCategory,
        id: &str,
    ) -> Result<BackpackChange, DomainError> {
        match category {
            BackpackCategory::Items => {
                let id = ItemId::from(id);
                if self.catalog.item(&id).is_none() {
                    return Err(DomainError::not_found("Item", id.as_str()));
                }
                Ok(character.inventory_mut().add_one(id))
            }
            BackpackCategory::Gear => {
                let id = GearId::from(id);
                if self.catalog.gear(&id).is_none() {
                    return Err(DomainError::not_found("Gear", id.as_str()));
                }
                Ok(character.gear_mut().add_to_backpack(id))
            }
            BackpackCategory::Weapon => {
                let id = WeaponId::from(id);
                if self.catalog.weapon(&id).is_none() {
                    return Err(DomainError::not_found("Weapon", id.as_str()));
                }
                Ok(character.weapons_mut().add_to_backpack(id))
            }
        }
    }

    /// Set the quantity of an existing backpack entry. Zero removes it;
    /// ids not already in the backpack are left alone.
    pub fn set_backpack_quantity(
        &self,
        character: &mut Character,
        category: BackpackCategory,
        id: &str,
        quantity: u32,
    ) -> BackpackChange {
        match category {
            BackpackCategory::Items => character
                .inventory_mut()
                .set_quantity(&ItemId::from(id), quantity),
            BackpackCategory::Gear => character
                .gear_mut()
                .set_backpack_quantity(&GearId::from(id), quantity),
            BackpackCategory::Weapon => character
                .weapons_mut()
                .set_backpack_quantity(&WeaponId::from(id), quantity),
        }
    }

    /// Use one unit of a consumable.
    ///
    /// The item does not need to exist in the catalog; a dangling id is
    /// still consumed and the notice names it "Unknown".
    ///
    /// # Errors
    ///
    /// `NotFound` if the character carries none of the item.
    pub fn use_consumable(
        &self,
        character: &mut Character,
        item_id: &ItemId,
    ) -> Result<ConsumptionNotice, DomainError> {
        let consumed = character
            .inventory_mut()
            .remove_one(item_id)
            .ok_or_else(|| DomainError::not_found("InventoryItem", item_id.as_str()))?;

        let item = self.catalog.item(item_id);
        Ok(ConsumptionNotice {
            item_id: item_id.clone(),
            item_name: item.map(|i| i.name.clone()),
            effects: item.map(|i| i.effect_descriptions()).unwrap_or_default(),
            remaining: consumed.new_quantity().unwrap_or(0),
        })
    }
}

fn stringify_outcome<Id: Into<String>>(outcome: UnequipOutcome<Id>) -> UnequipOutcome<String> {
    match outcome {
        UnequipOutcome::Unequipped { slot, id } => UnequipOutcome::Unequipped {
            slot,
            id: id.into(),
        },
        UnequipOutcome::SlotEmpty { slot } => UnequipOutcome::SlotEmpty { slot },
    }
}
