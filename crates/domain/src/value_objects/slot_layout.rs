//! Race-driven equipment slot layout

use serde::{Deserialize, Serialize};

use crate::entities::Race;
use crate::types::EquipCategory;

/// Gear slots used when a race defines no body slots.
pub const DEFAULT_GEAR_SLOTS: [&str; 6] = ["Head", "Chest", "Legs", "Hands", "Feet", "Accessory"];

/// Weapon slots used when a race defines no body slots.
pub const DEFAULT_WEAPON_SLOTS: [&str; 2] = ["Main Hand", "Off Hand"];

/// The body slots a character can fill, split into gear and weapon slots.
///
/// # Invariants
///
/// - Slot names are unique within each list
/// - Order follows the race's `bodySlots` declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotLayout {
    gear_slots: Vec<String>,
    weapon_slots: Vec<String>,
}

impl SlotLayout {
    /// Derive the layout for a race. `None` or a race without body slots
    /// yields the default humanoid layout.
    pub fn for_race(race: Option<&Race>) -> Self {
        let Some(race) = race.filter(|r| !r.body_slots.is_empty()) else {
            return Self::fallback();
        };

        let mut layout = Self {
            gear_slots: Vec::new(),
            weapon_slots: Vec::new(),
        };
        for slot in &race.body_slots {
            let target = if slot.is_weapon_slot {
                &mut layout.weapon_slots
            } else {
                &mut layout.gear_slots
            };
            if !target.iter().any(|existing| existing == &slot.name) {
                target.push(slot.name.clone());
            }
        }
        layout
    }

    pub fn fallback() -> Self {
        Self {
            gear_slots: DEFAULT_GEAR_SLOTS.iter().map(|s| s.to_string()).collect(),
            weapon_slots: DEFAULT_WEAPON_SLOTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn gear_slots(&self) -> &[String] {
        &self.gear_slots
    }

    pub fn weapon_slots(&self) -> &[String] {
        &self.weapon_slots
    }

    pub fn slots(&self, category: EquipCategory) -> &[String] {
        match category {
            EquipCategory::Gear => &self.gear_slots,
            EquipCategory::Weapon => &self.weapon_slots,
        }
    }

    pub fn has_slot(&self, category: EquipCategory, slot: &str) -> bool {
        self.slots(category).iter().any(|s| s == slot)
    }
}
