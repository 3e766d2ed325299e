//! Derived combat stats (armor class, attack bonus, damage)

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::inventory::EquipmentSlots;
use crate::value_objects::{ability_modifier, Attributes, DEXTERITY, STRENGTH};
use talewright_domain::{GearId, WeaponId};

/// Base armor class with no chest armor, and the fallback when chest armor
/// names no number.
const UNARMORED_BASE: i32 = 10;

const CHEST_SLOT: &str = "Chest";
const MAIN_HAND_SLOT: &str = "Main Hand";

/// Read-only stats shown on the character sheet. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatStats {
    pub armor_class: i32,
    pub attack_bonus: i32,
    pub damage: String,
}

impl CombatStats {
    /// Attack bonus with an explicit sign, e.g. `+2` or `-1`.
    pub fn attack_bonus_label(&self) -> String {
        if self.attack_bonus >= 0 {
            format!("+{}", self.attack_bonus)
        } else {
            self.attack_bonus.to_string()
        }
    }
}

fn signed_term(modifier: i32) -> String {
    let sign = if modifier >= 0 { '+' } else { '-' };
    format!("{sign} {}", modifier.unsigned_abs())
}

/// Compute combat stats from attributes and equipment.
///
/// Strength drives every weapon. Only the `Chest` gear slot and shields
/// affect armor class; only the `Main Hand` weapon affects damage. Ids that
/// no longer resolve in the catalog contribute nothing.
pub fn derive_combat_stats(
    attributes: &Attributes,
    gear: &EquipmentSlots<GearId>,
    weapons: &EquipmentSlots<WeaponId>,
    catalog: &Catalog,
) -> CombatStats {
    let str_mod = ability_modifier(attributes.score_or_default(STRENGTH));
    let dex_mod = ability_modifier(attributes.score_or_default(DEXTERITY));

    let mut armor_class = match gear.get(CHEST_SLOT).and_then(|id| catalog.gear(id)) {
        Some(chest) => {
            let armor = chest.armor();
            let dex = if armor.adds_dex() { dex_mod } else { 0 };
            armor.base_or(UNARMORED_BASE).saturating_add(dex)
        }
        None => UNARMORED_BASE.saturating_add(dex_mod),
    };

    // Armor values are free text; huge numbers pin at i32::MAX
    armor_class = gear
        .occupied()
        .filter(|(slot, _)| *slot != CHEST_SLOT)
        .filter_map(|(_, id)| catalog.gear(id))
        .filter(|g| g.is_shield())
        .map(|g| g.armor().base_or(0))
        .fold(armor_class, i32::saturating_add);

    let damage = match weapons.get(MAIN_HAND_SLOT).and_then(|id| catalog.weapon(id)) {
        Some(weapon) if str_mod == 0 => weapon.damage.clone(),
        Some(weapon) => format!("{} {}", weapon.damage, signed_term(str_mod)),
        None => format!("1 {}", signed_term(str_mod)),
    };

    CombatStats {
        armor_class,
        attack_bonus: str_mod,
        damage,
    }
}
