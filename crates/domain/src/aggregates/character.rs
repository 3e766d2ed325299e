//! Character aggregate - a player character and its loadout
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: equipment and backpack state can only change through
//!   [`LoadoutManager`](crate::inventory::LoadoutManager)
//! - **Wire format**: serde goes through `CharacterWireFormat`, which is also
//!   where legacy documents are normalized (once, at load time)
//! - **Builder**: new characters come from
//!   [`CharacterDraft`](crate::aggregates::CharacterDraft)

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::{Race, RpgClass};
use crate::inventory::{Backpack, EquipmentSlots, Loadout};
use crate::value_objects::{Attributes, CharacterName, QuantityInput, ResourcePool, SlotLayout};
use talewright_domain::{CharacterId, ClassId, GearId, ItemId, RaceId, SpellId, WeaponId};

/// Hit points and mana a character starts with when the document has none.
const DEFAULT_POOL: i32 = 10;

/// A player character.
///
/// # Invariants
///
/// - Backpack quantities are always > 0 and each id appears once per backpack
///   (enforced by [`Backpack`])
/// - Equipment keys may include stale slots from an earlier race; they are
///   never written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    // Identity
    id: CharacterId,
    name: String,

    // Embedded snapshots, kept for document round-trips. Slot layout resolves
    // the race through the catalog by id.
    race: Option<Race>,
    rpg_class: Option<RpgClass>,

    // Core stats
    level: u32,
    hp: ResourcePool,
    mp: ResourcePool,
    attributes: Attributes,
    spell_slots: BTreeMap<String, ResourcePool>,
    spell_ids: Vec<SpellId>,

    // Flavor
    physical_appearance: String,
    background: String,
    image: Option<String>,

    // Inventory
    inventory: Backpack<ItemId>,
    gear: Loadout<GearId>,
    weapons: Loadout<WeaponId>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a character with default stats and an empty loadout whose
    /// slots follow `layout`.
    pub fn new(name: CharacterName, layout: &SlotLayout) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            race: None,
            rpg_class: None,
            level: 1,
            hp: ResourcePool::full(DEFAULT_POOL),
            mp: ResourcePool::full(DEFAULT_POOL),
            attributes: Attributes::starting(),
            spell_slots: BTreeMap::new(),
            spell_ids: Vec::new(),
            physical_appearance: String::new(),
            background: String::new(),
            image: None,
            inventory: Backpack::new(),
            gear: Loadout::new(EquipmentSlots::empty_for(layout.gear_slots()), Backpack::new()),
            weapons: Loadout::new(
                EquipmentSlots::empty_for(layout.weapon_slots()),
                Backpack::new(),
            ),
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_id(mut self, id: impl Into<CharacterId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.set_race(Some(race));
        self
    }

    pub fn with_inventory(mut self, inventory: Backpack<ItemId>) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_gear_backpack(mut self, backpack: Backpack<GearId>) -> Self {
        self.gear.backpack = backpack;
        self
    }

    pub fn with_weapon_backpack(mut self, backpack: Backpack<WeaponId>) -> Self {
        self.weapons.backpack = backpack;
        self
    }

    // =========================================================================
    // Identity Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn race(&self) -> Option<&Race> {
        self.race.as_ref()
    }

    pub fn race_id(&self) -> Option<&RaceId> {
        self.race.as_ref().map(|r| &r.id)
    }

    #[inline]
    pub fn rpg_class(&self) -> Option<&RpgClass> {
        self.rpg_class.as_ref()
    }

    pub fn class_id(&self) -> Option<&ClassId> {
        self.rpg_class.as_ref().map(|c| &c.id)
    }

    // =========================================================================
    // Stat Accessors
    // =========================================================================

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn hp(&self) -> ResourcePool {
        self.hp
    }

    #[inline]
    pub fn mp(&self) -> ResourcePool {
        self.mp
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Attribute edits never touch the loadout, so direct access is fine.
    #[inline]
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn spell_slots(&self) -> &BTreeMap<String, ResourcePool> {
        &self.spell_slots
    }

    pub fn spell_ids(&self) -> &[SpellId] {
        &self.spell_ids
    }

    pub fn physical_appearance(&self) -> &str {
        &self.physical_appearance
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    // =========================================================================
    // Inventory Accessors
    // =========================================================================

    pub fn inventory(&self) -> &Backpack<ItemId> {
        &self.inventory
    }

    pub fn gear(&self) -> &Loadout<GearId> {
        &self.gear
    }

    pub fn weapons(&self) -> &Loadout<WeaponId> {
        &self.weapons
    }

    pub fn equipped_gear(&self) -> &EquipmentSlots<GearId> {
        self.gear.equipped()
    }

    pub fn equipped_weapons(&self) -> &EquipmentSlots<WeaponId> {
        self.weapons.equipped()
    }

    pub(crate) fn inventory_mut(&mut self) -> &mut Backpack<ItemId> {
        &mut self.inventory
    }

    pub(crate) fn gear_mut(&mut self) -> &mut Loadout<GearId> {
        &mut self.gear
    }

    pub(crate) fn weapons_mut(&mut self) -> &mut Loadout<WeaponId> {
        &mut self.weapons
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn rename(&mut self, name: CharacterName) {
        self.name = name.into();
    }

    /// Change race. Slots of the new layout get empty keys; slots of the old
    /// layout stay in place (and keep their occupants) until explicitly
    /// unequipped.
    pub fn set_race(&mut self, race: Option<Race>) {
        let layout = SlotLayout::for_race(race.as_ref());
        self.gear.equipped.ensure_slots(layout.gear_slots());
        self.weapons.equipped.ensure_slots(layout.weapon_slots());
        self.race = race;
    }

    pub fn set_class(&mut self, class: Option<RpgClass>) {
        self.rpg_class = class;
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    pub fn set_hp(&mut self, hp: ResourcePool) {
        self.hp = hp;
    }

    pub fn set_mp(&mut self, mp: ResourcePool) {
        self.mp = mp;
    }

    pub fn set_appearance(&mut self, appearance: impl Into<String>) {
        self.physical_appearance = appearance.into();
    }

    pub fn set_background(&mut self, background: impl Into<String>) {
        self.background = background.into();
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
    }

    /// Ensure a spell slot entry exists for every level in `levels`.
    /// Existing entries (and levels no longer granted) are left alone.
    pub fn sync_spell_slot_levels(&mut self, levels: &[u32]) {
        for level in levels {
            self.spell_slots.entry(level.to_string()).or_default();
        }
    }

    /// Set the maximum for a spell level, creating the entry if needed.
    pub fn set_spell_slot_max(&mut self, level: u32, max: u32) {
        let max = i32::try_from(max).unwrap_or(i32::MAX);
        self.spell_slots.entry(level.to_string()).or_default().max = max;
    }

    /// Spend (negative) or recover (positive) spell slots, clamped to `0..=max`.
    pub fn adjust_spell_slots(&mut self, level: u32, delta: i32) {
        self.spell_slots
            .entry(level.to_string())
            .or_default()
            .adjust_current(delta);
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that matches the document layout
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterWireFormat {
    id: CharacterId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    race: Option<Race>,
    #[serde(default)]
    rpg_class: Option<RpgClass>,
    #[serde(default = "default_level")]
    level: u32,
    #[serde(default = "default_pool")]
    hp: ResourcePool,
    #[serde(default = "default_pool")]
    mp: ResourcePool,
    #[serde(default)]
    attributes: Attributes,
    #[serde(default)]
    spell_slots: BTreeMap<String, ResourcePool>,
    #[serde(default)]
    physical_appearance: String,
    #[serde(default)]
    background: String,
    #[serde(default)]
    spell_ids: Vec<SpellId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default)]
    inventory: Vec<ItemEntryWire>,
    #[serde(default)]
    equipped_gear: EquipmentSlots<GearId>,
    #[serde(default)]
    gear_ids: Vec<GearEntryWire>,
    #[serde(default)]
    weapon_ids: Vec<WeaponEntryWire>,
    #[serde(default)]
    equipped_weapons: EquipmentSlots<WeaponId>,
}

fn default_level() -> u32 {
    1
}

fn default_pool() -> ResourcePool {
    ResourcePool::full(DEFAULT_POOL)
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemEntryWire {
    item_id: ItemId,
    #[serde(default = "default_quantity")]
    quantity: i64,
}

/// Older documents stored gear backpack entries as bare id strings.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum GearEntryWire {
    #[serde(rename_all = "camelCase")]
    Counted {
        gear_id: GearId,
        #[serde(default = "default_quantity")]
        quantity: i64,
    },
    Bare(GearId),
}

/// Older documents stored weapon backpack entries as bare id strings.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WeaponEntryWire {
    #[serde(rename_all = "camelCase")]
    Counted {
        weapon_id: WeaponId,
        #[serde(default = "default_quantity")]
        quantity: i64,
    },
    Bare(WeaponId),
}

fn default_quantity() -> i64 {
    1
}

impl GearEntryWire {
    fn normalize(self) -> (GearId, u32) {
        match self {
            Self::Counted { gear_id, quantity } => (gear_id, QuantityInput::clamp(quantity)),
            Self::Bare(gear_id) => (gear_id, 1),
        }
    }
}

impl WeaponEntryWire {
    fn normalize(self) -> (WeaponId, u32) {
        match self {
            Self::Counted {
                weapon_id,
                quantity,
            } => (weapon_id, QuantityInput::clamp(quantity)),
            Self::Bare(weapon_id) => (weapon_id, 1),
        }
    }
}

impl Serialize for Character {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = CharacterWireFormat {
            id: self.id.clone(),
            name: self.name.clone(),
            race: self.race.clone(),
            rpg_class: self.rpg_class.clone(),
            level: self.level,
            hp: self.hp,
            mp: self.mp,
            attributes: self.attributes.clone(),
            spell_slots: self.spell_slots.clone(),
            physical_appearance: self.physical_appearance.clone(),
            background: self.background.clone(),
            spell_ids: self.spell_ids.clone(),
            image: self.image.clone(),
            inventory: self
                .inventory
                .iter()
                .map(|e| ItemEntryWire {
                    item_id: e.id.clone(),
                    quantity: i64::from(e.quantity),
                })
                .collect(),
            equipped_gear: self.gear.equipped.clone(),
            gear_ids: self
                .gear
                .backpack
                .iter()
                .map(|e| GearEntryWire::Counted {
                    gear_id: e.id.clone(),
                    quantity: i64::from(e.quantity),
                })
                .collect(),
            weapon_ids: self
                .weapons
                .backpack
                .iter()
                .map(|e| WeaponEntryWire::Counted {
                    weapon_id: e.id.clone(),
                    quantity: i64::from(e.quantity),
                })
                .collect(),
            equipped_weapons: self.weapons.equipped.clone(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Character {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CharacterWireFormat::deserialize(deserializer)?;

        let inventory = Backpack::from_entries(
            wire.inventory
                .into_iter()
                .map(|e| (e.item_id, QuantityInput::clamp(e.quantity))),
        );
        let gear_backpack =
            Backpack::from_entries(wire.gear_ids.into_iter().map(GearEntryWire::normalize));
        let weapon_backpack =
            Backpack::from_entries(wire.weapon_ids.into_iter().map(WeaponEntryWire::normalize));

        Ok(Character {
            id: wire.id,
            name: wire.name,
            race: wire.race,
            rpg_class: wire.rpg_class,
            level: wire.level,
            hp: wire.hp,
            mp: wire.mp,
            attributes: wire.attributes,
            spell_slots: wire.spell_slots,
            spell_ids: wire.spell_ids,
            physical_appearance: wire.physical_appearance,
            background: wire.background,
            image: wire.image,
            inventory,
            gear: Loadout::new(wire.equipped_gear, gear_backpack),
            weapons: Loadout::new(wire.equipped_weapons, weapon_backpack),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
