extern crate self as talewright_domain;

pub mod types;

pub mod aggregates;
pub mod catalog;
pub mod document;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod inventory;
pub mod value_objects;

pub use aggregates::{Character, CharacterDraft};
pub use catalog::Catalog;
pub use document::CampaignDocument;
pub use entities::{
    BodySlot, Creature, EffectType, Gear, Item, Npc, Race, RpgClass, Setting, Spell,
    StructuredEffect, Weapon,
};
pub use error::DomainError;
pub use events::{BackpackChange, ConsumptionNotice, EquipOutcome, UnequipOutcome};

// Re-export the inventory model
pub use inventory::{
    list_backpack, Backpack, BackpackEntry, BackpackListing, BackpackQuery, DragOrigin,
    DragSession, DraggedItem, DropOutcome, DropTarget, EquipmentSlots, Loadout, LoadoutManager,
};

pub use types::{BackpackCategory, EquipCategory};

// Re-export value objects
pub use value_objects::{
    ability_modifier, derive_combat_stats, ArmorValue, Attributes, CharacterName, CombatStats,
    QuantityChangeResult, QuantityInput, ResourcePool, SlotLayout,
};

// Re-export ID types
pub use ids::{
    CharacterId, ClassId, CreatureId, GearId, ItemId, NpcId, RaceId, SpellId, WeaponId,
};
