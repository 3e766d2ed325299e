//! Value objects - Immutable objects defined by their attributes

mod armor_value;
mod attributes;
mod combat_stats;
mod names;
mod quantity;
mod resource_pool;
mod slot_layout;

pub use armor_value::ArmorValue;
pub use attributes::{
    ability_modifier, Attributes, CONSTITUTION, DEFAULT_SCORE, DEXTERITY, STRENGTH,
};
pub use combat_stats::{derive_combat_stats, CombatStats};
pub use names::CharacterName;
pub use quantity::{QuantityChangeResult, QuantityInput};
pub use resource_pool::ResourcePool;
pub use slot_layout::{SlotLayout, DEFAULT_GEAR_SLOTS, DEFAULT_WEAPON_SLOTS};
