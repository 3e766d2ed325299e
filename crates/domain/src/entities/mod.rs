//! Catalog entities - shared definitions referenced by id from characters

mod creature;
mod gear;
mod item;
mod npc;
mod race;
mod rpg_class;
mod setting;
mod spell;
mod weapon;

pub use creature::Creature;
pub use gear::Gear;
pub use item::{EffectType, Item, StructuredEffect};
pub use npc::Npc;
pub use race::{BodySlot, Race};
pub use rpg_class::RpgClass;
pub use setting::Setting;
pub use spell::Spell;
pub use weapon::Weapon;
