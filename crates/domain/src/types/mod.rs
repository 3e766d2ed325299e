//! # Talewright Domain Types
//!
//! Shared vocabulary types used across the loadout model, the drag protocol,
//! and the engine's use cases.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Serializable** - All types derive Serialize/Deserialize

mod category;
pub use category::{BackpackCategory, EquipCategory};
