//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//!
//! Loadout mutations are the exception to "methods on the aggregate": they
//! need the catalog, so they live on
//! [`LoadoutManager`](crate::inventory::LoadoutManager) and reach the
//! character through crate-private accessors.

pub mod character;
pub mod character_draft;

pub use character::Character;
pub use character_draft::CharacterDraft;
