//! Unified error types for the domain layer
//!
//! Provides a common error type for every loadout and catalog operation,
//! so adapters can surface inline messages without string matching.

use thiserror::Error;

use crate::types::EquipCategory;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The character's race has no such slot for this category
    #[error("This character's race cannot equip {} in the \"{slot}\" slot.", .category.noun())]
    SlotUnavailable {
        category: EquipCategory,
        slot: String,
    },

    /// Gear can only occupy the slot its catalog entry names
    #[error("Gear made for the \"{item_slot}\" slot cannot be worn in the \"{target_slot}\" slot.")]
    SlotMismatch {
        item_slot: String,
        target_slot: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a draft or value object fails its invariants:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Character name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a capability violation for a slot the race does not provide
    pub fn slot_unavailable(category: EquipCategory, slot: impl Into<String>) -> Self {
        Self::SlotUnavailable {
            category,
            slot: slot.into(),
        }
    }

    /// Create a slot mismatch error for gear dropped on the wrong body position
    pub fn slot_mismatch(item_slot: impl Into<String>, target_slot: impl Into<String>) -> Self {
        Self::SlotMismatch {
            item_slot: item_slot.into(),
            target_slot: target_slot.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Whether this error is a capability violation the user should see inline.
    pub fn is_capability_violation(&self) -> bool {
        matches!(self, Self::SlotUnavailable { .. } | Self::SlotMismatch { .. })
    }
}
