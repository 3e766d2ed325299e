//! Quantity value objects for backpack bookkeeping

use serde::{Deserialize, Serialize};

/// Result of a quantity subtraction operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityChangeResult {
    /// New quantity after subtraction
    Updated(u32),
    /// Entry is fully depleted (quantity reached zero or below)
    Depleted,
}

impl QuantityChangeResult {
    /// Subtract an amount from a quantity
    pub fn subtract(current: u32, amount: u32) -> Self {
        if amount >= current {
            Self::Depleted
        } else {
            Self::Updated(current - amount)
        }
    }

    /// Check if this result indicates the entry should be removed
    pub fn should_remove(&self) -> bool {
        matches!(self, Self::Depleted)
    }

    /// Get the new quantity, if not depleted
    pub fn new_quantity(&self) -> Option<u32> {
        match self {
            Self::Updated(qty) => Some(*qty),
            Self::Depleted => None,
        }
    }
}

/// Raw text typed into a quantity counter.
///
/// Counter input never fails loudly: an empty field means zero (removal),
/// negative numbers clamp to zero, and anything non-numeric is ignored.
pub struct QuantityInput;

impl QuantityInput {
    /// Interpret counter text. `None` means "ignore this keystroke".
    pub fn parse(raw: &str) -> Option<u32> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(0);
        }
        match trimmed.parse::<i64>() {
            Ok(value) if value <= 0 => Some(0),
            Ok(value) => Some(u32::try_from(value).unwrap_or(u32::MAX)),
            Err(_) => None,
        }
    }

    /// Clamp a signed counter value into a storable quantity.
    pub fn clamp(value: i64) -> u32 {
        if value <= 0 {
            0
        } else {
            u32::try_from(value).unwrap_or(u32::MAX)
        }
    }
}
