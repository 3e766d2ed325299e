//! Inventory-related domain events
//!
//! These enums communicate what happened when equipment or backpack state
//! was modified, allowing callers to react appropriately.

use crate::ItemId;

/// Outcome of equipping an id into a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipOutcome<Id> {
    /// The id now occupies the slot
    Equipped {
        slot: String,
        id: Id,
        /// Displaced occupant, returned to the backpack
        previous: Option<Id>,
        /// Whether a backpack unit was consumed (false for a direct equip)
        from_backpack: bool,
    },
    /// The id already occupied that slot; nothing changed
    AlreadyEquipped { slot: String },
}

impl<Id> EquipOutcome<Id> {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Equipped { .. })
    }
}

/// Outcome of clearing a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnequipOutcome<Id> {
    /// The occupant went back to the backpack
    Unequipped { slot: String, id: Id },
    /// Slot was empty or unknown; nothing changed
    SlotEmpty { slot: String },
}

impl<Id> UnequipOutcome<Id> {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Unequipped { .. })
    }
}

/// Outcome of a backpack quantity change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackpackChange {
    /// A new entry was appended
    Added { quantity: u32 },
    /// An existing entry changed quantity
    Updated { from: u32, to: u32 },
    /// The entry was removed
    Removed { previous: u32 },
    /// Nothing changed
    Unchanged,
}

impl BackpackChange {
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Quantity left in the backpack after the change, when known.
    pub fn remaining(&self) -> Option<u32> {
        match self {
            Self::Added { quantity } => Some(*quantity),
            Self::Updated { to, .. } => Some(*to),
            Self::Removed { .. } => Some(0),
            Self::Unchanged => None,
        }
    }
}

/// Signal that a consumable was used.
///
/// Presentation is up to the caller; `message()` renders the editor's
/// classic notice text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumptionNotice {
    pub item_id: ItemId,
    /// Catalog name, `None` when the item no longer exists in the catalog
    pub item_name: Option<String>,
    pub effects: Vec<String>,
    /// Units left after this use
    pub remaining: u32,
}

impl ConsumptionNotice {
    pub fn message(&self) -> String {
        let name = self.item_name.as_deref().unwrap_or("Unknown");
        let effects = if self.effects.is_empty() {
            "No defined effect.".to_string()
        } else {
            self.effects.join(", ")
        };
        format!("Used {name}! Effect: {effects}")
    }
}
