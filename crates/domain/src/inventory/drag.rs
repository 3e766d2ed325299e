//! Drag transfer protocol between equipment slots and the backpack
//!
//! A [`DragSession`] is transient UI state. It never mutates a character
//! itself: a drop validates the gesture and issues exactly one
//! [`LoadoutManager`] call.

use std::str::FromStr;

use crate::aggregates::Character;
use crate::error::DomainError;
use crate::inventory::LoadoutManager;
use crate::types::EquipCategory;
use talewright_domain::{GearId, WeaponId};

const SLOT_PREFIX: &str = "slot";
const BACKPACK_TARGET: &str = "backpack";

/// Where a drag started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOrigin {
    Slot(String),
    Backpack,
}

/// The thing being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraggedItem {
    pub category: EquipCategory,
    pub id: String,
    pub origin: DragOrigin,
}

impl DraggedItem {
    pub fn from_backpack(category: EquipCategory, id: impl Into<String>) -> Self {
        Self {
            category,
            id: id.into(),
            origin: DragOrigin::Backpack,
        }
    }

    pub fn from_slot(category: EquipCategory, id: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            category,
            id: id.into(),
            origin: DragOrigin::Slot(slot.into()),
        }
    }
}

/// Where a drag may end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Slot(String),
    Backpack,
}

impl FromStr for DropTarget {
    type Err = DomainError;

    /// Parses element ids of the form `slot-<name>`, `backpack` or
    /// `backpack-<zone>` (the sheet uses `backpack-main`). Only the first
    /// hyphen separates, so slot names may contain hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, rest) = match s.split_once('-') {
            Some((prefix, rest)) => (prefix, Some(rest)),
            None => (s, None),
        };
        match (prefix, rest) {
            (BACKPACK_TARGET, _) => Ok(Self::Backpack),
            (SLOT_PREFIX, Some(name)) if !name.is_empty() => Ok(Self::Slot(name.to_string())),
            _ => Err(DomainError::parse(format!("Unknown drop target: {s}"))),
        }
    }
}

impl std::fmt::Display for DropTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slot(name) => write!(f, "{SLOT_PREFIX}-{name}"),
            Self::Backpack => write!(f, "{BACKPACK_TARGET}"),
        }
    }
}

/// What a drop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dragged id now occupies `slot`
    Equipped { category: EquipCategory, slot: String },
    /// The origin slot was emptied into the backpack
    Unequipped { category: EquipCategory, slot: String },
    /// The manager refused the transfer; nothing changed
    Rejected(DomainError),
    /// Not a meaningful gesture; nothing changed
    Ignored,
}

/// Drag state: the active item and the target currently hovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    dragged: Option<DraggedItem>,
    hovered: Option<DropTarget>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, item: DraggedItem) {
        self.dragged = Some(item);
        self.hovered = None;
    }

    pub fn drag_over(&mut self, target: DropTarget) {
        if self.dragged.is_some() {
            self.hovered = Some(target);
        }
    }

    pub fn drag_leave(&mut self) {
        self.hovered = None;
    }

    pub fn end(&mut self) {
        self.dragged = None;
        self.hovered = None;
    }

    pub fn dragged(&self) -> Option<&DraggedItem> {
        self.dragged.as_ref()
    }

    pub fn hovered(&self) -> Option<&DropTarget> {
        self.hovered.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Finish the drag on `target`. The session always ends, whatever
    /// the outcome.
    pub fn drop(
        &mut self,
        target: &DropTarget,
        manager: &LoadoutManager<'_>,
        character: &mut Character,
    ) -> DropOutcome {
        let dragged = self.dragged.take();
        self.end();
        let Some(item) = dragged else {
            return DropOutcome::Ignored;
        };

        match (target, &item.origin) {
            // From a slot the origin keeps its occupant; the target gets one too
            (DropTarget::Slot(slot), _) => equip_into(&item, slot, manager, character),
            (DropTarget::Backpack, DragOrigin::Slot(origin)) => {
                let outcome = manager.unequip(character, item.category, origin);
                if outcome.changed() {
                    DropOutcome::Unequipped {
                        category: item.category,
                        slot: origin.clone(),
                    }
                } else {
                    DropOutcome::Ignored
                }
            }
            (DropTarget::Backpack, DragOrigin::Backpack) => DropOutcome::Ignored,
        }
    }
}

fn equip_into(
    item: &DraggedItem,
    slot: &str,
    manager: &LoadoutManager<'_>,
    character: &mut Character,
) -> DropOutcome {
    let result = match item.category {
        EquipCategory::Gear => manager
            .equip_gear(character, &GearId::from(item.id.as_str()), slot)
            .map(|o| o.changed()),
        EquipCategory::Weapon => manager
            .equip_weapon(character, &WeaponId::from(item.id.as_str()), slot)
            .map(|o| o.changed()),
    };

    match result {
        Ok(true) => DropOutcome::Equipped {
            category: item.category,
            slot: slot.to_string(),
        },
        Ok(false) => DropOutcome::Ignored,
        Err(err) => DropOutcome::Rejected(err),
    }
}
