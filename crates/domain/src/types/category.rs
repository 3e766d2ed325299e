//! Inventory categories.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Categories that can occupy a body slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipCategory {
    Gear,
    Weapon,
}

impl EquipCategory {
    /// Plural noun used in user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Gear => "items",
            Self::Weapon => "weapons",
        }
    }
}

impl std::fmt::Display for EquipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gear => write!(f, "gear"),
            Self::Weapon => write!(f, "weapon"),
        }
    }
}

impl std::str::FromStr for EquipCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gear" => Ok(Self::Gear),
            "weapon" | "weapons" => Ok(Self::Weapon),
            other => Err(DomainError::parse(format!(
                "Unknown equipment category: {other}"
            ))),
        }
    }
}

/// The three backpack sections of a character sheet.
///
/// Serialized names match the editor's filter keys (`items`, `gear`, `weapon`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackpackCategory {
    Items,
    Gear,
    Weapon,
}

impl BackpackCategory {
    /// The matching equipment category, if this section can be worn.
    pub fn equip_category(&self) -> Option<EquipCategory> {
        match self {
            Self::Items => None,
            Self::Gear => Some(EquipCategory::Gear),
            Self::Weapon => Some(EquipCategory::Weapon),
        }
    }
}

impl From<EquipCategory> for BackpackCategory {
    fn from(category: EquipCategory) -> Self {
        match category {
            EquipCategory::Gear => Self::Gear,
            EquipCategory::Weapon => Self::Weapon,
        }
    }
}

impl std::fmt::Display for BackpackCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Items => write!(f, "items"),
            Self::Gear => write!(f, "gear"),
            Self::Weapon => write!(f, "weapon"),
        }
    }
}

impl std::str::FromStr for BackpackCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "items" | "item" => Ok(Self::Items),
            "gear" => Ok(Self::Gear),
            "weapon" | "weapons" => Ok(Self::Weapon),
            other => Err(DomainError::parse(format!(
                "Unknown backpack category: {other}"
            ))),
        }
    }
}
