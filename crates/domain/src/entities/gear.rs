//! Gear entity - wearable equipment that occupies exactly one body slot

use serde::{Deserialize, Serialize};

use crate::value_objects::ArmorValue;
use talewright_domain::GearId;

/// Wearable gear defined in the campaign catalog.
///
/// # Slot Coupling
///
/// `slot` names the only body slot this gear may occupy. Whether a given
/// character can use that slot depends on the character's race layout, which
/// is checked when equipping, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gear {
    pub id: GearId,
    pub name: String,
    /// Type of gear (e.g., "Light Armor", "Heavy Armor", "Shield", "Clothing")
    #[serde(rename = "type", default)]
    pub gear_type: String,
    /// Body slot this gear is worn in (e.g., "Head", "Chest")
    #[serde(default)]
    pub slot: String,
    /// Armor expression (e.g., "12 + Dex modifier", "2")
    #[serde(default)]
    pub armor_value: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Gear {
    pub fn new(name: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            id: GearId::new(),
            name: name.into(),
            gear_type: String::new(),
            slot: slot.into(),
            armor_value: String::new(),
            description: String::new(),
            image: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<GearId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_type(mut self, gear_type: impl Into<String>) -> Self {
        self.gear_type = gear_type.into();
        self
    }

    pub fn with_armor_value(mut self, armor_value: impl Into<String>) -> Self {
        self.armor_value = armor_value.into();
        self
    }

    /// Parsed view of `armor_value`.
    pub fn armor(&self) -> ArmorValue {
        ArmorValue::parse(&self.armor_value)
    }

    /// Whether this gear counts as a shield for armor class purposes.
    pub fn is_shield(&self) -> bool {
        self.gear_type.to_lowercase().contains("shield")
    }
}
