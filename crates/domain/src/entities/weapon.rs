//! Weapon entity - catalog definition of something a character can wield

use serde::{Deserialize, Serialize};

use talewright_domain::WeaponId;

/// A weapon defined in the campaign catalog.
///
/// Characters reference weapons by id only; the catalog copy is the single
/// source of truth for name and damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub id: WeaponId,
    pub name: String,
    /// Free-form weapon type (e.g., "Martial Melee", "Simple Ranged")
    #[serde(rename = "type", default)]
    pub weapon_type: String,
    /// Base damage expression (e.g., "1d8 slashing")
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: impl Into<String>) -> Self {
        Self {
            id: WeaponId::new(),
            name: name.into(),
            weapon_type: String::new(),
            damage: damage.into(),
            description: String::new(),
            image: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<WeaponId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_type(mut self, weapon_type: impl Into<String>) -> Self {
        self.weapon_type = weapon_type.into();
        self
    }
}
