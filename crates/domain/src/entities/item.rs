//! Item entity - consumables and other backpack-only objects

use serde::{Deserialize, Serialize};

use talewright_domain::ItemId;

/// A consumable or miscellaneous item. Items stack in the inventory and are
/// never equipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Type of item (e.g., "Potion", "Scroll", "Key")
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub effects: Vec<StructuredEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            item_type: String::new(),
            description: String::new(),
            effects: Vec::new(),
            image: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_effect(mut self, effect_type: EffectType, description: impl Into<String>) -> Self {
        self.effects.push(StructuredEffect {
            effect_type,
            description: description.into(),
        });
        self
    }

    /// Effect descriptions in declaration order.
    pub fn effect_descriptions(&self) -> Vec<String> {
        self.effects.iter().map(|e| e.description.clone()).collect()
    }
}

/// One effect of an item, as authored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredEffect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default)]
    pub description: String,
}

/// Broad effect classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    Healing,
    Damage,
    Buff,
    Debuff,
    Utility,
    /// Fallback for unknown or future effect types
    #[serde(other)]
    Other,
}

impl std::fmt::Display for EffectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healing => write!(f, "Healing"),
            Self::Damage => write!(f, "Damage"),
            Self::Buff => write!(f, "Buff"),
            Self::Debuff => write!(f, "Debuff"),
            Self::Utility => write!(f, "Utility"),
            Self::Other => write!(f, "Other"),
        }
    }
}
