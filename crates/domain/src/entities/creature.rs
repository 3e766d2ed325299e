//! Creature (monster) stat card.

use serde::{Deserialize, Serialize};

use talewright_domain::CreatureId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    /// e.g., "Beast", "Monstrosity", "Undead"
    #[serde(rename = "type", default)]
    pub creature_type: String,
    /// e.g., "1/4", "5 (1,800 XP)"
    #[serde(default)]
    pub challenge_rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_bonus: Option<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
