//! Non-player character record.

use serde::{Deserialize, Serialize};

use talewright_domain::NpcId;

/// An NPC card. Carried so the campaign document round-trips; the loadout
/// model never touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
