//! Campaign world setting.

use serde::{Deserialize, Serialize};

/// World-level prose: name, lore and history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    #[serde(default)]
    pub world_name: String,
    #[serde(default)]
    pub lore: String,
    #[serde(default)]
    pub history: String,
}
