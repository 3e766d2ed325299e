//! Spell entity as authored in the campaign catalog.

use serde::{Deserialize, Serialize};

use talewright_domain::SpellId;

/// A spell. Level 0 is a cantrip and never needs a spell slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub mana_cost: String,
    #[serde(default)]
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Spell {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            id: SpellId::new(),
            name: name.into(),
            school: String::new(),
            level,
            effect: String::new(),
            mana_cost: String::new(),
            range: String::new(),
            image: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<SpellId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }
}
