//! Character class entity.

use serde::{Deserialize, Serialize};

use talewright_domain::{ClassId, SpellId};

/// A character class and the spells it grants access to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpgClass {
    pub id: ClassId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spell_ids: Vec<SpellId>,
}

impl RpgClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ClassId::new(),
            name: name.into(),
            description: String::new(),
            abilities: Vec::new(),
            traits: Vec::new(),
            spell_ids: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ClassId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_spell(mut self, spell_id: impl Into<SpellId>) -> Self {
        self.spell_ids.push(spell_id.into());
        self
    }
}
