//! Attribute scores (Strength, Dexterity, ...) and their modifiers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const STRENGTH: &str = "Strength";
pub const DEXTERITY: &str = "Dexterity";
pub const CONSTITUTION: &str = "Constitution";

/// Score assumed for an attribute the character does not define.
pub const DEFAULT_SCORE: i32 = 10;

/// Standard ability modifier: `floor((score - 10) / 2)`. Scores are
/// arbitrary integers from the document, so the subtraction saturates.
pub fn ability_modifier(score: i32) -> i32 {
    score.saturating_sub(DEFAULT_SCORE).div_euclid(2)
}

/// Named attribute scores. Names are unique; order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, i32>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three scores every new character starts with.
    pub fn starting() -> Self {
        [STRENGTH, DEXTERITY, CONSTITUTION]
            .into_iter()
            .map(|name| (name.to_string(), DEFAULT_SCORE))
            .collect()
    }

    pub fn with(mut self, name: impl Into<String>, score: i32) -> Self {
        self.set(name, score);
        self
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.0.get(name).copied()
    }

    /// Score for `name`, defaulting to 10 when undefined.
    pub fn score_or_default(&self, name: &str) -> i32 {
        self.get(name).unwrap_or(DEFAULT_SCORE)
    }

    pub fn modifier(&self, name: &str) -> i32 {
        ability_modifier(self.score_or_default(name))
    }

    pub fn set(&mut self, name: impl Into<String>, score: i32) {
        self.0.insert(name.into(), score);
    }

    /// Adds a new attribute at the default score.
    ///
    /// Returns `false` (and changes nothing) for blank or already-present names.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.0.contains_key(name) {
            return false;
        }
        self.0.insert(name.to_string(), DEFAULT_SCORE);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<i32> {
        self.0.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
