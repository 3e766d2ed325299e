//! Race entity - owns the body slot layout of its characters

use serde::{Deserialize, Serialize};

use talewright_domain::RaceId;

/// A playable race.
///
/// `body_slots` drives which equipment slots a character of this race has.
/// An empty list means "use the default humanoid layout"
/// (see [`SlotLayout`](crate::value_objects::SlotLayout)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_slots: Vec<BodySlot>,
}

impl Race {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RaceId::new(),
            name: name.into(),
            description: String::new(),
            traits: Vec::new(),
            body_slots: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<RaceId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_gear_slot(mut self, name: impl Into<String>) -> Self {
        self.body_slots.push(BodySlot::gear(name));
        self
    }

    pub fn with_weapon_slot(mut self, name: impl Into<String>) -> Self {
        self.body_slots.push(BodySlot::weapon(name));
        self
    }
}

/// A named body position. Weapon slots hold weapons; all others hold gear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySlot {
    pub name: String,
    #[serde(default)]
    pub is_weapon_slot: bool,
}

impl BodySlot {
    pub fn gear(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_weapon_slot: false,
        }
    }

    pub fn weapon(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_weapon_slot: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_weapon_flag_means_gear_slot() {
        let race: Race = serde_json::from_str(
            r#"{"id":"r1","name":"Centaur","description":"","traits":[],
                "bodySlots":[{"name":"Barding"},{"name":"Main Hand","isWeaponSlot":true}]}"#,
        )
        .unwrap();
        assert_eq!(race.body_slots[0], BodySlot::gear("Barding"));
        assert_eq!(race.body_slots[1], BodySlot::weapon("Main Hand"));
    }

    #[test]
    fn missing_body_slots_load_empty() {
        let race: Race =
            serde_json::from_str(r#"{"id":"r2","name":"Human","description":"","traits":[]}"#)
                .unwrap();
        assert!(race.body_slots.is_empty());
    }
}
