//! Campaign document - the whole persisted editor state

use serde::{Deserialize, Serialize};

use crate::aggregates::Character;
use crate::catalog::Catalog;
use crate::entities::{Creature, Npc, Setting};
use crate::error::DomainError;
use talewright_domain::{CharacterId, GearId, ItemId, WeaponId};

/// Everything the editor stores under one key: world setting, catalog,
/// NPCs, creatures and player characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDocument {
    #[serde(default)]
    pub setting: Setting,
    #[serde(flatten)]
    pub catalog: Catalog,
    #[serde(default)]
    pub npcs: Vec<Npc>,
    #[serde(default)]
    pub creatures: Vec<Creature>,
    #[serde(default)]
    characters: Vec<Character>,
}

impl CampaignDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    // =========================================================================
    // Characters
    // =========================================================================

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id() == id)
    }

    /// Borrow the catalog and one character at the same time, so loadout
    /// operations can run against the document's own catalog.
    pub fn character_with_catalog(
        &mut self,
        id: &CharacterId,
    ) -> Option<(&Catalog, &mut Character)> {
        let character = self.characters.iter_mut().find(|c| c.id() == id)?;
        Some((&self.catalog, character))
    }

    pub fn add_character(&mut self, character: Character) {
        self.characters.push(character);
    }

    pub fn remove_character(&mut self, id: &CharacterId) -> Option<Character> {
        let idx = self.characters.iter().position(|c| c.id() == id)?;
        Some(self.characters.remove(idx))
    }

    // =========================================================================
    // Catalog deletes with reference cleanup
    // =========================================================================

    /// Delete gear from the catalog and every character's backpack and
    /// slots (slot keys stay, emptied). Returns how many characters changed.
    pub fn delete_gear(&mut self, id: &GearId) -> Result<usize, DomainError> {
        self.catalog
            .remove_gear(id)
            .ok_or_else(|| DomainError::not_found("Gear", id.as_str()))?;
        Ok(self
            .characters
            .iter_mut()
            .map(|c| c.gear_mut().purge(id))
            .filter(|changed| *changed)
            .count())
    }

    /// Delete a weapon from the catalog and every character's backpack and
    /// slots. Returns how many characters changed.
    pub fn delete_weapon(&mut self, id: &WeaponId) -> Result<usize, DomainError> {
        self.catalog
            .remove_weapon(id)
            .ok_or_else(|| DomainError::not_found("Weapon", id.as_str()))?;
        Ok(self
            .characters
            .iter_mut()
            .map(|c| c.weapons_mut().purge(id))
            .filter(|changed| *changed)
            .count())
    }

    /// Delete an item from the catalog and every character's inventory.
    pub fn delete_item(&mut self, id: &ItemId) -> Result<usize, DomainError> {
        self.catalog
            .remove_item(id)
            .ok_or_else(|| DomainError::not_found("Item", id.as_str()))?;
        Ok(self
            .characters
            .iter_mut()
            .filter_map(|c| c.inventory_mut().remove(id))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Gear, Item, Weapon};
    use crate::inventory::{Backpack, LoadoutManager};
    use crate::value_objects::{CharacterName, SlotLayout};

    fn character(id: &str) -> Character {
        Character::new(CharacterName::new(id).unwrap(), &SlotLayout::fallback()).with_id(id)
    }

    fn document() -> CampaignDocument {
        let catalog = Catalog::new()
            .with_gear(Gear::new("Iron Helm", "Head").with_id("g1"))
            .with_weapon(Weapon::new("Dagger", "1d4").with_id("w1"))
            .with_item(Item::new("Potion").with_id("i1"));
        CampaignDocument::new()
            .with_catalog(catalog)
            .with_character(
                character("a")
                    .with_gear_backpack(Backpack::from_entries([(GearId::from("g1"), 2)]))
                    .with_inventory(Backpack::from_entries([(ItemId::from("i1"), 1)])),
            )
            .with_character(character("b"))
            .with_character(
                character("c").with_weapon_backpack(Backpack::from_entries([(
                    WeaponId::from("w1"),
                    1,
                )])),
            )
    }

    mod serde_format {
        use super::*;

        #[test]
        fn loads_partial_document_with_defaults() {
            let json = r#"{"setting":{"worldName":"Aether"},"gear":[{"id":"g1","name":"Helm","slot":"Head"}]}"#;
            let doc: CampaignDocument = serde_json::from_str(json).unwrap();
            assert_eq!(doc.setting.world_name, "Aether");
            assert_eq!(doc.catalog.gear.len(), 1);
            assert!(doc.characters().is_empty());
            assert!(doc.npcs.is_empty());
        }

        #[test]
        fn catalog_arrays_sit_at_top_level() {
            let value = serde_json::to_value(document()).unwrap();
            assert!(value["weapons"].is_array());
            assert!(value["items"].is_array());
            assert!(value["races"].is_array());
            assert_eq!(value["characters"].as_array().map(Vec::len), Some(3));
            assert!(value.get("catalog").is_none());
        }
    }

    mod cascade {
        use super::*;

        #[test]
        fn delete_gear_clears_backpacks_and_slots() {
            let mut doc = document();
            let id = CharacterId::from("a");
            {
                let (catalog, c) = doc.character_with_catalog(&id).unwrap();
                LoadoutManager::new(catalog)
                    .equip_gear(c, &GearId::from("g1"), "Head")
                    .unwrap();
            }

            let touched = doc.delete_gear(&GearId::from("g1")).unwrap();
            assert_eq!(touched, 1);
            let a = doc.character(&id).unwrap();
            assert!(a.gear().backpack().is_empty());
            assert_eq!(a.equipped_gear().get("Head"), None);
            assert!(a.equipped_gear().slot_names().any(|s| s == "Head"));
            assert!(doc.catalog.gear(&GearId::from("g1")).is_none());
        }

        #[test]
        fn delete_weapon_and_item_count_touched_characters() {
            let mut doc = document();
            assert_eq!(doc.delete_weapon(&WeaponId::from("w1")).unwrap(), 1);
            assert_eq!(doc.delete_item(&ItemId::from("i1")).unwrap(), 1);
            assert!(doc
                .characters()
                .iter()
                .all(|c| c.inventory().is_empty() && c.weapons().backpack().is_empty()));
        }

        #[test]
        fn delete_unknown_id_is_not_found() {
            let mut doc = document();
            let before = doc.clone();
            assert!(matches!(
                doc.delete_gear(&GearId::from("nope")),
                Err(DomainError::NotFound { .. })
            ));
            assert_eq!(doc, before);
        }
    }

    #[test]
    fn remove_character_by_id() {
        let mut doc = document();
        assert!(doc.remove_character(&CharacterId::from("b")).is_some());
        assert!(doc.remove_character(&CharacterId::from("b")).is_none());
        assert_eq!(doc.characters().len(), 2);
    }
}
