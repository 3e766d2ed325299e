//! Combined backpack view across items, gear and weapons

use serde::Serialize;

use crate::aggregates::Character;
use crate::catalog::Catalog;
use crate::types::BackpackCategory;

/// One resolved backpack line, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackpackListing {
    pub category: BackpackCategory,
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

/// Filter for [`list_backpack`]. `category: None` shows every section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackpackQuery {
    pub category: Option<BackpackCategory>,
    pub search: String,
}

impl BackpackQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_category(mut self, category: BackpackCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn matching(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    fn accepts(&self, listing: &BackpackListing, needle: &str) -> bool {
        self.category.is_none_or(|c| c == listing.category)
            && listing.name.to_lowercase().contains(needle)
    }
}

/// Items, then gear, then weapons, each in backpack order. Entries whose
/// ids no longer resolve in the catalog are left out of the view (but stay
/// in the character's data).
pub fn list_backpack(
    character: &Character,
    catalog: &Catalog,
    query: &BackpackQuery,
) -> Vec<BackpackListing> {
    let items = character.inventory().iter().filter_map(|e| {
        catalog.item(&e.id).map(|item| BackpackListing {
            category: BackpackCategory::Items,
            id: e.id.to_string(),
            name: item.name.clone(),
            quantity: e.quantity,
        })
    });
    let gear = character.gear().backpack().iter().filter_map(|e| {
        catalog.gear(&e.id).map(|gear| BackpackListing {
            category: BackpackCategory::Gear,
            id: e.id.to_string(),
            name: gear.name.clone(),
            quantity: e.quantity,
        })
    });
    let weapons = character.weapons().backpack().iter().filter_map(|e| {
        catalog.weapon(&e.id).map(|weapon| BackpackListing {
            category: BackpackCategory::Weapon,
            id: e.id.to_string(),
            name: weapon.name.clone(),
            quantity: e.quantity,
        })
    });

    let needle = query.search.to_lowercase();
    items
        .chain(gear)
        .chain(weapons)
        .filter(|listing| query.accepts(listing, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Gear, Item, Weapon};
    use crate::inventory::Backpack;
    use crate::value_objects::{CharacterName, SlotLayout};
    use talewright_domain::{GearId, ItemId, WeaponId};

    fn setup() -> (Catalog, Character) {
        let catalog = Catalog::new()
            .with_item(Item::new("Healing Potion").with_id("i1"))
            .with_gear(Gear::new("Iron Helm", "Head").with_id("g1"))
            .with_weapon(Weapon::new("Iron Sword", "1d8").with_id("w1"));
        let character =
            Character::new(CharacterName::new("Mira").unwrap(), &SlotLayout::fallback())
                .with_inventory(Backpack::from_entries([
                    (ItemId::from("i1"), 3),
                    (ItemId::from("i-gone"), 1),
                ]))
                .with_gear_backpack(Backpack::from_entries([(GearId::from("g1"), 1)]))
                .with_weapon_backpack(Backpack::from_entries([(WeaponId::from("w1"), 2)]));
        (catalog, character)
    }

    #[test]
    fn lists_all_sections_and_skips_dangling_ids() {
        let (catalog, character) = setup();
        let listing = list_backpack(&character, &catalog, &BackpackQuery::all());
        let names: Vec<&str> = listing.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Healing Potion", "Iron Helm", "Iron Sword"]);
        assert_eq!(listing[0].quantity, 3);
    }

    #[test]
    fn filters_by_category_and_case_insensitive_search() {
        let (catalog, character) = setup();
        let query = BackpackQuery::all().matching("IRON");
        let listing = list_backpack(&character, &catalog, &query);
        assert_eq!(listing.len(), 2);

        let query = query.in_category(BackpackCategory::Weapon);
        let listing = list_backpack(&character, &catalog, &query);
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, "w1");
        assert_eq!(listing[0].quantity, 2);
    }
}
