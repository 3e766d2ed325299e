//! Character sheet use cases.
//!
//! Each mutating call loads the campaign document, applies exactly one
//! operation to one character, and returns the outcome with freshly derived
//! combat stats. The document is saved only when the character actually
//! changed; failed operations and no-ops never save.

mod error;

pub use error::SheetError;

use std::sync::Arc;

use talewright_domain::{
    derive_combat_stats, list_backpack, BackpackCategory, BackpackChange, BackpackListing,
    BackpackQuery, CampaignDocument, Character, CharacterDraft, CharacterId, CombatStats,
    ConsumptionNotice, DomainError, DragSession, DropOutcome, DropTarget, EquipCategory,
    EquipOutcome, GearId, ItemId, LoadoutManager, QuantityInput, UnequipOutcome, WeaponId,
};

use crate::infrastructure::ports::DocumentStore;

// =============================================================================
// Result Types
// =============================================================================

/// Result of a character sheet mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetUpdate<T> {
    /// What the operation did.
    pub outcome: T,
    /// Combat stats after the operation.
    pub combat_stats: CombatStats,
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    store: Arc<dyn DocumentStore>,
}

impl CharacterSheetUseCases {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    // -------------------------------------------------------------------------
    // Equipment
    // -------------------------------------------------------------------------

    pub async fn equip_gear(
        &self,
        character_id: &CharacterId,
        gear_id: &GearId,
        slot: &str,
    ) -> Result<SheetUpdate<EquipOutcome<GearId>>, SheetError> {
        self.mutate(character_id, "equip_gear", |manager, character| {
            manager.equip_gear(character, gear_id, slot)
        })
        .await
    }

    /// Equip gear into the slot its catalog entry names.
    pub async fn equip_gear_to_catalog_slot(
        &self,
        character_id: &CharacterId,
        gear_id: &GearId,
    ) -> Result<SheetUpdate<EquipOutcome<GearId>>, SheetError> {
        self.mutate(character_id, "equip_gear", |manager, character| {
            manager.equip_gear_to_catalog_slot(character, gear_id)
        })
        .await
    }

    pub async fn equip_weapon(
        &self,
        character_id: &CharacterId,
        weapon_id: &WeaponId,
        slot: &str,
    ) -> Result<SheetUpdate<EquipOutcome<WeaponId>>, SheetError> {
        self.mutate(character_id, "equip_weapon", |manager, character| {
            manager.equip_weapon(character, weapon_id, slot)
        })
        .await
    }

    pub async fn unequip(
        &self,
        character_id: &CharacterId,
        category: EquipCategory,
        slot: &str,
    ) -> Result<SheetUpdate<UnequipOutcome<String>>, SheetError> {
        self.mutate(character_id, "unequip", |manager, character| {
            Ok(manager.unequip(character, category, slot))
        })
        .await
    }

    /// Finish a drag on `target`. A refused drop surfaces as
    /// `SheetError::Domain`; the session ends either way.
    pub async fn drop(
        &self,
        character_id: &CharacterId,
        session: &mut DragSession,
        target: &DropTarget,
    ) -> Result<SheetUpdate<DropOutcome>, SheetError> {
        self.mutate(character_id, "drop", |manager, character| {
            match session.drop(target, manager, character) {
                DropOutcome::Rejected(err) => Err(err),
                outcome => Ok(outcome),
            }
        })
        .await
    }

    // -------------------------------------------------------------------------
    // Backpack
    // -------------------------------------------------------------------------

    pub async fn add_to_backpack(
        &self,
        character_id: &CharacterId,
        category: BackpackCategory,
        id: &str,
    ) -> Result<SheetUpdate<BackpackChange>, SheetError> {
        self.mutate(character_id, "add_to_backpack", |manager, character| {
            manager.add_to_backpack(character, category, id)
        })
        .await
    }

    pub async fn set_backpack_quantity(
        &self,
        character_id: &CharacterId,
        category: BackpackCategory,
        id: &str,
        quantity: u32,
    ) -> Result<SheetUpdate<BackpackChange>, SheetError> {
        self.mutate(character_id, "set_backpack_quantity", |manager, character| {
            Ok(manager.set_backpack_quantity(character, category, id, quantity))
        })
        .await
    }

    /// Apply raw counter text. Returns `Ok(None)` (and touches nothing)
    /// when the text is not a number.
    pub async fn set_backpack_quantity_input(
        &self,
        character_id: &CharacterId,
        category: BackpackCategory,
        id: &str,
        raw: &str,
    ) -> Result<Option<SheetUpdate<BackpackChange>>, SheetError> {
        let Some(quantity) = QuantityInput::parse(raw) else {
            tracing::debug!(input = raw, "Ignoring non-numeric quantity input");
            return Ok(None);
        };
        self.set_backpack_quantity(character_id, category, id, quantity)
            .await
            .map(Some)
    }

    pub async fn use_consumable(
        &self,
        character_id: &CharacterId,
        item_id: &ItemId,
    ) -> Result<SheetUpdate<ConsumptionNotice>, SheetError> {
        let update = self
            .mutate(character_id, "use_consumable", |manager, character| {
                manager.use_consumable(character, item_id)
            })
            .await?;
        tracing::info!(
            character_id = %character_id,
            item_id = %item_id,
            remaining = update.outcome.remaining,
            "{}",
            update.outcome.message()
        );
        Ok(update)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub async fn character(&self, character_id: &CharacterId) -> Result<Character, SheetError> {
        let document = self.load_document().await?;
        document
            .character(character_id)
            .cloned()
            .ok_or_else(|| SheetError::CharacterNotFound(character_id.clone()))
    }

    pub async fn combat_stats(&self, character_id: &CharacterId) -> Result<CombatStats, SheetError> {
        let document = self.load_document().await?;
        let character = document
            .character(character_id)
            .ok_or_else(|| SheetError::CharacterNotFound(character_id.clone()))?;
        Ok(stats_for(character, &document))
    }

    pub async fn backpack(
        &self,
        character_id: &CharacterId,
        query: &BackpackQuery,
    ) -> Result<Vec<BackpackListing>, SheetError> {
        let document = self.load_document().await?;
        let character = document
            .character(character_id)
            .ok_or_else(|| SheetError::CharacterNotFound(character_id.clone()))?;
        Ok(list_backpack(character, &document.catalog, query))
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    pub async fn create_character(&self, draft: CharacterDraft) -> Result<Character, SheetError> {
        let mut document = self.load_document().await?;
        let character = draft.build(&document.catalog)?;
        document.add_character(character.clone());
        self.store.save(&document).await?;

        tracing::info!(
            character_id = %character.id(),
            name = character.name(),
            "Created character"
        );
        Ok(character)
    }

    /// Save an edit form over an existing character and return it as
    /// saved. A race change adds the new race's slots and leaves occupied
    /// slots of the old race in place.
    pub async fn update_character(
        &self,
        character_id: &CharacterId,
        draft: CharacterDraft,
    ) -> Result<SheetUpdate<Character>, SheetError> {
        self.mutate(character_id, "update_character", |manager, character| {
            draft.apply_to(character, manager.catalog())?;
            Ok(character.clone())
        })
        .await
    }

    pub async fn delete_character(&self, character_id: &CharacterId) -> Result<Character, SheetError> {
        let mut document = self.load_document().await?;
        let removed = document
            .remove_character(character_id)
            .ok_or_else(|| SheetError::CharacterNotFound(character_id.clone()))?;
        self.store.save(&document).await?;

        tracing::info!(character_id = %character_id, "Deleted character");
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    async fn load_document(&self) -> Result<CampaignDocument, SheetError> {
        Ok(self.store.load().await?.unwrap_or_default())
    }

    async fn mutate<T, F>(
        &self,
        character_id: &CharacterId,
        operation: &'static str,
        op: F,
    ) -> Result<SheetUpdate<T>, SheetError>
    where
        F: FnOnce(&LoadoutManager<'_>, &mut Character) -> Result<T, DomainError>,
    {
        let mut document = self.load_document().await?;
        let (catalog, character) = document
            .character_with_catalog(character_id)
            .ok_or_else(|| SheetError::CharacterNotFound(character_id.clone()))?;

        let before = character.clone();
        let manager = LoadoutManager::new(catalog);
        let outcome = op(&manager, character).map_err(|e| {
            tracing::info!(
                character_id = %character_id,
                operation,
                error = %e,
                "Loadout operation rejected"
            );
            e
        })?;
        let combat_stats = derive_combat_stats(
            character.attributes(),
            character.equipped_gear(),
            character.equipped_weapons(),
            catalog,
        );

        if *character == before {
            tracing::debug!(character_id = %character_id, operation, "Nothing changed, not saving");
        } else {
            self.store.save(&document).await?;
            tracing::debug!(character_id = %character_id, operation, "Character sheet updated");
        }

        Ok(SheetUpdate {
            outcome,
            combat_stats,
        })
    }
}

fn stats_for(character: &Character, document: &CampaignDocument) -> CombatStats {
    derive_combat_stats(
        character.attributes(),
        character.equipped_gear(),
        character.equipped_weapons(),
        &document.catalog,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockDocumentStore, StoreError};
    use std::sync::Mutex;
    use talewright_domain::{
        Attributes, Backpack, Catalog, DraggedItem, Gear, Item, Race, Weapon,
    };

    fn catalog() -> Catalog {
        Catalog::new()
            .with_gear(
                Gear::new("Scale Mail", "Chest")
                    .with_id("g-scale")
                    .with_armor_value("14 + Dex modifier"),
            )
            .with_gear(Gear::new("Iron Helm", "Head").with_id("g-helm"))
            .with_weapon(Weapon::new("Longsword", "1d8 slashing").with_id("w-sword"))
            .with_item(Item::new("Healing Potion").with_id("i-potion"))
            .with_race(
                Race::new("Naga")
                    .with_id("r-naga")
                    .with_gear_slot("Head")
                    .with_gear_slot("Tail")
                    .with_weapon_slot("Main Hand"),
            )
    }

    fn document() -> CampaignDocument {
        let catalog = catalog();
        let character = CharacterDraft::new("Mira")
            .with_attributes(Attributes::new().with("Strength", 14).with("Dexterity", 16))
            .build(&catalog)
            .unwrap()
            .with_id("c1")
            .with_gear_backpack(Backpack::from_entries([(GearId::from("g-scale"), 1)]))
            .with_inventory(Backpack::from_entries([(ItemId::from("i-potion"), 1)]));
        CampaignDocument::new()
            .with_catalog(catalog)
            .with_character(character)
    }

    /// A mock store that serves `doc` and records every save.
    fn recording_store(doc: CampaignDocument) -> (MockDocumentStore, Arc<Mutex<Vec<CampaignDocument>>>) {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let mut store = MockDocumentStore::new();
        store.expect_load().returning(move || Ok(Some(doc.clone())));
        let sink = saved.clone();
        store.expect_save().returning(move |d| {
            sink.lock().unwrap().push(d.clone());
            Ok(())
        });
        (store, saved)
    }

    fn id() -> CharacterId {
        CharacterId::from("c1")
    }

    mod equipment {
        use super::*;

        #[tokio::test]
        async fn equip_persists_and_returns_stats() {
            let (store, saved) = recording_store(document());
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let update = use_cases
                .equip_gear(&id(), &GearId::from("g-scale"), "Chest")
                .await
                .unwrap();
            assert!(update.outcome.changed());
            assert_eq!(update.combat_stats.armor_class, 17);
            assert_eq!(update.combat_stats.damage, "1 + 2");

            let saved = saved.lock().unwrap();
            assert_eq!(saved.len(), 1);
            let c = saved[0].character(&id()).unwrap();
            assert_eq!(c.equipped_gear().get("Chest"), Some(&GearId::from("g-scale")));
            assert!(c.gear().backpack().is_empty());
        }

        #[tokio::test]
        async fn rejected_equip_does_not_save() {
            let mut store = MockDocumentStore::new();
            let doc = document();
            store.expect_load().returning(move || Ok(Some(doc.clone())));
            store.expect_save().never();
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let err = use_cases
                .equip_gear(&id(), &GearId::from("g-helm"), "Chest")
                .await
                .unwrap_err();
            assert!(err.is_capability_violation());
        }

        #[tokio::test]
        async fn unknown_character_is_reported() {
            let (store, saved) = recording_store(document());
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let err = use_cases
                .unequip(&CharacterId::from("nobody"), EquipCategory::Gear, "Head")
                .await
                .unwrap_err();
            assert!(matches!(err, SheetError::CharacterNotFound(_)));
            assert!(saved.lock().unwrap().is_empty());
        }

        #[tokio::test]
        async fn drag_drop_on_slot_equips_weapon() {
            let (store, saved) = recording_store(document());
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));
            let mut session = DragSession::new();
            session.start(DraggedItem::from_backpack(EquipCategory::Weapon, "w-sword"));

            let update = use_cases
                .drop(&id(), &mut session, &DropTarget::Slot("Main Hand".into()))
                .await
                .unwrap();
            assert!(matches!(update.outcome, DropOutcome::Equipped { .. }));
            assert_eq!(update.combat_stats.damage, "1d8 slashing + 2");
            assert!(!session.is_dragging());
            assert_eq!(saved.lock().unwrap().len(), 1);
        }

        #[tokio::test]
        async fn rejected_drop_is_domain_error() {
            let mut store = MockDocumentStore::new();
            let doc = document();
            store.expect_load().returning(move || Ok(Some(doc.clone())));
            store.expect_save().never();
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));
            let mut session = DragSession::new();
            session.start(DraggedItem::from_backpack(EquipCategory::Gear, "g-scale"));

            let err = use_cases
                .drop(&id(), &mut session, &DropTarget::Slot("Head".into()))
                .await
                .unwrap_err();
            assert!(matches!(err, SheetError::Domain(DomainError::SlotMismatch { .. })));
            assert!(!session.is_dragging());
        }

        #[tokio::test]
        async fn no_op_unequip_is_not_saved() {
            let mut store = MockDocumentStore::new();
            let doc = document();
            store.expect_load().returning(move || Ok(Some(doc.clone())));
            store.expect_save().never();
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let update = use_cases
                .unequip(&id(), EquipCategory::Gear, "Head")
                .await
                .unwrap();
            assert!(!update.outcome.changed());
            assert_eq!(update.combat_stats.armor_class, 13);
        }

        #[tokio::test]
        async fn ignored_drop_is_not_saved() {
            let mut store = MockDocumentStore::new();
            let doc = document();
            store.expect_load().returning(move || Ok(Some(doc.clone())));
            store.expect_save().never();
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));
            let mut session = DragSession::new();
            session.start(DraggedItem::from_backpack(EquipCategory::Gear, "g-scale"));

            let update = use_cases
                .drop(&id(), &mut session, &DropTarget::Backpack)
                .await
                .unwrap();
            assert_eq!(update.outcome, DropOutcome::Ignored);
        }
    }

    mod backpack {
        use super::*;

        #[tokio::test]
        async fn non_numeric_input_is_ignored_without_loading() {
            let mut store = MockDocumentStore::new();
            store.expect_load().never();
            store.expect_save().never();
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let result = use_cases
                .set_backpack_quantity_input(&id(), BackpackCategory::Items, "i-potion", "abc")
                .await
                .unwrap();
            assert!(result.is_none());
        }

        #[tokio::test]
        async fn empty_input_removes_entry() {
            let (store, saved) = recording_store(document());
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let update = use_cases
                .set_backpack_quantity_input(&id(), BackpackCategory::Items, "i-potion", "")
                .await
                .unwrap()
                .unwrap();
            assert_eq!(update.outcome, BackpackChange::Removed { previous: 1 });
            let saved = saved.lock().unwrap();
            assert!(saved[0].character(&id()).unwrap().inventory().is_empty());
        }

        #[tokio::test]
        async fn use_consumable_returns_notice() {
            let (store, _saved) = recording_store(document());
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let update = use_cases
                .use_consumable(&id(), &ItemId::from("i-potion"))
                .await
                .unwrap();
            assert_eq!(update.outcome.remaining, 0);
            assert_eq!(
                update.outcome.message(),
                "Used Healing Potion! Effect: No defined effect."
            );
        }

        #[tokio::test]
        async fn listing_resolves_names() {
            let (store, _saved) = recording_store(document());
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let listing = use_cases.backpack(&id(), &BackpackQuery::all()).await.unwrap();
            let names: Vec<&str> = listing.iter().map(|l| l.name.as_str()).collect();
            assert_eq!(names, vec!["Healing Potion", "Scale Mail"]);
        }
    }

    mod lifecycle {
        use super::*;

        #[tokio::test]
        async fn create_character_starts_from_empty_store() {
            let saved = Arc::new(Mutex::new(Vec::new()));
            let mut store = MockDocumentStore::new();
            store.expect_load().returning(|| Ok(None));
            let sink = saved.clone();
            store.expect_save().times(1).returning(move |d| {
                sink.lock().unwrap().push(d.clone());
                Ok(())
            });
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let character = use_cases
                .create_character(CharacterDraft::new("Nyx"))
                .await
                .unwrap();
            let saved = saved.lock().unwrap();
            assert_eq!(saved[0].characters().len(), 1);
            assert_eq!(saved[0].characters()[0].id(), character.id());
        }

        #[tokio::test]
        async fn invalid_draft_is_not_saved() {
            let mut store = MockDocumentStore::new();
            store.expect_load().returning(|| Ok(None));
            store.expect_save().never();
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let err = use_cases
                .create_character(CharacterDraft::new(""))
                .await
                .unwrap_err();
            assert!(matches!(err, SheetError::Domain(DomainError::Validation(_))));
        }

        #[tokio::test]
        async fn race_change_adds_slots_and_keeps_stale_occupants() {
            let mut doc = document();
            {
                let (catalog, c) = doc.character_with_catalog(&id()).unwrap();
                LoadoutManager::new(catalog)
                    .equip_gear(c, &GearId::from("g-scale"), "Chest")
                    .unwrap();
            }
            let (store, saved) = recording_store(doc);
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let draft = CharacterDraft::new("Mira")
                .with_race("r-naga")
                .with_attributes(Attributes::new().with("Strength", 18).with("Dexterity", 16));
            let update = use_cases.update_character(&id(), draft).await.unwrap();

            let c = &update.outcome;
            assert_eq!(c.race().map(|r| r.name.as_str()), Some("Naga"));
            assert!(c.equipped_gear().slot_names().any(|s| s == "Tail"));
            assert_eq!(c.equipped_gear().get("Tail"), None);
            assert_eq!(c.equipped_gear().get("Chest"), Some(&GearId::from("g-scale")));
            assert_eq!(update.combat_stats.armor_class, 17);
            assert_eq!(update.combat_stats.damage, "1 + 4");

            let saved = saved.lock().unwrap();
            assert_eq!(saved.len(), 1);
            assert_eq!(saved[0].character(&id()), Some(c));
        }

        #[tokio::test]
        async fn invalid_edit_is_not_saved() {
            let mut store = MockDocumentStore::new();
            let doc = document();
            store.expect_load().returning(move || Ok(Some(doc.clone())));
            store.expect_save().never();
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let err = use_cases
                .update_character(&id(), CharacterDraft::new("Mira").with_race("r-none"))
                .await
                .unwrap_err();
            assert!(matches!(err, SheetError::Domain(DomainError::NotFound { .. })));
        }

        #[tokio::test]
        async fn delete_character_removes_it() {
            let (store, saved) = recording_store(document());
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let removed = use_cases.delete_character(&id()).await.unwrap();
            assert_eq!(removed.name(), "Mira");
            assert!(saved.lock().unwrap()[0].characters().is_empty());
        }

        #[tokio::test]
        async fn store_failure_propagates() {
            let mut store = MockDocumentStore::new();
            store
                .expect_load()
                .returning(|| Err(StoreError::io("load", "permission denied")));
            let use_cases = CharacterSheetUseCases::new(Arc::new(store));

            let err = use_cases.combat_stats(&id()).await.unwrap_err();
            assert!(matches!(err, SheetError::Store(_)));
        }
    }
}
