//! Catalog maintenance use cases.
//!
//! Deleting a catalog entry also strips it from every character, so no
//! backpack or slot is left pointing at an id that no longer exists.

mod error;

pub use error::CatalogError;

use std::sync::Arc;

use talewright_domain::{CampaignDocument, Catalog, DomainError, GearId, ItemId, WeaponId};

use crate::infrastructure::ports::DocumentStore;

pub struct CatalogUseCases {
    store: Arc<dyn DocumentStore>,
}

impl CatalogUseCases {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn catalog(&self) -> Result<Catalog, CatalogError> {
        Ok(self.load_document().await?.catalog)
    }

    /// Delete gear. Returns how many characters lost a reference to it.
    pub async fn delete_gear(&self, id: &GearId) -> Result<usize, CatalogError> {
        self.cascade("gear", id.as_str(), |doc| doc.delete_gear(id))
            .await
    }

    /// Delete a weapon. Returns how many characters lost a reference to it.
    pub async fn delete_weapon(&self, id: &WeaponId) -> Result<usize, CatalogError> {
        self.cascade("weapon", id.as_str(), |doc| doc.delete_weapon(id))
            .await
    }

    /// Delete an item. Returns how many characters lost a reference to it.
    pub async fn delete_item(&self, id: &ItemId) -> Result<usize, CatalogError> {
        self.cascade("item", id.as_str(), |doc| doc.delete_item(id))
            .await
    }

    async fn load_document(&self) -> Result<CampaignDocument, CatalogError> {
        Ok(self.store.load().await?.unwrap_or_default())
    }

    async fn cascade<F>(&self, kind: &'static str, id: &str, op: F) -> Result<usize, CatalogError>
    where
        F: FnOnce(&mut CampaignDocument) -> Result<usize, DomainError>,
    {
        let mut document = self.load_document().await?;
        let touched = op(&mut document)?;
        self.store.save(&document).await?;

        tracing::info!(kind, id, characters_touched = touched, "Deleted catalog entry");
        Ok(touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockDocumentStore;
    use std::sync::Mutex;
    use talewright_domain::{Backpack, CharacterDraft, Gear, Item, Weapon};

    fn document() -> CampaignDocument {
        let catalog = Catalog::new()
            .with_gear(Gear::new("Iron Helm", "Head").with_id("g1"))
            .with_weapon(Weapon::new("Dagger", "1d4 piercing").with_id("w1"))
            .with_item(Item::new("Rope").with_id("i1"));
        let carrier = CharacterDraft::new("Mira")
            .build(&catalog)
            .unwrap()
            .with_id("c1")
            .with_gear_backpack(Backpack::from_entries([(GearId::from("g1"), 3)]));
        let bystander = CharacterDraft::new("Oren")
            .build(&catalog)
            .unwrap()
            .with_id("c2");
        CampaignDocument::new()
            .with_catalog(catalog)
            .with_character(carrier)
            .with_character(bystander)
    }

    #[tokio::test]
    async fn delete_gear_cascades_and_saves() {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let mut store = MockDocumentStore::new();
        let doc = document();
        store.expect_load().returning(move || Ok(Some(doc.clone())));
        let sink = saved.clone();
        store.expect_save().times(1).returning(move |d| {
            sink.lock().unwrap().push(d.clone());
            Ok(())
        });
        let use_cases = CatalogUseCases::new(Arc::new(store));

        let touched = use_cases.delete_gear(&GearId::from("g1")).await.unwrap();
        assert_eq!(touched, 1);

        let saved = saved.lock().unwrap();
        assert!(saved[0].catalog.gear(&GearId::from("g1")).is_none());
        assert!(saved[0]
            .characters()
            .iter()
            .all(|c| c.gear().backpack().is_empty()));
    }

    #[tokio::test]
    async fn delete_unused_weapon_touches_nobody() {
        let mut store = MockDocumentStore::new();
        let doc = document();
        store.expect_load().returning(move || Ok(Some(doc.clone())));
        store.expect_save().times(1).returning(|_| Ok(()));
        let use_cases = CatalogUseCases::new(Arc::new(store));

        assert_eq!(use_cases.delete_weapon(&WeaponId::from("w1")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unknown_id_is_not_saved() {
        let mut store = MockDocumentStore::new();
        let doc = document();
        store.expect_load().returning(move || Ok(Some(doc.clone())));
        store.expect_save().never();
        let use_cases = CatalogUseCases::new(Arc::new(store));

        let err = use_cases.delete_item(&ItemId::from("missing")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Domain(DomainError::NotFound { .. })));
    }
}
