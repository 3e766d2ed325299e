//! Character draft - typed form state for creating a character

use crate::aggregates::Character;
use crate::catalog::Catalog;
use crate::entities::{Race, RpgClass};
use crate::error::DomainError;
use crate::value_objects::{Attributes, CharacterName, ResourcePool, SlotLayout};
use talewright_domain::{ClassId, RaceId};

/// In-progress character form. Everything but the name is optional; it is
/// validated by [`build`](Self::build) for new characters and by
/// [`apply_to`](Self::apply_to) for edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterDraft {
    pub name: String,
    pub race_id: Option<RaceId>,
    pub class_id: Option<ClassId>,
    pub level: Option<u32>,
    pub hp: Option<ResourcePool>,
    pub mp: Option<ResourcePool>,
    pub attributes: Option<Attributes>,
    pub physical_appearance: Option<String>,
    pub background: Option<String>,
    pub image: Option<String>,
}

impl CharacterDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_race(mut self, race_id: impl Into<RaceId>) -> Self {
        self.race_id = Some(race_id.into());
        self
    }

    pub fn with_class(mut self, class_id: impl Into<ClassId>) -> Self {
        self.class_id = Some(class_id.into());
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_hp(mut self, hp: ResourcePool) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_mp(mut self, mp: ResourcePool) -> Self {
        self.mp = Some(mp);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Start an edit form from an existing character's name.
    pub fn editing(character: &Character) -> Self {
        Self::new(character.name())
    }

    /// Validate the draft into a character.
    ///
    /// Race and class are copied from the catalog. Every slot of the race's
    /// layout starts empty, and the class's spell levels get spell slot
    /// entries.
    ///
    /// # Errors
    ///
    /// - `Validation` for an empty name or level 0
    /// - `NotFound` for a race or class id the catalog does not know
    pub fn build(self, catalog: &Catalog) -> Result<Character, DomainError> {
        let resolved = self.resolve(catalog)?;
        let layout = SlotLayout::for_race(resolved.race.as_ref());
        let mut character = Character::new(resolved.name.clone(), &layout);
        resolved.write_into(&mut character, catalog);
        Ok(character)
    }

    /// Save the draft over an existing character, as the sheet's edit form
    /// does. Fields left `None` keep their current value. A new race adds
    /// its slots; slots of the old race keep their occupants.
    ///
    /// Nothing is changed when validation fails.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn apply_to(self, character: &mut Character, catalog: &Catalog) -> Result<(), DomainError> {
        self.resolve(catalog)?.write_into(character, catalog);
        Ok(())
    }

    fn resolve(self, catalog: &Catalog) -> Result<ResolvedDraft, DomainError> {
        let name = CharacterName::new(&self.name)?;
        if self.level == Some(0) {
            return Err(DomainError::validation("Level must be at least 1"));
        }

        let race = self
            .race_id
            .as_ref()
            .map(|id| {
                catalog
                    .race(id)
                    .cloned()
                    .ok_or_else(|| DomainError::not_found("Race", id.as_str()))
            })
            .transpose()?;
        let class = self
            .class_id
            .as_ref()
            .map(|id| {
                catalog
                    .class(id)
                    .cloned()
                    .ok_or_else(|| DomainError::not_found("Class", id.as_str()))
            })
            .transpose()?;

        Ok(ResolvedDraft {
            name,
            race,
            class,
            draft: self,
        })
    }
}

/// A draft whose name, level and catalog references have been checked.
struct ResolvedDraft {
    name: CharacterName,
    race: Option<Race>,
    class: Option<RpgClass>,
    draft: CharacterDraft,
}

impl ResolvedDraft {
    fn write_into(self, character: &mut Character, catalog: &Catalog) {
        let Self {
            name,
            race,
            class,
            draft,
        } = self;

        character.rename(name);
        if let Some(race) = race {
            character.set_race(Some(race));
        }
        if let Some(class) = class {
            character.sync_spell_slot_levels(&catalog.spell_levels_for_class(&class.id));
            character.set_class(Some(class));
        }
        if let Some(level) = draft.level {
            character.set_level(level);
        }
        if let Some(hp) = draft.hp {
            character.set_hp(hp);
        }
        if let Some(mp) = draft.mp {
            character.set_mp(mp);
        }
        if let Some(attributes) = draft.attributes {
            *character.attributes_mut() = attributes;
        }
        if let Some(appearance) = draft.physical_appearance {
            character.set_appearance(appearance);
        }
        if let Some(background) = draft.background {
            character.set_background(background);
        }
        if draft.image.is_some() {
            character.set_image(draft.image);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Spell;
    use crate::value_objects::STRENGTH;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_race(
                Race::new("Centaur")
                    .with_id("r-centaur")
                    .with_gear_slot("Head")
                    .with_gear_slot("Barding")
                    .with_weapon_slot("Main Hand"),
            )
            .with_spell(Spell::new("Light", 0).with_id("s0"))
            .with_spell(Spell::new("Shield", 1).with_id("s1"))
            .with_spell(Spell::new("Fireball", 3).with_id("s3"))
            .with_class(
                RpgClass::new("Wizard")
                    .with_id("c-wiz")
                    .with_spell("s0")
                    .with_spell("s1")
                    .with_spell("s3"),
            )
    }

    #[test]
    fn rejects_blank_name_and_level_zero() {
        let cat = catalog();
        assert!(matches!(
            CharacterDraft::new("   ").build(&cat),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            CharacterDraft::new("Mira").with_level(0).build(&cat),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn defaults_for_minimal_draft() {
        let c = CharacterDraft::new("  Mira ").build(&catalog()).unwrap();
        assert_eq!(c.name(), "Mira");
        assert_eq!(c.level(), 1);
        assert_eq!(c.hp(), ResourcePool::new(10, 10));
        for attr in ["Strength", "Dexterity", "Constitution"] {
            assert_eq!(c.attributes().get(attr), Some(10));
        }
        let gear: Vec<&str> = c.equipped_gear().slot_names().collect();
        assert_eq!(gear.len(), 6);
        assert!(c.equipped_gear().occupied().next().is_none());
    }

    #[test]
    fn race_layout_initializes_slots() {
        let c = CharacterDraft::new("Hoof")
            .with_race("r-centaur")
            .build(&catalog())
            .unwrap();
        let gear: Vec<&str> = c.equipped_gear().slot_names().collect();
        assert_eq!(gear, vec!["Barding", "Head"]);
        let weapons: Vec<&str> = c.equipped_weapons().slot_names().collect();
        assert_eq!(weapons, vec!["Main Hand"]);
        assert_eq!(c.race().map(|r| r.name.as_str()), Some("Centaur"));
    }

    #[test]
    fn class_spell_levels_get_slots() {
        let c = CharacterDraft::new("Ilya")
            .with_class("c-wiz")
            .build(&catalog())
            .unwrap();
        let levels: Vec<&str> = c.spell_slots().keys().map(String::as_str).collect();
        assert_eq!(levels, vec!["1", "3"]);
    }

    #[test]
    fn unknown_race_is_not_found() {
        let err = CharacterDraft::new("Mira")
            .with_race("r-none")
            .build(&catalog())
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    mod editing {
        use super::*;
        use crate::entities::Gear;
        use crate::inventory::LoadoutManager;
        use talewright_domain::GearId;

        fn catalog_with_gear() -> Catalog {
            catalog().with_gear(Gear::new("Breastplate", "Chest").with_id("g-plate"))
        }

        #[test]
        fn race_change_adds_slots_and_keeps_stale_occupants() {
            let cat = catalog_with_gear();
            let mut c = CharacterDraft::new("Mira").build(&cat).unwrap();
            LoadoutManager::new(&cat)
                .equip_gear(&mut c, &GearId::from("g-plate"), "Chest")
                .unwrap();

            CharacterDraft::editing(&c)
                .with_race("r-centaur")
                .apply_to(&mut c, &cat)
                .unwrap();

            assert_eq!(c.race_id().map(|id| id.as_str()), Some("r-centaur"));
            assert!(c.equipped_gear().slot_names().any(|s| s == "Barding"));
            assert_eq!(c.equipped_gear().get("Barding"), None);
            assert_eq!(c.equipped_gear().get("Chest"), Some(&GearId::from("g-plate")));
        }

        #[test]
        fn untouched_fields_keep_their_values() {
            let cat = catalog();
            let mut c = CharacterDraft::new("Mira")
                .with_level(4)
                .with_background("Sailor")
                .build(&cat)
                .unwrap();
            let id = c.id().clone();

            CharacterDraft::new("Mira the Bold")
                .with_attributes(Attributes::starting().with(STRENGTH, 15))
                .with_class("c-wiz")
                .apply_to(&mut c, &cat)
                .unwrap();

            assert_eq!(c.id(), &id);
            assert_eq!(c.name(), "Mira the Bold");
            assert_eq!(c.level(), 4);
            assert_eq!(c.background(), "Sailor");
            assert_eq!(c.attributes().get(STRENGTH), Some(15));
            assert_eq!(c.spell_slots().len(), 2);
        }

        #[test]
        fn invalid_edit_changes_nothing() {
            let cat = catalog();
            let mut c = CharacterDraft::new("Mira").build(&cat).unwrap();
            let before = c.clone();

            let err = CharacterDraft::new("Mira")
                .with_level(2)
                .with_race("r-none")
                .apply_to(&mut c, &cat)
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound { .. }));
            assert_eq!(c, before);
        }
    }
}
