//! Talewright Engine - command line entry point.

use std::sync::Arc;

use anyhow::Context;
use talewright_domain::{
    BackpackCategory, BackpackQuery, CampaignDocument, Character, CharacterDraft, CharacterId,
    EquipCategory, GearId, ItemId, WeaponId,
};
use talewright_engine::infrastructure::{
    file_store::FileDocumentStore,
    ports::DocumentStore,
    settings::EditorSettings,
};
use talewright_engine::{CatalogUseCases, CharacterSheetUseCases};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: talewright-engine <command> [args]

Commands:
  init                                       Write an empty campaign document
  list                                       List characters
  create <name>                              Create a character with defaults
  delete-character <character>               Delete a character
  update <character> <field=value>...        Edit name, race, class, level, background,
                                             appearance, image or attr.<Name>
  show <character>                           Show a character sheet
  stats <character>                          Show derived combat stats
  backpack <character> [category] [search]   List backpack contents
  equip-gear <character> <gear> [slot]       Equip gear (catalog slot if omitted)
  equip-weapon <character> <weapon> <slot>   Equip a weapon
  unequip <character> <gear|weapon> <slot>   Return a slot's occupant to the backpack
  add <character> <category> <id>           Add one unit to the backpack
  set-qty <character> <category> <id> <n>    Set a backpack quantity (0 or empty removes)
  use <character> <item>                     Consume one unit of an item
  delete-gear <gear>                         Delete gear everywhere
  delete-weapon <weapon>                     Delete a weapon everywhere
  delete-item <item>                         Delete an item everywhere";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root; `cargo run` starts in `crates/engine`.
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talewright_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = EditorSettings::from_env();
    tracing::debug!(path = %settings.document_path.display(), "Using campaign document");

    let store: Arc<dyn DocumentStore> = Arc::new(FileDocumentStore::from_settings(&settings));
    let sheets = CharacterSheetUseCases::new(store.clone());
    let catalog = CatalogUseCases::new(store.clone());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["init"] => {
            store.save(&CampaignDocument::new()).await?;
            println!("Wrote {}", settings.document_path.display());
        }
        ["list"] => {
            let document = store.load().await?.unwrap_or_default();
            for character in document.characters() {
                println!("{}\t{}\tlevel {}", character.id(), character.name(), character.level());
            }
        }
        ["create", name] => {
            let character = sheets.create_character(CharacterDraft::new(*name)).await?;
            println!("Created {} ({})", character.name(), character.id());
        }
        ["delete-character", id] => {
            let removed = sheets.delete_character(&CharacterId::from(*id)).await?;
            println!("Deleted {}", removed.name());
        }
        ["update", id, fields @ ..] if !fields.is_empty() => {
            let id = CharacterId::from(*id);
            let current = sheets.character(&id).await?;
            let draft = edit_draft(&current, fields)?;
            let update = sheets.update_character(&id, draft).await?;
            println!("Updated {} ({})", update.outcome.name(), update.outcome.id());
            print_stats(&update.combat_stats);
        }
        ["show", id] => {
            let character = sheets.character(&CharacterId::from(*id)).await?;
            println!("{}", serde_json::to_string_pretty(&character)?);
        }
        ["stats", id] => {
            let stats = sheets.combat_stats(&CharacterId::from(*id)).await?;
            println!("Armor Class: {}", stats.armor_class);
            println!("Attack Bonus: {}", stats.attack_bonus_label());
            println!("Damage: {}", stats.damage);
        }
        ["backpack", id, rest @ ..] => {
            let query = backpack_query(rest)?;
            for entry in sheets.backpack(&CharacterId::from(*id), &query).await? {
                println!("{}\t{}\t{}\tx{}", entry.category, entry.id, entry.name, entry.quantity);
            }
        }
        ["equip-gear", id, gear] => {
            let update = sheets
                .equip_gear_to_catalog_slot(&CharacterId::from(*id), &GearId::from(*gear))
                .await?;
            println!("{:?}", update.outcome);
            print_stats(&update.combat_stats);
        }
        ["equip-gear", id, gear, slot] => {
            let update = sheets
                .equip_gear(&CharacterId::from(*id), &GearId::from(*gear), slot)
                .await?;
            println!("{:?}", update.outcome);
            print_stats(&update.combat_stats);
        }
        ["equip-weapon", id, weapon, slot] => {
            let update = sheets
                .equip_weapon(&CharacterId::from(*id), &WeaponId::from(*weapon), slot)
                .await?;
            println!("{:?}", update.outcome);
            print_stats(&update.combat_stats);
        }
        ["unequip", id, category, slot] => {
            let category: EquipCategory = category.parse()?;
            let update = sheets.unequip(&CharacterId::from(*id), category, slot).await?;
            println!("{:?}", update.outcome);
            print_stats(&update.combat_stats);
        }
        ["add", id, category, item] => {
            let category: BackpackCategory = category.parse()?;
            let update = sheets
                .add_to_backpack(&CharacterId::from(*id), category, item)
                .await?;
            println!("{:?}", update.outcome);
        }
        ["set-qty", id, category, item, raw] => {
            let category: BackpackCategory = category.parse()?;
            match sheets
                .set_backpack_quantity_input(&CharacterId::from(*id), category, item, raw)
                .await?
            {
                Some(update) => println!("{:?}", update.outcome),
                None => println!("Ignored non-numeric quantity: {raw}"),
            }
        }
        ["use", id, item] => {
            let update = sheets
                .use_consumable(&CharacterId::from(*id), &ItemId::from(*item))
                .await?;
            println!("{}", update.outcome.message());
        }
        ["delete-gear", gear] => {
            let touched = catalog.delete_gear(&GearId::from(*gear)).await?;
            println!("Deleted gear, {touched} character(s) updated");
        }
        ["delete-weapon", weapon] => {
            let touched = catalog.delete_weapon(&WeaponId::from(*weapon)).await?;
            println!("Deleted weapon, {touched} character(s) updated");
        }
        ["delete-item", item] => {
            let touched = catalog.delete_item(&ItemId::from(*item)).await?;
            println!("Deleted item, {touched} character(s) updated");
        }
        [] => anyhow::bail!("{USAGE}"),
        [cmd, ..] => anyhow::bail!("Unknown or malformed command: {cmd}\n\n{USAGE}"),
    }

    Ok(())
}

fn backpack_query(rest: &[&str]) -> anyhow::Result<BackpackQuery> {
    let query = BackpackQuery::all();
    Ok(match rest {
        [] => query,
        ["all"] => query,
        ["all", search] => query.matching(*search),
        [category] => query.in_category(category.parse()?),
        [category, search] => query.in_category(category.parse()?).matching(*search),
        _ => anyhow::bail!("Usage: backpack <character> [category] [search]"),
    })
}

/// Turn `key=value` arguments into an edit of `current`.
fn edit_draft(current: &Character, fields: &[&str]) -> anyhow::Result<CharacterDraft> {
    let mut draft = CharacterDraft::editing(current);
    let mut attributes = current.attributes().clone();
    let mut attributes_touched = false;

    for field in fields {
        let (key, value) = field
            .split_once('=')
            .with_context(|| format!("Expected key=value, got `{field}`"))?;
        match key {
            "name" => draft.name = value.to_string(),
            "race" => draft = draft.with_race(value),
            "class" => draft = draft.with_class(value),
            "level" => {
                let level = value
                    .parse()
                    .with_context(|| format!("Level must be a whole number, got `{value}`"))?;
                draft = draft.with_level(level);
            }
            "background" => draft = draft.with_background(value),
            "appearance" => draft.physical_appearance = Some(value.to_string()),
            "image" => draft.image = Some(value.to_string()),
            _ => match key.strip_prefix("attr.") {
                Some(name) if !name.is_empty() => {
                    let score = value
                        .parse()
                        .with_context(|| format!("Score for {name} must be a number, got `{value}`"))?;
                    attributes.set(name, score);
                    attributes_touched = true;
                }
                _ => anyhow::bail!("Unknown field `{key}`"),
            },
        }
    }

    if attributes_touched {
        draft = draft.with_attributes(attributes);
    }
    Ok(draft)
}

fn print_stats(stats: &talewright_domain::CombatStats) {
    println!(
        "AC {} | Attack {} | Damage {}",
        stats.armor_class,
        stats.attack_bonus_label(),
        stats.damage
    );
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
