//! Catalog builder: cargo query rows to expected-filename/display-name maps.
//!
//! Keys are constructed deterministically from the numeric row fields using
//! the same zero-padded formats the wiki uses for its uploads, so a catalog
//! key lines up with the filename the media listing will report for that
//! entity. Duplicate keys are last-write-wins.

use crate::api::types::{AdventurerRow, DragonRow, WeaponRow, WyrmprintRow};
use crate::api::WikiClient;
use crate::category::Category;
use crate::error::ScrapeError;
use std::collections::HashMap;
use tracing::{info, warn};

/// Expected image filename to raw display name, built fresh per run
pub type Catalog = HashMap<String, String>;

/// Availability values excluded from the dragon catalog
const DRAGON_EXCLUDED_AVAILABILITY: [&str; 5] = [
    "Story",
    "High Dragon",
    "Event Welfare",
    "Void",
    "Event Welfare, Zodiac",
];

/// Server-side filter for the weapon catalog
const WEAPON_WHERE: &str =
    "(Availability='High Dragon' AND CraftNodeId >= 200) OR Availability='Agito'";

/// Build the catalog for a category
pub async fn build(client: &WikiClient, category: Category) -> Result<Catalog, ScrapeError> {
    let mut catalog = Catalog::new();

    match category {
        Category::Adventurer => {
            let rows: Vec<AdventurerRow> = client
                .cargo_query("Adventurers", "Id,VariationId,FullName,Rarity", None)
                .await?;
            for row in &rows {
                if let Some((key, name)) = adventurer_entry(row) {
                    catalog.insert(key, name);
                }
            }
        }
        Category::Dragon => {
            let rows: Vec<DragonRow> = client
                .cargo_query(
                    "Dragons",
                    "BaseId,VariationId,FullName",
                    Some(&dragon_where()),
                )
                .await?;
            for row in &rows {
                if let Some((key, name)) = dragon_entry(row) {
                    catalog.insert(key, name);
                }
            }
        }
        Category::Weapon => {
            let rows: Vec<WeaponRow> = client
                .cargo_query(
                    "Weapons",
                    "BaseId,FormId,Availability,ElementalType,Type",
                    Some(WEAPON_WHERE),
                )
                .await?;
            for row in &rows {
                if let Some((key, name)) = weapon_entry(row) {
                    catalog.insert(key, name);
                }
            }
        }
        Category::Wyrmprint => {
            let rows: Vec<WyrmprintRow> =
                client.cargo_query("Wyrmprints", "BaseId,Name", None).await?;
            for row in &rows {
                let (key, name) = wyrmprint_entry(row);
                catalog.insert(key, name);
            }
        }
    }

    info!(category = %category, entries = catalog.len(), "Catalog built");
    Ok(catalog)
}

/// Filter clause excluding welfare/story dragons, rarity 5 and up only
fn dragon_where() -> String {
    let exclusions = DRAGON_EXCLUDED_AVAILABILITY
        .iter()
        .map(|availability| format!("Availability=\"{}\"", availability))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("Rarity>=5 AND NOT ({})", exclusions)
}

fn adventurer_entry(row: &AdventurerRow) -> Option<(String, String)> {
    let variation = parse_numeric(&row.variation_id, "VariationId")?;
    let rarity = parse_numeric(&row.rarity, "Rarity")?;
    let key = format!("{}_0{}_r0{}.png", row.id, variation, rarity);
    Some((key, row.full_name.clone()))
}

fn dragon_entry(row: &DragonRow) -> Option<(String, String)> {
    let variation = parse_numeric(&row.variation_id, "VariationId")?;
    let key = format!("{}_{:02}.png", row.base_id, variation);
    Some((key, row.full_name.clone()))
}

fn wyrmprint_entry(row: &WyrmprintRow) -> (String, String) {
    // Both image variants resolve through the _02 key at download time
    (format!("{}_02.png", row.base_id), row.name.clone())
}

fn weapon_entry(row: &WeaponRow) -> Option<(String, String)> {
    let tag = match row.availability.as_str() {
        "High Dragon" => "HDT2",
        "Agito" => "Agito",
        other => {
            warn!(availability = other, base_id = %row.base_id, "Skipping weapon with unmapped availability");
            return None;
        }
    };

    let key = format!("{}_01_{}.png", row.base_id, row.form_id);
    let name = format!(
        "{} {} {}",
        tag,
        row.elemental_type.to_lowercase(),
        row.weapon_type.to_lowercase()
    );
    Some((key, name))
}

/// Parse a cargo string field as a number, dropping the row on failure
fn parse_numeric(value: &str, field: &'static str) -> Option<u32> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(field, value, "Skipping row with unparseable numeric field");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adventurer_row(id: &str, variation: &str, name: &str, rarity: &str) -> AdventurerRow {
        AdventurerRow {
            id: id.to_string(),
            variation_id: variation.to_string(),
            full_name: name.to_string(),
            rarity: rarity.to_string(),
        }
    }

    #[test]
    fn test_adventurer_key_format() {
        let row = adventurer_row("100001", "1", "Euden", "4");
        let (key, name) = adventurer_entry(&row).unwrap();
        assert_eq!(key, "100001_01_r04.png");
        assert_eq!(name, "Euden");
    }

    #[test]
    fn test_adventurer_three_digit_variation() {
        let row = adventurer_row("110255", "11", "Gala Mym", "5");
        let (key, _) = adventurer_entry(&row).unwrap();
        assert_eq!(key, "110255_011_r05.png");
    }

    #[test]
    fn test_adventurer_unparseable_rarity_dropped() {
        let row = adventurer_row("100001", "1", "Euden", "");
        assert!(adventurer_entry(&row).is_none());
    }

    #[test]
    fn test_dragon_key_format() {
        let row = DragonRow {
            base_id: "200010".to_string(),
            variation_id: "1".to_string(),
            full_name: "Midgardsormr".to_string(),
        };
        let (key, name) = dragon_entry(&row).unwrap();
        assert_eq!(key, "200010_01.png");
        assert_eq!(name, "Midgardsormr");
    }

    #[test]
    fn test_wyrmprint_key_uses_second_variant() {
        let row = WyrmprintRow {
            base_id: "400001".to_string(),
            name: "Resounding Rendition".to_string(),
        };
        let (key, name) = wyrmprint_entry(&row);
        assert_eq!(key, "400001_02.png");
        assert_eq!(name, "Resounding Rendition");
    }

    #[test]
    fn test_weapon_entry_composes_tag_element_type() {
        let row = WeaponRow {
            base_id: "301001".to_string(),
            form_id: "19901".to_string(),
            availability: "High Dragon".to_string(),
            elemental_type: "Flame".to_string(),
            weapon_type: "Sword".to_string(),
        };
        let (key, name) = weapon_entry(&row).unwrap();
        assert_eq!(key, "301001_01_19901.png");
        assert_eq!(name, "HDT2 flame sword");
    }

    #[test]
    fn test_weapon_unmapped_availability_dropped() {
        let row = WeaponRow {
            base_id: "301001".to_string(),
            form_id: "19901".to_string(),
            availability: "Core".to_string(),
            elemental_type: "Flame".to_string(),
            weapon_type: "Sword".to_string(),
        };
        assert!(weapon_entry(&row).is_none());
    }

    #[test]
    fn test_dragon_where_clause() {
        let clause = dragon_where();
        assert!(clause.starts_with("Rarity>=5 AND NOT ("));
        assert!(clause.contains("Availability=\"Story\""));
        assert!(clause.contains("Availability=\"Event Welfare, Zodiac\""));
    }

    #[test]
    fn test_keys_match_category_patterns() {
        // The catalog key formats must line up with the media listing regexes
        let (adv_key, _) = adventurer_entry(&adventurer_row("100001", "1", "Euden", "4")).unwrap();
        assert!(Category::Adventurer.pattern().is_match(&adv_key));

        let (dragon_key, _) = dragon_entry(&DragonRow {
            base_id: "200010".to_string(),
            variation_id: "1".to_string(),
            full_name: "Midgardsormr".to_string(),
        })
        .unwrap();
        assert!(Category::Dragon.pattern().is_match(&dragon_key));

        let (print_key, _) = wyrmprint_entry(&WyrmprintRow {
            base_id: "400001".to_string(),
            name: "Resounding Rendition".to_string(),
        });
        assert!(Category::Wyrmprint.pattern().is_match(&print_key));

        let (weapon_key, _) = weapon_entry(&WeaponRow {
            base_id: "301001".to_string(),
            form_id: "19901".to_string(),
            availability: "Agito".to_string(),
            elemental_type: "Shadow".to_string(),
            weapon_type: "Lance".to_string(),
        })
        .unwrap();
        assert!(Category::Weapon.pattern().is_match(&weapon_key));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let mut catalog = Catalog::new();
        for row in [
            adventurer_row("100001", "1", "First", "4"),
            adventurer_row("100001", "1", "Second", "4"),
        ] {
            let (key, name) = adventurer_entry(&row).unwrap();
            catalog.insert(key, name);
        }
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog["100001_01_r04.png"], "Second");
    }
}
