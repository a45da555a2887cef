use std::fs;

use team_content::{CatalogLoader, CharacterLoader, ConfigLoader, ContentFactory, EquipmentLoader};
use team_core::{CatalogError, ConditionLogic, Element, StatKind};
use tempfile::TempDir;

const CHARACTERS: &str = r#"[
    {"id": 1, "code": "DBL01-01S", "name": "Goku", "element": "RED", "rarity": "SPARKING",
     "image": "https://example.invalid/goku.png", "visual_tags": ["Saiyan", "Son Family"]},
    {"id": "2", "code": 4402, "name": "Gohan", "element": "YEL", "rarity": "ULTRA",
     "visual_tags": ["Saiyan", "Son Family", "Hybrid Saiyan"]},
    {"name": "Frieza", "element": "PUR", "visual_tags": ["Frieza Force"]}
]"#;

const EQUIPMENT: &str = r#"[
    {"id": 10, "name": "Family Crest", "url": "https://example.invalid/10",
     "slots": [
        {"slot_index": 1, "effect": "Base Strike & Blast Attack+10.00%"},
        {"slot_index": 2, "effect": "8.00 ~ 12.50% to Strike & Blast Defense per 'Tag: Son Family' battle member."}
     ],
     "conditions_data": [["Son Family"]],
     "condition_desc": "Must meet all tags in the group"},
    {"id": "11", "name": "Tyrant Badge",
     "slots": [{"effect": "5.00% to Blast Defense - OR - 5.00% to Strike Defense"}],
     "conditions_data": [{"tags": ["Saiyan"]}, {"tags": ["Frieza Force"]}],
     "condition_logic": "OR"},
    {"name": "Plain Ring", "slots": [{"effect": "Critical+2.00%"}]}
]"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_characters_with_mixed_scalar_ids() {
    let characters = CharacterLoader::from_json(CHARACTERS).unwrap();
    assert_eq!(characters.len(), 3);
    assert_eq!(characters[0].id.as_deref(), Some("1"));
    assert_eq!(characters[1].code.as_deref(), Some("4402"));
    assert_eq!(characters[1].element, Some(Element::Yel));
    assert_eq!(characters[2].id, None);
    assert!(characters[2].has_tag("Frieza Force"));
}

#[test]
fn loads_equipment_and_normalizes_condition_groups() {
    let equipment = EquipmentLoader::from_json(EQUIPMENT).unwrap();
    assert_eq!(equipment.len(), 3);

    let crest = &equipment[0];
    assert_eq!(crest.id.as_deref(), Some("10"));
    assert_eq!(crest.condition_logic, ConditionLogic::And);
    assert_eq!(crest.conditions_data[0].tokens(), ["Son Family"]);
    assert!(crest.scales_with_members());

    let badge = &equipment[1];
    assert_eq!(badge.condition_logic, ConditionLogic::Or);
    assert_eq!(badge.conditions_data[1].tokens(), ["Frieza Force"]);

    assert!(equipment[2].conditions_data.is_empty());
    assert!(!equipment[2].scales_with_members());
}

#[test]
fn malformed_json_is_rejected_as_a_whole() {
    let err = EquipmentLoader::from_json(r#"[{"name": "Ok"}, {"name": "Broken""#).unwrap_err();
    assert!(err.to_string().contains("Failed to parse equipment JSON"));

    let err = CharacterLoader::from_json(r#"[{"name": "Goku"}, {"id": 3}]"#).unwrap_err();
    assert!(err.to_string().contains("Failed to parse character JSON"));
}

#[test]
fn validation_errors_are_typed() {
    let err = CharacterLoader::from_json(r#"[{"name": "Goku"}, {"name": "   "}]"#).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::MalformedRecord { index: 1, .. })
    ));

    let err = EquipmentLoader::from_json(r#"[{"id": 5, "name": "A"}, {"id": "5", "name": "B"}]"#)
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::DuplicateId { first: 0, second: 1, .. })
    ));
}

#[test]
fn catalog_loader_reads_both_files() {
    let dir = TempDir::new().unwrap();
    let characters = write(&dir, "characters.json", CHARACTERS);
    let equipment = write(&dir, "equipment.json", EQUIPMENT);

    let catalog = CatalogLoader::load(&characters, &equipment).unwrap();
    assert_eq!(catalog.characters().len(), 3);
    assert!(catalog.find_equipment("tyrant badge").is_some());
    assert!(catalog.find_character("DBL01-01S").is_some());

    let missing = dir.path().join("nope.json");
    let err = CatalogLoader::load(&characters, &missing).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn factory_uses_default_config_when_absent() {
    let dir = TempDir::new().unwrap();
    write(&dir, ContentFactory::CHARACTERS_FILE, CHARACTERS);
    write(&dir, ContentFactory::EQUIPMENT_FILE, EQUIPMENT);
    let factory = ContentFactory::new(dir.path());

    assert_eq!(factory.load_config().unwrap().tag_min_occurrences, 2);
    write(&dir, ContentFactory::CONFIG_FILE, "tag_min_occurrences = 1\n");
    assert_eq!(factory.load_config().unwrap().tag_min_occurrences, 1);

    let catalog = factory.load_catalog().unwrap();
    let crest = catalog.find_equipment("10").unwrap();
    assert!(crest.effects().any(|e| team_core::filter::matches_effect(e, StatKind::BaseBlastAttack)));
}

#[test]
fn config_parse_errors_are_reported() {
    assert!(ConfigLoader::from_toml("tag_min_occurrences = \"many\"").is_err());
    assert_eq!(ConfigLoader::from_toml("").unwrap().tag_min_occurrences, 2);
}
