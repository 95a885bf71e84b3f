use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tarot_localizer::error::LocalizeError;
use tarot_localizer::model::LocalizedCard;
use tarot_localizer::output::render_cards;
use tarot_localizer::{load_cards, load_overrides, run, CliOptions};
use tempfile::tempdir;

fn write_json(path: &Path, value: &serde_json::Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn source_cards() -> serde_json::Value {
    json!([
        {
            "id": "major_00",
            "name": "The Fool",
            "arcana": "Major",
            "description": "A leap into the unknown.",
            "uprightMeaning": "New beginnings",
            "reversedMeaning": "Recklessness",
            "keywords": ["beginnings", "innocence"],
            "imageUrl": "cards/major_00.webp",
            "name_en": "The Fool"
        },
        {
            "id": "wands_3",
            "name": "Three of Wands",
            "arcana": "Minor",
            "description": "Looking ahead.",
            "uprightMeaning": "Expansion",
            "reversedMeaning": "Delays",
            "keywords": ["expansion", "vision"],
            "imageUrl": "cards/wands_3.webp"
        }
    ])
}

fn translations() -> serde_json::Value {
    json!({
        "major_00": {
            "name": "바보",
            "description": "미지로 뛰어드는 첫걸음.",
            "uprightMeaning": "새로운 시작",
            "reversedMeaning": "무모함"
        },
        "wands_3": {
            "name": "",
            "description": "",
            "uprightMeaning": "확장",
            "reversedMeaning": "지연"
        }
    })
}

fn setup(dir: &Path, cards: &serde_json::Value, overrides: &serde_json::Value) -> CliOptions {
    let data_path: PathBuf = dir.join("tarot_data.json");
    let translations_path = dir.join("tarot_translations.json");
    write_json(&data_path, cards);
    write_json(&translations_path, overrides);
    CliOptions {
        data_path,
        translations_path,
        check: false,
    }
}

#[test]
fn run_rewrites_data_file_in_place() {
    let dir = tempdir().expect("failed to create temp dir");
    let opts = setup(dir.path(), &source_cards(), &translations());

    run(opts.clone()).expect("localization should succeed");

    let written = fs::read_to_string(&opts.data_path).unwrap();
    assert!(written.ends_with("}\n]\n"), "single trailing newline");
    assert!(written.contains("\"name\": \"바보\""), "hangul is not escaped");

    let cards: Vec<LocalizedCard> = serde_json::from_str(&written).unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id, "major_00");
    assert_eq!(cards[0].arcana.as_deref(), Some("메이저 아르카나"));
    assert_eq!(cards[0].keywords, vec!["시작", "순수함"]);
    assert_eq!(cards[1].name.as_deref(), Some("완드 3"));
    assert_eq!(cards[1].keywords, vec!["확장", "비전"]);
    assert_eq!(cards[1].image_url.as_deref(), Some("cards/wands_3.webp"));
    assert!(!written.contains("name_en"), "unknown source fields are dropped");
}

#[test]
fn output_fields_follow_fixed_order() {
    let dir = tempdir().expect("failed to create temp dir");
    let opts = setup(dir.path(), &source_cards(), &translations());
    run(opts.clone()).unwrap();

    let written = fs::read_to_string(&opts.data_path).unwrap();
    let first = written.split("},").next().unwrap();
    let order = [
        "\"id\"",
        "\"name\"",
        "\"arcana\"",
        "\"uprightMeaning\"",
        "\"reversedMeaning\"",
        "\"description\"",
        "\"keywords\"",
        "\"imageUrl\"",
    ];
    let positions: Vec<usize> = order.iter().map(|k| first.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn missing_translation_leaves_file_untouched() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut cards = source_cards();
    cards.as_array_mut().unwrap().push(json!({
        "id": "swords_7",
        "arcana": "Minor",
        "keywords": ["truth"]
    }));
    let opts = setup(dir.path(), &cards, &translations());
    let before = fs::read(&opts.data_path).unwrap();

    let err = run(opts.clone()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<LocalizeError>(),
        Some(&LocalizeError::MissingTranslation {
            id: "swords_7".to_string()
        })
    );
    assert_eq!(fs::read(&opts.data_path).unwrap(), before);
}

#[test]
fn untranslatable_keyword_leaves_file_untouched() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut cards = source_cards();
    cards[1]["keywords"] = json!(["expansion", "xyzzy"]);
    let opts = setup(dir.path(), &cards, &translations());
    let before = fs::read(&opts.data_path).unwrap();

    let err = run(opts.clone()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LocalizeError>(),
        Some(LocalizeError::MissingKeyword { .. })
    ));
    assert_eq!(fs::read(&opts.data_path).unwrap(), before);
}

#[test]
fn check_mode_does_not_write() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut opts = setup(dir.path(), &source_cards(), &translations());
    opts.check = true;
    let before = fs::read(&opts.data_path).unwrap();

    run(opts.clone()).expect("check should succeed");
    assert_eq!(fs::read(&opts.data_path).unwrap(), before);
}

#[test]
fn missing_meaning_field_is_incomplete_not_a_parse_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut overrides = translations();
    overrides["wands_3"] = json!({ "uprightMeaning": "확장" });
    let opts = setup(dir.path(), &source_cards(), &overrides);

    let loaded = load_overrides(&opts.translations_path).unwrap();
    assert_eq!(loaded["wands_3"].reversed_meaning, "");

    let err = run(opts).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LocalizeError>(),
        Some(LocalizeError::IncompleteTranslation { .. })
    ));
}

#[test]
fn load_cards_reports_path_on_bad_json() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("tarot_data.json");
    fs::write(&path, "{ not an array").unwrap();
    let err = load_cards(&path).unwrap_err();
    assert!(format!("{err}").contains("tarot_data.json"));

    let missing = dir.path().join("absent.json");
    assert!(load_cards(&missing).is_err());
}

#[test]
fn null_keywords_and_image_are_accepted() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("tarot_data.json");
    write_json(
        &path,
        &json!([{ "id": "major_05", "keywords": null, "imageUrl": null }]),
    );
    let cards = load_cards(&path).unwrap();
    assert_eq!(cards.len(), 1);
    assert!(cards[0].keywords.is_none());
    assert!(cards[0].image_url.is_none());
}

#[test]
fn render_keeps_nulls_and_empty_lists() {
    let card = LocalizedCard {
        id: "major_05".to_string(),
        name: None,
        arcana: Some("메이저 아르카나".to_string()),
        upright_meaning: "전통".to_string(),
        reversed_meaning: "반항".to_string(),
        description: None,
        keywords: Vec::new(),
        image_url: None,
    };
    let rendered = render_cards(&[card]).unwrap();
    assert!(rendered.contains("\"name\": null"));
    assert!(rendered.contains("\"keywords\": []"));
    assert!(rendered.contains("  {\n    \"id\": \"major_05\""));
    assert!(rendered.ends_with("]\n"));
    assert!(!rendered.ends_with("\n\n"));
}
