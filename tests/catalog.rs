//! Catalog construction tests - platform filtering, denylist, built-in dataset

mod common;

use common::{record, sample_records};
use emoji_picker::catalog::{
    Catalog, CatalogError, Category, Platform, PlatformCapabilities, BUILTIN_DATASET, DENYLIST,
};
use emoji_picker::config_paths::ConfigPaths;
use emoji_picker::layout::{DisplayParams, LayoutTable};
use tempfile::TempDir;

fn android(api_level: u32) -> PlatformCapabilities {
    Platform::Android { api_level }.capabilities()
}

#[test]
fn test_android_tier_for_version_two_glyphs() {
    let records = vec![record("Smileys & Emotion", "1F600", "grinning", "2")];

    let old = Catalog::build(records.clone(), android(22)).unwrap();
    assert!(old.glyphs(Category::SmileysEmotion).is_empty());
    assert!(old.entries().is_empty());

    let new = Catalog::build(records, android(23)).unwrap();
    assert_eq!(new.glyphs(Category::SmileysEmotion), ["\u{1F600}"]);
}

#[test]
fn test_android_tiers_preserve_order() {
    let records = vec![
        record("Objects", "1F4A1", "bulb", "0.6"),
        record("Objects", "1F97D", "goggles", "11.0"),
        record("Objects", "1FA90", "ringed_planet", "12.0"),
        record("Objects", "1F4DA", "books", "1.0"),
        record("Objects", "1F5DD-FE0F", "old_key", "unknown"),
    ];

    let api28 = Catalog::build(records.clone(), android(28)).unwrap();
    assert_eq!(
        api28.glyphs(Category::Objects),
        ["\u{1F4A1}", "\u{1F97D}", "\u{1F4DA}", "\u{1F5DD}\u{FE0F}"]
    );

    let api29 = Catalog::build(records.clone(), android(29)).unwrap();
    assert_eq!(api29.glyphs(Category::Objects).len(), 5);

    // iOS and web draw everything
    let ios = Catalog::build(records, Platform::Ios.capabilities()).unwrap();
    assert_eq!(ios.glyphs(Category::Objects).len(), 5);
}

#[test]
fn test_denylist_removes_entries_on_every_platform() {
    for capabilities in [
        android(21),
        android(35),
        Platform::Ios.capabilities(),
        Platform::Web.capabilities(),
        PlatformCapabilities::default(),
    ] {
        let catalog = Catalog::build(sample_records(), capabilities).unwrap();
        for entry in catalog.entries() {
            assert!(
                !DENYLIST.contains(&entry.short_name()),
                "{} survived filtering",
                entry.short_name()
            );
        }
    }
}

#[test]
fn test_builtin_dataset_excludes_denylisted_names() {
    let catalog = Catalog::builtin(PlatformCapabilities::default()).unwrap();
    assert!(catalog
        .entries()
        .iter()
        .all(|entry| !DENYLIST.contains(&entry.short_name())));
    // Denylisted names do exist in the raw data
    for name in DENYLIST {
        assert!(BUILTIN_DATASET.contains(&format!("\"{}\"", name)));
    }
}

#[test]
fn test_builtin_layout_is_contiguous() {
    let catalog = Catalog::builtin(PlatformCapabilities::default()).unwrap();
    let table = LayoutTable::new(catalog.by_category(), DisplayParams::default());
    let mut expected_offset = 0.0;
    for (entry, category) in table.entries().iter().zip(Category::ALL) {
        assert_eq!(entry.index, category.index());
        assert_eq!(entry.offset, expected_offset);
        expected_offset += entry.length;
    }
    assert_eq!(table.total_length(), expected_offset);
}

#[test]
fn test_from_path_reads_dataset_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("emoji.json");
    std::fs::write(
        &path,
        r#"[
            {"category": "Food & Drink", "unified": "2615", "short_name": "coffee", "added_in": "4.0"},
            {"category": "Flags", "unified": "1F3C1", "short_name": "checkered_flag"}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::from_path(&path, PlatformCapabilities::default()).unwrap();
    assert_eq!(catalog.glyphs(Category::FoodDrink), ["\u{2615}"]);
    // Missing added_in is treated as always supported
    assert_eq!(catalog.glyphs(Category::Flags), ["\u{1F3C1}"]);
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");
    let err = Catalog::from_path(&path, PlatformCapabilities::default()).unwrap_err();
    match err {
        CatalogError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_codepoint_fails_even_when_filtered_out() {
    // Denylisted, yet still validated
    let records = vec![record("Symbols", "not-hex", "eject", "4.0")];
    let err = Catalog::build(records, android(35)).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidCodepoint { .. }));
    assert!(err.to_string().contains("eject"));
}

#[test]
fn test_builtin_dataset_is_a_sample() {
    let catalog = Catalog::builtin(PlatformCapabilities::default()).unwrap();
    // Small enough to embed, yet every category is represented
    assert!(catalog.entries().len() < 500);
    for category in Category::ALL {
        assert!(!catalog.glyphs(category).is_empty(), "{} is empty", category);
    }
}

#[test]
fn test_installed_dataset_replaces_sample() {
    let dir = TempDir::new().unwrap();
    let paths = ConfigPaths::at(dir.path());
    assert!(paths.dataset_file().is_none());

    std::fs::write(
        dir.path().join("emoji.json"),
        r#"[{"category": "Objects", "unified": "1F4A1", "short_name": "bulb", "added_in": "0.6"}]"#,
    )
    .unwrap();

    let path = paths.dataset_file().unwrap();
    let catalog = Catalog::from_path(&path, PlatformCapabilities::default()).unwrap();
    assert_eq!(catalog.entries().len(), 1);
    assert_eq!(catalog.glyphs(Category::Objects), ["\u{1F4A1}"]);
    assert!(catalog.glyphs(Category::SmileysEmotion).is_empty());
}
