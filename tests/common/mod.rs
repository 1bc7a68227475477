//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use emoji_picker::catalog::{Catalog, CategoryLabels, EmojiRecord, PlatformCapabilities};
use emoji_picker::layout::DisplayParams;
use emoji_picker::model::PickerModel;
use emoji_picker::runtime::{Picker, RecordingHost};

pub fn record(category: &str, unified: &str, short_name: &str, added_in: &str) -> EmojiRecord {
    EmojiRecord {
        category: category.to_string(),
        unified: unified.to_string(),
        short_name: short_name.to_string(),
        added_in: added_in.to_string(),
    }
}

/// Small dataset touching a few categories, in curatorial order
pub fn sample_records() -> Vec<EmojiRecord> {
    vec![
        record("Smileys & Emotion", "1F600", "grinning", "6.1"),
        record("Smileys & Emotion", "1F603", "smiley", "6.0"),
        record("Smileys & Emotion", "1F604", "smile", "6.0"),
        record("Smileys & Emotion", "1F605", "sweat_smile", "6.0"),
        record("Smileys & Emotion", "2639-FE0F", "white_frowning_face", "1.1"),
        record("Animals & Nature", "1F436", "dog", "6.0"),
        record("Animals & Nature", "1F431", "cat", "6.0"),
        record("Food & Drink", "2615", "coffee", "4.0"),
        record("Symbols", "23CF-FE0F", "eject", "4.0"),
        record("Flags", "1F1E6-1F1E8", "flag-ac", "2.0"),
        record("Component", "1F3FB", "skin-tone-2", "8.0"),
    ]
}

pub fn test_model_with(records: Vec<EmojiRecord>, capabilities: PlatformCapabilities) -> PickerModel {
    let catalog = Catalog::build(records, capabilities).expect("sample dataset is valid");
    PickerModel::new(
        catalog,
        capabilities,
        DisplayParams::default(),
        CategoryLabels::english(),
    )
}

/// Model over the sample dataset on a platform with full glyph support
pub fn test_model() -> PickerModel {
    test_model_with(sample_records(), PlatformCapabilities::default())
}

pub fn test_picker() -> Picker<RecordingHost> {
    Picker::new(test_model(), RecordingHost::default())
}
