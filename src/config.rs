//! Picker configuration persistence
//!
//! Stores user preferences in `~/.config/emoji-picker/config.yaml`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::catalog::{Category, CategoryLabels};
use crate::config_paths::ConfigPaths;
use crate::layout::{DisplayParams, DEFAULT_COLUMNS, DEFAULT_EMOJI_SIZE};

/// Presentation-only overrides, handed to the renderer untouched
///
/// Each named slot holds free-form style properties for one part of the picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_shortcut_color: Option<String>,
    /// Slots: modal, background, container, scroll, header, search, emoji
    #[serde(flatten)]
    pub slots: BTreeMap<String, serde_yaml::Value>,
}

impl StyleOverrides {
    pub fn slot(&self, name: &str) -> Option<&serde_yaml::Value> {
        self.slots.get(name)
    }
}

/// Picker configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Emojis per row
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Pixel size of one emoji
    #[serde(default = "default_emoji_size")]
    pub emoji_size: f32,
    /// Header labels, one per category in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_categories: Option<Vec<String>>,
    #[serde(default)]
    pub style: StyleOverrides,
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

fn default_emoji_size() -> f32 {
    DEFAULT_EMOJI_SIZE
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            emoji_size: default_emoji_size(),
            localized_categories: None,
            style: StyleOverrides::default(),
        }
    }
}

impl PickerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = ConfigPaths::user().map(|paths| paths.config_file()) else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = ConfigPaths::user()
            .map(|paths| paths.config_file())
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Geometry parameters, clamped to usable values
    pub fn display(&self) -> DisplayParams {
        DisplayParams::new(self.columns, self.emoji_size)
    }

    /// Category header labels; a label list of the wrong length is ignored
    pub fn labels(&self) -> CategoryLabels {
        let Some(labels) = &self.localized_categories else {
            return CategoryLabels::english();
        };
        CategoryLabels::localized(labels.clone()).unwrap_or_else(|| {
            tracing::warn!(
                "Expected {} localized category labels, got {}; using English names",
                Category::COUNT,
                labels.len()
            );
            CategoryLabels::english()
        })
    }
}
