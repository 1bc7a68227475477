//! Command-line argument parsing for the headless picker
//!
//! Supports:
//! - Loading an alternative dataset file
//! - Simulating a platform and OS version
//! - Overriding columns and emoji size from the config file
//! - Browsing, searching, printing the layout table and jumping to a category

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::catalog::{Category, Platform};
use crate::config::PickerConfig;

/// Browse and search the emoji catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "emoji-picker", version, about = "Browse and search the emoji catalog")]
pub struct CliArgs {
    /// Dataset file to load instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub dataset: Option<PathBuf>,

    /// Platform whose glyph support and scrolling rules apply
    #[arg(long, value_enum, default_value_t = PlatformArg::Other)]
    pub platform: PlatformArg,

    /// OS version (API level on Android)
    #[arg(long, value_name = "N")]
    pub os_version: Option<u32>,

    /// Emojis per row
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Pixel size of one emoji
    #[arg(long, value_name = "PX")]
    pub emoji_size: Option<f32>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformArg {
    Android,
    Ios,
    Web,
    Other,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print every category with its emoji rows
    Browse,
    /// Search emojis by name
    Search {
        /// Search text
        query: String,
    },
    /// Print the precomputed layout table
    Layout,
    /// Tap a category shortcut and report the scroll request
    Jump {
        /// Category name, e.g. "Food & Drink"
        category: String,
    },
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Browse,
    Search(String),
    Layout,
    Jump(Category),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub platform: Platform,
    pub dataset: Option<PathBuf>,
    pub config: PickerConfig,
    pub action: Action,
}

/// Android API level assumed when none is given
pub const DEFAULT_ANDROID_VERSION: u32 = 29;

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    ///
    /// CLI values override the ones from the config file.
    pub fn into_config(self, mut config: PickerConfig) -> Result<StartupConfig, String> {
        let platform = match self.platform {
            PlatformArg::Android => Platform::Android {
                api_level: self.os_version.unwrap_or(DEFAULT_ANDROID_VERSION),
            },
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Web => Platform::Web,
            PlatformArg::Other => Platform::Other,
        };

        if let Some(columns) = self.columns {
            if columns == 0 {
                return Err("--columns must be at least 1".to_string());
            }
            config.columns = columns;
        }
        if let Some(size) = self.emoji_size {
            if !(size.is_finite() && size > 0.0) {
                return Err("--emoji-size must be a positive number".to_string());
            }
            config.emoji_size = size;
        }

        let action = match self.command.unwrap_or(CliCommand::Browse) {
            CliCommand::Browse => Action::Browse,
            CliCommand::Search { query } => Action::Search(query),
            CliCommand::Layout => Action::Layout,
            CliCommand::Jump { category } => Action::Jump(
                Category::from_name(&category)
                    .ok_or_else(|| format!("Unknown category: {}", category))?,
            ),
        };

        Ok(StartupConfig {
            platform,
            dataset: self.dataset,
            config,
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("emoji-picker").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_browse_on_other_platform() {
        let config = parse(&[]).into_config(PickerConfig::default()).unwrap();
        assert_eq!(config.platform, Platform::Other);
        assert_eq!(config.action, Action::Browse);
        assert_eq!(config.config, PickerConfig::default());
    }

    #[test]
    fn test_android_version() {
        let config = parse(&["--platform", "android", "--os-version", "24"])
            .into_config(PickerConfig::default())
            .unwrap();
        assert_eq!(config.platform, Platform::Android { api_level: 24 });

        let config = parse(&["--platform", "android"])
            .into_config(PickerConfig::default())
            .unwrap();
        assert_eq!(
            config.platform,
            Platform::Android {
                api_level: DEFAULT_ANDROID_VERSION
            }
        );
    }

    #[test]
    fn test_cli_overrides_config() {
        let file_config = PickerConfig {
            columns: 9,
            ..PickerConfig::default()
        };
        let config = parse(&["--columns", "5", "--emoji-size", "40", "search", "cat"])
            .into_config(file_config)
            .unwrap();
        assert_eq!(config.config.columns, 5);
        assert_eq!(config.config.emoji_size, 40.0);
        assert_eq!(config.action, Action::Search("cat".to_string()));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(parse(&["--columns", "0"])
            .into_config(PickerConfig::default())
            .is_err());
        assert!(parse(&["--emoji-size", "0"])
            .into_config(PickerConfig::default())
            .is_err());
        assert!(parse(&["jump", "Component"])
            .into_config(PickerConfig::default())
            .is_err());
    }

    #[test]
    fn test_jump_resolves_category() {
        let config = parse(&["jump", "Food & Drink"])
            .into_config(PickerConfig::default())
            .unwrap();
        assert_eq!(config.action, Action::Jump(Category::FoodDrink));
    }
}
