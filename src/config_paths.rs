//! Where the picker keeps its files
//!
//! One directory holds everything:
//!
//! ```text
//! emoji-picker/
//!   config.yaml          PickerConfig
//!   emoji.json           optional full dataset, used instead of the built-in sample
//!   logs/emoji-picker.log.YYYY-MM-DD
//! ```
//!
//! The directory is `$XDG_CONFIG_HOME/emoji-picker` or `~/.config/emoji-picker`
//! on Unix and macOS, `%APPDATA%\emoji-picker` on Windows.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "emoji-picker";
const CONFIG_FILE: &str = "config.yaml";
const DATASET_FILE: &str = "emoji.json";
const LOGS_DIR: &str = "logs";

/// Prefix of the daily rolling log files
pub const LOG_FILE_PREFIX: &str = "emoji-picker.log";

/// Directory and file-name prefix for the rolling log appender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLocation {
    pub dir: PathBuf,
    pub prefix: &'static str,
}

/// Paths rooted at one picker directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    root: PathBuf,
}

impl ConfigPaths {
    /// The per-user picker directory, if the platform has one
    pub fn user() -> Option<Self> {
        user_config_root().map(|base| Self::at(base.join(APP_DIR)))
    }

    /// Paths under an explicit directory
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    /// A user-installed dataset, when one exists
    pub fn dataset_file(&self) -> Option<PathBuf> {
        let path = self.root.join(DATASET_FILE);
        path.is_file().then_some(path)
    }

    /// Create the logs directory and describe where log files go
    pub fn log_location(&self) -> Result<LogLocation, String> {
        let dir = self.logs_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
        Ok(LogLocation {
            dir,
            prefix: LOG_FILE_PREFIX,
        })
    }
}

#[cfg(target_os = "windows")]
fn user_config_root() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn user_config_root() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_under_root() {
        let paths = ConfigPaths::at("/tmp/picker");
        assert_eq!(paths.root(), Path::new("/tmp/picker"));
        assert_eq!(paths.config_file(), Path::new("/tmp/picker/config.yaml"));
        assert_eq!(paths.logs_dir(), Path::new("/tmp/picker/logs"));
    }

    #[test]
    fn test_log_location_creates_logs_dir() {
        let dir = TempDir::new().unwrap();
        let paths = ConfigPaths::at(dir.path().join("emoji-picker"));

        let location = paths.log_location().unwrap();
        assert_eq!(location.dir, paths.logs_dir());
        assert_eq!(location.prefix, LOG_FILE_PREFIX);
        assert!(location.dir.is_dir());
    }

    #[test]
    fn test_dataset_file_only_when_present() {
        let dir = TempDir::new().unwrap();
        let paths = ConfigPaths::at(dir.path());
        assert_eq!(paths.dataset_file(), None);

        std::fs::write(dir.path().join("emoji.json"), "[]").unwrap();
        assert_eq!(paths.dataset_file(), Some(dir.path().join("emoji.json")));
    }
}
