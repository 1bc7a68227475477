//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! search, scrolling and active-category transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=viewport=debug,message=debug` - scoped filtering
//! - `RUST_LOG=emoji_picker::search=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/emoji-picker/logs/emoji-picker.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::catalog::Category;
use crate::config_paths::{ConfigPaths, LogLocation};
use crate::model::{PickerModel, ViewportMode};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering (default `warn`).
/// File logging writes to `~/.config/emoji-picker/logs/emoji-picker.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let location = ConfigPaths::user()
        .ok_or_else(|| "No config directory available".to_string())
        .and_then(|paths| paths.log_location());
    let file_layer = match location {
        Ok(LogLocation { dir, prefix }) => {
            let file_appender = tracing_appender::rolling::daily(dir, prefix);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of viewport state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportSnapshot {
    pub mode: ViewportMode,
    pub last_active: Category,
    pub result_count: Option<usize>,
    pub columns: usize,
    pub emoji_size: f32,
}

impl ViewportSnapshot {
    pub fn from_model(model: &PickerModel) -> Self {
        let display = model.display();
        Self {
            mode: model.viewport.mode(),
            last_active: model.viewport.last_active(),
            result_count: model.search_results.as_ref().map(|r| r.match_count()),
            columns: display.columns,
            emoji_size: display.emoji_size,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ViewportSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }
        if self.last_active != other.last_active {
            changes.push(format!(
                "last active: {} → {}",
                self.last_active, other.last_active
            ));
        }
        if self.result_count != other.result_count {
            changes.push(format!(
                "results: {:?} → {:?}",
                self.result_count, other.result_count
            ));
        }
        if self.columns != other.columns || self.emoji_size != other.emoji_size {
            changes.push(format!(
                "display: {}x{} → {}x{}",
                self.columns, self.emoji_size, other.columns, other.emoji_size
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
