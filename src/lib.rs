//! Emoji picker core - Elm-style picker state
//!
//! This crate provides the data side of an embeddable emoji picker: the
//! categorized catalog, ranked name search, the precomputed layout table for a
//! virtualized category list, and the state machine that keeps the active
//! category and search mode in sync with scrolling and typing.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod layout;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod search;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, Category, Platform};
pub use commands::Cmd;
pub use config::PickerConfig;
pub use layout::{DisplayParams, LayoutEntry, LayoutTable};
pub use messages::Msg;
pub use model::PickerModel;
pub use runtime::{HostList, Picker};
pub use search::{SearchIndex, SearchOutcome};
