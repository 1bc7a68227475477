//! Emoji catalog
//!
//! Built once from the flat dataset: denylisted and platform-unsupported
//! records are dropped, every codepoint sequence is decoded, and the survivors
//! are grouped by category in dataset order. The result is never mutated.

mod category;
mod glyph;
mod platform;

pub use category::{icon_for_name, Category, CategoryLabels, FALLBACK_ICON};
pub use glyph::{codepoint_to_glyph, CodepointError};
pub use platform::{
    filter_by_capability, is_denylisted, parse_added_in, GlyphSupport, Platform,
    PlatformCapabilities, DENYLIST,
};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The dataset shipped with the crate, pre-sorted by curatorial order
///
/// This is a curated sample of about a hundred records covering every category,
/// the denylisted names and a few non-category records. The full emoji-data
/// set runs to a few thousand records; load it with [`Catalog::from_path`]
/// (`--dataset` on the command line, or `emoji.json` in the config directory).
pub const BUILTIN_DATASET: &str = include_str!("../../assets/emoji.json");

/// One entry of the dataset file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    pub category: String,
    /// Hyphen-joined hex codepoints
    pub unified: String,
    pub short_name: String,
    /// Emoji version the glyph was introduced in, as text
    #[serde(default)]
    pub added_in: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read emoji dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid emoji dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("emoji '{short_name}' has invalid codepoints '{unified}': {source}")]
    InvalidCodepoint {
        short_name: String,
        unified: String,
        #[source]
        source: CodepointError,
    },
}

impl AsRef<EmojiRecord> for EmojiRecord {
    fn as_ref(&self) -> &EmojiRecord {
        self
    }
}

/// A filtered record together with its decoded glyph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub record: EmojiRecord,
    pub glyph: String,
}

impl CatalogEntry {
    pub fn new(record: EmojiRecord) -> Result<Self, CatalogError> {
        let glyph =
            codepoint_to_glyph(&record.unified).map_err(|source| CatalogError::InvalidCodepoint {
                short_name: record.short_name.clone(),
                unified: record.unified.clone(),
                source,
            })?;
        Ok(Self { record, glyph })
    }

    pub fn short_name(&self) -> &str {
        &self.record.short_name
    }
}

impl AsRef<EmojiRecord> for CatalogEntry {
    fn as_ref(&self) -> &EmojiRecord {
        &self.record
    }
}

/// Glyphs grouped by category. Every category is present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedCatalog {
    groups: [Vec<String>; Category::COUNT],
}

impl CategorizedCatalog {
    pub fn get(&self, category: Category) -> &[String] {
        &self.groups[category.index()]
    }

    pub fn len(&self, category: Category) -> usize {
        self.groups[category.index()].len()
    }

    /// Categories in display order with their glyphs
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL
            .iter()
            .map(move |&category| (category, self.get(category)))
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}

impl FromIterator<(Category, String)> for CategorizedCatalog {
    fn from_iter<I: IntoIterator<Item = (Category, String)>>(iter: I) -> Self {
        let mut catalog = Self::default();
        for (category, glyph) in iter {
            catalog.groups[category.index()].push(glyph);
        }
        catalog
    }
}

/// Partition entries by category, preserving order within each category
///
/// Entries whose category is not one of the nine known ones are dropped.
pub fn group_by_category(entries: &[CatalogEntry]) -> CategorizedCatalog {
    entries
        .iter()
        .filter_map(|entry| {
            Category::from_name(&entry.record.category).map(|c| (c, entry.glyph.clone()))
        })
        .collect()
}

/// Parse a dataset file's contents
pub fn parse_dataset(json: &str) -> Result<Vec<EmojiRecord>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// The immutable emoji catalog: the flat filtered list and its grouped view
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_category: CategorizedCatalog,
}

impl Catalog {
    /// Build from raw records for the given platform
    ///
    /// Every record's codepoints are validated, including records the platform
    /// filter would drop: a bad sequence means a corrupt dataset, not a runtime
    /// condition.
    pub fn build(
        records: Vec<EmojiRecord>,
        capabilities: PlatformCapabilities,
    ) -> Result<Self, CatalogError> {
        let total = records.len();
        let entries = records
            .into_iter()
            .map(CatalogEntry::new)
            .collect::<Result<Vec<_>, _>>()?;

        let entries: Vec<CatalogEntry> = entries
            .into_iter()
            .filter(|entry| !is_denylisted(entry.short_name()))
            .collect();
        let entries = filter_by_capability(entries, capabilities.glyph_support);

        let by_category = group_by_category(&entries);

        tracing::info!(
            total,
            kept = entries.len(),
            grouped = by_category.total(),
            support = ?capabilities.glyph_support,
            "Built emoji catalog"
        );

        Ok(Self {
            entries,
            by_category,
        })
    }

    pub fn from_json(json: &str, capabilities: PlatformCapabilities) -> Result<Self, CatalogError> {
        Self::build(parse_dataset(json)?, capabilities)
    }

    /// Build from the dataset embedded in the crate
    pub fn builtin(capabilities: PlatformCapabilities) -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_DATASET, capabilities)
    }

    pub fn from_path(path: &Path, capabilities: PlatformCapabilities) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loading emoji dataset from {}", path.display());
        Self::from_json(&json, capabilities)
    }

    /// Filtered records in dataset order, including unknown categories
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn by_category(&self) -> &CategorizedCatalog {
        &self.by_category
    }

    pub fn glyphs(&self, category: Category) -> &[String] {
        self.by_category.get(category)
    }
}
