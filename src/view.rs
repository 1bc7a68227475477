//! View models handed to the presentation layer
//!
//! These describe what the host list and the shortcut bar should show; drawing
//! them is left to the embedder.

use crate::catalog::Category;
use crate::layout::SHORTCUT_SIZE;
use crate::model::PickerModel;
use crate::search::{SearchResults, EMPTY_RESULT};

/// Key of the single synthetic item shown while searching
pub const SEARCH_RESULTS_KEY: &str = "search-results";

/// The data source the host list renders from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListData<'a> {
    /// One item per category, keyed by category name
    Categories(&'a [Category]),
    /// Exactly one item holding all results
    SearchResults(&'a SearchResults),
}

impl<'a> ListData<'a> {
    pub fn from_model(model: &'a PickerModel) -> Self {
        match &model.search_results {
            Some(results) if model.is_searching() => ListData::SearchResults(results),
            _ => ListData::Categories(&Category::ALL),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListData::Categories(categories) => categories.len(),
            ListData::SearchResults(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key the host uses for the item at `index`, echoed back in visibility reports
    pub fn item_key(&self, index: usize) -> Option<&'static str> {
        match self {
            ListData::Categories(categories) => categories.get(index).map(|c| c.name()),
            ListData::SearchResults(_) => (index == 0).then_some(SEARCH_RESULTS_KEY),
        }
    }
}

/// Split glyphs into rows of `columns`, skipping the empty-results placeholder
pub fn emoji_rows(glyphs: &[String], columns: usize) -> Vec<Vec<&str>> {
    let visible: Vec<&str> = glyphs
        .iter()
        .map(String::as_str)
        .filter(|g| *g != EMPTY_RESULT)
        .collect();
    visible
        .chunks(columns.max(1))
        .map(|row| row.to_vec())
        .collect()
}

/// One category item of the list: header label and its emoji rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection<'a> {
    pub category: Category,
    pub label: &'a str,
    pub rows: Vec<Vec<&'a str>>,
}

impl<'a> CategorySection<'a> {
    pub fn new(model: &'a PickerModel, category: Category) -> Self {
        Self {
            category,
            label: model.category_label(category),
            rows: emoji_rows(model.catalog.glyphs(category), model.display().columns),
        }
    }
}

/// One category button in the shortcut bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub category: Category,
    pub icon: &'static str,
    pub active: bool,
}

/// Shortcut bar state
///
/// While searching the icons keep their space but are hidden and inert. On
/// platforms without shortcut scrolling the bar is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcutBar {
    pub visible: bool,
    /// Pixel size of each shortcut icon
    pub icon_size: f32,
    pub shortcuts: Vec<Shortcut>,
}

impl ShortcutBar {
    pub fn from_model(model: &PickerModel) -> Self {
        if !model.capabilities.shortcuts_enabled {
            return Self {
                visible: false,
                icon_size: SHORTCUT_SIZE,
                shortcuts: Vec::new(),
            };
        }

        let active = model.viewport.active_category();
        Self {
            visible: active.is_some(),
            icon_size: SHORTCUT_SIZE,
            shortcuts: Category::ALL
                .iter()
                .map(|&category| Shortcut {
                    category,
                    icon: category.icon(),
                    active: active == Some(category),
                })
                .collect(),
        }
    }
}
