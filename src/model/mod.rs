//! Picker state
//!
//! The catalog, search index and labels are fixed at construction. Only the
//! viewport state, the current search results and the layout table change, and
//! only through `update`.

pub mod viewport;

pub use viewport::{ViewportMode, ViewportState};

use crate::catalog::{Catalog, CatalogError, Category, CategoryLabels, PlatformCapabilities};
use crate::config::PickerConfig;
use crate::layout::{DisplayParams, LayoutEntry, LayoutTable};
use crate::search::{SearchIndex, SearchResults};

/// Complete picker state
#[derive(Debug, Clone)]
pub struct PickerModel {
    pub catalog: Catalog,
    pub search_index: SearchIndex,
    pub layouts: LayoutTable,
    pub viewport: ViewportState,
    /// Results being shown while searching
    pub search_results: Option<SearchResults>,
    pub labels: CategoryLabels,
    pub capabilities: PlatformCapabilities,
}

impl PickerModel {
    pub fn new(
        catalog: Catalog,
        capabilities: PlatformCapabilities,
        params: DisplayParams,
        labels: CategoryLabels,
    ) -> Self {
        let search_index = SearchIndex::new(catalog.entries());
        let layouts = LayoutTable::new(catalog.by_category(), params);
        Self {
            catalog,
            search_index,
            layouts,
            viewport: ViewportState::new(),
            search_results: None,
            labels,
            capabilities,
        }
    }

    /// Build from the embedded dataset with the given configuration
    pub fn from_config(
        config: &PickerConfig,
        capabilities: PlatformCapabilities,
    ) -> Result<Self, CatalogError> {
        let catalog = Catalog::builtin(capabilities)?;
        Ok(Self::new(
            catalog,
            capabilities,
            config.display(),
            config.labels(),
        ))
    }

    /// Geometry request from the host list, answered from the cached table
    pub fn item_layout(&self, index: usize) -> Option<LayoutEntry> {
        self.layouts.item_layout(self.viewport.list_mode(), index)
    }

    /// Recompute the layout table if the parameters changed
    pub fn set_display(&mut self, params: DisplayParams) -> bool {
        if self.layouts.params() == params {
            return false;
        }
        self.layouts = LayoutTable::new(self.catalog.by_category(), params);
        true
    }

    pub fn display(&self) -> DisplayParams {
        self.layouts.params()
    }

    pub fn category_label(&self, category: Category) -> &str {
        self.labels.label(category)
    }

    pub fn is_searching(&self) -> bool {
        !self.viewport.is_browsing()
    }
}
