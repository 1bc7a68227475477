//! Virtualized list geometry
//!
//! The host list renders one item per category. Item heights depend on how many
//! emojis each category holds, so the whole table is precomputed up front as
//! prefix sums: any category's offset is then an O(1) lookup and the host can
//! jump straight to it without measuring the items in between.

use crate::catalog::{CategorizedCatalog, Category};

/// Spacing unit used around headers, emojis and groups
pub const PADDING: f32 = 5.0;
pub const DEFAULT_EMOJI_SIZE: f32 = 32.0;
pub const DEFAULT_COLUMNS: usize = 7;
/// Rows of emojis visible at once with default sizing
pub const ROWS_VISIBLE: usize = DEFAULT_COLUMNS;
/// Height of a category header's text line
pub const HEADER_TEXT_HEIGHT: f32 = 16.0;
pub const EMOJI_GROUP_PADDING_BOTTOM: f32 = PADDING * 3.0;
/// Fixed viewport height of the scrolling area
pub const TOTAL_HEIGHT: f32 = DEFAULT_EMOJI_SIZE * ROWS_VISIBLE as f32 + PADDING * 2.0;
/// Icon size of a category shortcut
pub const SHORTCUT_SIZE: f32 = DEFAULT_EMOJI_SIZE * 0.75;

/// Display parameters that affect geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayParams {
    /// Emojis per row, at least 1
    pub columns: usize,
    /// Pixel size of one emoji cell
    pub emoji_size: f32,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            emoji_size: DEFAULT_EMOJI_SIZE,
        }
    }
}

impl DisplayParams {
    /// Clamp to usable values: zero columns becomes one, a non-positive or
    /// non-finite size falls back to the default
    pub fn new(columns: usize, emoji_size: f32) -> Self {
        let emoji_size = if emoji_size.is_finite() && emoji_size > 0.0 {
            emoji_size
        } else {
            DEFAULT_EMOJI_SIZE
        };
        Self {
            columns: columns.max(1),
            emoji_size,
        }
    }

    pub fn header_height(&self) -> f32 {
        HEADER_TEXT_HEIGHT + 2.0 * PADDING
    }

    pub fn row_height(&self) -> f32 {
        self.emoji_size + 2.0 * PADDING
    }

    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns.max(1))
    }

    /// Width of an emoji group, shared by category groups and search results
    pub fn group_width(&self) -> f32 {
        (self.emoji_size + PADDING * 2.0) * self.columns as f32 + 2.0
    }
}

/// Geometry of one list item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEntry {
    pub length: f32,
    pub offset: f32,
    pub index: usize,
}

impl LayoutEntry {
    pub fn end(&self) -> f32 {
        self.offset + self.length
    }
}

/// The single synthetic item shown while searching
pub const SEARCH_LAYOUT: LayoutEntry = LayoutEntry {
    length: TOTAL_HEIGHT,
    offset: 0.0,
    index: 0,
};

/// Which data source the host list is rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Browsing,
    Searching,
}

/// Compute one entry per category, in the given order, as contiguous prefix sums
///
/// `length = header + rows * row_height + bottom padding`; an empty category
/// still reserves its header and bottom padding.
pub fn compute_layouts(
    categories: &[Category],
    catalog: &CategorizedCatalog,
    params: DisplayParams,
) -> Vec<LayoutEntry> {
    let mut heights_so_far = 0.0;
    categories
        .iter()
        .enumerate()
        .map(|(index, &category)| {
            let rows = params.rows_for(catalog.len(category));
            let length = params.header_height()
                + rows as f32 * params.row_height()
                + EMOJI_GROUP_PADDING_BOTTOM;
            let offset = heights_so_far;
            heights_so_far += length;
            LayoutEntry {
                length,
                offset,
                index,
            }
        })
        .collect()
}

/// Cached layout table for the category list
///
/// Rebuilt wholesale whenever the catalog or the display parameters change.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTable {
    entries: Vec<LayoutEntry>,
    params: DisplayParams,
}

impl LayoutTable {
    pub fn new(catalog: &CategorizedCatalog, params: DisplayParams) -> Self {
        Self {
            entries: compute_layouts(&Category::ALL, catalog, params),
            params,
        }
    }

    pub fn params(&self) -> DisplayParams {
        self.params
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<LayoutEntry> {
        self.entries.get(index).copied()
    }

    pub fn for_category(&self, category: Category) -> Option<LayoutEntry> {
        self.get(category.index())
    }

    /// Geometry for the host list's item at `index`
    ///
    /// While searching there is exactly one item spanning the viewport,
    /// whatever index is asked for.
    pub fn item_layout(&self, mode: ListMode, index: usize) -> Option<LayoutEntry> {
        match mode {
            ListMode::Searching => Some(SEARCH_LAYOUT),
            ListMode::Browsing => self.get(index),
        }
    }

    /// Scrollable height of the whole category list
    pub fn total_length(&self) -> f32 {
        self.entries.last().map_or(0.0, LayoutEntry::end)
    }

    /// Index of the item covering a scroll offset, clamped to the last item
    pub fn index_at_offset(&self, offset: f32) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let after = self.entries.partition_point(|entry| entry.end() <= offset);
        Some(after.min(self.entries.len() - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(counts: &[(Category, usize)]) -> CategorizedCatalog {
        counts
            .iter()
            .flat_map(|&(category, n)| (0..n).map(move |i| (category, format!("e{}", i))))
            .collect()
    }

    #[test]
    fn test_two_category_scenario() {
        let catalog = catalog_with(&[(Category::SmileysEmotion, 3)]);
        let layouts = compute_layouts(
            &[Category::SmileysEmotion, Category::PeopleBody],
            &catalog,
            DisplayParams::new(7, 32.0),
        );
        assert_eq!(
            layouts,
            vec![
                LayoutEntry {
                    length: 83.0,
                    offset: 0.0,
                    index: 0
                },
                LayoutEntry {
                    length: 41.0,
                    offset: 83.0,
                    index: 1
                },
            ]
        );
    }

    #[test]
    fn test_rows_round_up() {
        let params = DisplayParams::new(7, 32.0);
        assert_eq!(params.rows_for(0), 0);
        assert_eq!(params.rows_for(7), 1);
        assert_eq!(params.rows_for(8), 2);
        assert_eq!(params.header_height(), 26.0);
        assert_eq!(params.row_height(), 42.0);
        assert_eq!(params.group_width(), 296.0);
    }

    #[test]
    fn test_params_are_clamped() {
        let params = DisplayParams::new(0, -4.0);
        assert_eq!(params.columns, 1);
        assert_eq!(params.emoji_size, DEFAULT_EMOJI_SIZE);
        assert_eq!(DisplayParams::new(3, f32::NAN).emoji_size, DEFAULT_EMOJI_SIZE);
    }

    #[test]
    fn test_table_is_contiguous() {
        let catalog = catalog_with(&[
            (Category::SmileysEmotion, 24),
            (Category::AnimalsNature, 1),
            (Category::Flags, 50),
        ]);
        for columns in [1, 4, 7, 9] {
            for size in [20.0, 32.0, 48.5] {
                let table = LayoutTable::new(&catalog, DisplayParams::new(columns, size));
                let entries = table.entries();
                assert_eq!(entries.len(), 9);
                assert_eq!(entries[0].offset, 0.0);
                for pair in entries.windows(2) {
                    assert_eq!(pair[0].end(), pair[1].offset);
                    assert_eq!(pair[1].index, pair[0].index + 1);
                }
                for entry in entries {
                    assert!(entry.length >= table.params().header_height());
                }
                assert_eq!(table.total_length(), entries[8].end());
            }
        }
    }

    #[test]
    fn test_item_layout_by_mode() {
        let catalog = catalog_with(&[(Category::PeopleBody, 10)]);
        let table = LayoutTable::new(&catalog, DisplayParams::default());

        assert_eq!(table.item_layout(ListMode::Searching, 0), Some(SEARCH_LAYOUT));
        assert_eq!(table.item_layout(ListMode::Searching, 5), Some(SEARCH_LAYOUT));
        assert_eq!(SEARCH_LAYOUT.length, 234.0);

        assert_eq!(table.item_layout(ListMode::Browsing, 1), table.get(1));
        assert_eq!(table.item_layout(ListMode::Browsing, 1).unwrap().offset, 41.0);
        assert_eq!(table.item_layout(ListMode::Browsing, 9), None);
        assert_eq!(
            table.for_category(Category::PeopleBody),
            table.get(Category::PeopleBody.index())
        );
    }

    #[test]
    fn test_index_at_offset() {
        let catalog = catalog_with(&[(Category::SmileysEmotion, 3)]);
        let table = LayoutTable::new(&catalog, DisplayParams::default());
        // [0, 83) is the first category, then 41 per empty category
        assert_eq!(table.index_at_offset(0.0), Some(0));
        assert_eq!(table.index_at_offset(82.9), Some(0));
        assert_eq!(table.index_at_offset(83.0), Some(1));
        assert_eq!(table.index_at_offset(124.0), Some(2));
        assert_eq!(table.index_at_offset(1.0e6), Some(8));
    }
}
