//! Viewport coordination state
//!
//! Tracks which category is active while browsing and whether the list is
//! showing search results instead. Transitions are driven by `update`.

use crate::catalog::Category;
use crate::layout::ListMode;
use crate::search::SearchOutcome;

/// Current data source of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Category list; `active` is highlighted in the shortcut bar
    Browsing { active: Category },
    /// Single synthetic item holding search results
    Searching { has_results: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportState {
    mode: ViewportMode,
    /// Active category to restore when search is cleared
    last_active: Category,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportState {
    pub fn new() -> Self {
        let first = Category::ALL[0];
        Self {
            mode: ViewportMode::Browsing { active: first },
            last_active: first,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn list_mode(&self) -> ListMode {
        match self.mode {
            ViewportMode::Browsing { .. } => ListMode::Browsing,
            ViewportMode::Searching { .. } => ListMode::Searching,
        }
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self.mode, ViewportMode::Browsing { .. })
    }

    /// Active category while browsing, `None` while searching
    pub fn active_category(&self) -> Option<Category> {
        match self.mode {
            ViewportMode::Browsing { active } => Some(active),
            ViewportMode::Searching { .. } => None,
        }
    }

    /// Last category that was active while browsing
    pub fn last_active(&self) -> Category {
        self.last_active
    }

    /// Apply a search outcome. Returns true if the mode changed or results were replaced.
    pub fn apply_search(&mut self, outcome: &SearchOutcome) -> bool {
        match outcome {
            SearchOutcome::Unchanged => false,
            SearchOutcome::Clear => {
                let was_browsing = self.is_browsing();
                self.mode = ViewportMode::Browsing {
                    active: self.last_active,
                };
                !was_browsing
            }
            SearchOutcome::Results(results) => {
                self.mode = ViewportMode::Searching {
                    has_results: results.has_matches(),
                };
                true
            }
        }
    }

    /// Apply a visibility report. The first visible key wins; reports are
    /// ignored while searching and keys that are not categories are skipped.
    pub fn apply_visible_keys<S: AsRef<str>>(&mut self, keys: &[S]) -> bool {
        if !self.is_browsing() {
            return false;
        }
        let Some(first) = keys.first() else {
            return false;
        };
        let Some(category) = Category::from_name(first.as_ref()) else {
            tracing::debug!(key = first.as_ref(), "Ignoring non-category visible key");
            return false;
        };
        self.set_active(category)
    }

    fn set_active(&mut self, category: Category) -> bool {
        self.last_active = category;
        let changed = self.mode != ViewportMode::Browsing { active: category };
        self.mode = ViewportMode::Browsing { active: category };
        changed
    }
}
