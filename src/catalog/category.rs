//! The fixed category table
//!
//! Order matters: it is both the list rendering order and the shortcut bar order.

use std::fmt;

/// Icon shown for a category name that is not one of the nine known ones
pub const FALLBACK_ICON: &str = "emoticon-cool";

/// One of the nine top-level emoji groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    SmileysEmotion,
    PeopleBody,
    AnimalsNature,
    FoodDrink,
    Activities,
    TravelPlaces,
    Objects,
    Symbols,
    Flags,
}

/// Static category table: (category, dataset name, icon key)
const TABLE: [(Category, &str, &str); 9] = [
    (Category::SmileysEmotion, "Smileys & Emotion", "emoticon"),
    (Category::PeopleBody, "People & Body", "human-greeting"),
    (Category::AnimalsNature, "Animals & Nature", "cat"),
    (Category::FoodDrink, "Food & Drink", "food-apple"),
    (Category::Activities, "Activities", "tennis-ball"),
    (Category::TravelPlaces, "Travel & Places", "car"),
    (Category::Objects, "Objects", "lightbulb"),
    (Category::Symbols, "Symbols", "alert"),
    (Category::Flags, "Flags", "flag-variant"),
];

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 9] = [
        Category::SmileysEmotion,
        Category::PeopleBody,
        Category::AnimalsNature,
        Category::FoodDrink,
        Category::Activities,
        Category::TravelPlaces,
        Category::Objects,
        Category::Symbols,
        Category::Flags,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in [`Category::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name as it appears in the dataset's `category` field
    pub fn name(self) -> &'static str {
        TABLE[self.index()].1
    }

    /// Resolve a dataset category name. Unknown names (e.g. "Component") yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        TABLE
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(category, _, _)| *category)
    }

    /// Icon key for the shortcut bar
    pub fn icon(self) -> &'static str {
        TABLE[self.index()].2
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Icon key for an arbitrary category name, falling back to [`FALLBACK_ICON`]
pub fn icon_for_name(name: &str) -> &'static str {
    Category::from_name(name)
        .map(Category::icon)
        .unwrap_or(FALLBACK_ICON)
}

/// Display labels for the category headers, index-aligned with [`Category::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryLabels {
    localized: Option<[String; Category::COUNT]>,
}

impl CategoryLabels {
    /// Use the dataset's English category names
    pub fn english() -> Self {
        Self::default()
    }

    /// Use a localized label list. Returns `None` unless exactly nine labels are given.
    pub fn localized(labels: Vec<String>) -> Option<Self> {
        let labels: [String; Category::COUNT] = labels.try_into().ok()?;
        Some(Self {
            localized: Some(labels),
        })
    }

    pub fn label(&self, category: Category) -> &str {
        match &self.localized {
            Some(labels) => &labels[category.index()],
            None => category.name(),
        }
    }

    pub fn is_localized(&self) -> bool {
        self.localized.is_some()
    }
}
