//! Message types for the Elm-style architecture
//!
//! Every input the picker reacts to arrives as one of these messages: host list
//! events, keystrokes in the search field and taps.

use crate::catalog::Category;
use crate::layout::DisplayParams;

/// Search field messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    /// The search field text changed
    QueryChanged(String),
}

/// Host list and shortcut bar messages
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportMsg {
    /// The host list reports the keys of the items currently on screen
    VisibleItemsChanged(Vec<String>),
    /// A category shortcut was tapped
    ShortcutPressed(Category),
    /// Columns or emoji size changed
    DisplayChanged(DisplayParams),
}

/// Selection and dismissal messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerMsg {
    /// An emoji was tapped
    EmojiPressed(String),
    /// The dismiss area around the picker was tapped
    PressOutside,
}

/// Top-level message
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Search(SearchMsg),
    Viewport(ViewportMsg),
    Picker(PickerMsg),
}

impl Msg {
    pub fn query(text: impl Into<String>) -> Self {
        Msg::Search(SearchMsg::QueryChanged(text.into()))
    }

    pub fn visible<S: Into<String>>(keys: impl IntoIterator<Item = S>) -> Self {
        Msg::Viewport(ViewportMsg::VisibleItemsChanged(
            keys.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn shortcut(category: Category) -> Self {
        Msg::Viewport(ViewportMsg::ShortcutPressed(category))
    }
}
