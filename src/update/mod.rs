//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod picker;
mod search;
mod viewport;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::PickerModel;

#[cfg(debug_assertions)]
use crate::tracing::ViewportSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use picker::update_picker;
pub use search::update_search;
pub use viewport::update_viewport;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut PickerModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut PickerModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Search(m) => search::update_search(model, m),
        Msg::Viewport(m) => viewport::update_viewport(model, m),
        Msg::Picker(m) => picker::update_picker(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after viewport state and logs diffs for debugging.
/// Visibility reports arrive on every scroll, so they are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut PickerModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::ViewportMsg;

    let is_noisy = matches!(&msg, Msg::Viewport(ViewportMsg::VisibleItemsChanged(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = ViewportSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = ViewportSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "viewport", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Search::QueryChanged("smi")`
/// - `Viewport::ShortcutPressed(Flags)`
/// - `Picker::PressOutside`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::Viewport(m) => format!("Viewport::{:?}", m),
        Msg::Picker(m) => format!("Picker::{:?}", m),
    }
}
