//! Host list events and shortcut taps

use crate::commands::Cmd;
use crate::messages::ViewportMsg;
use crate::model::PickerModel;

pub fn update_viewport(model: &mut PickerModel, msg: ViewportMsg) -> Option<Cmd> {
    match msg {
        ViewportMsg::VisibleItemsChanged(keys) => model
            .viewport
            .apply_visible_keys(&keys)
            .then_some(Cmd::Redraw),

        ViewportMsg::ShortcutPressed(category) => {
            if !model.capabilities.shortcuts_enabled {
                tracing::debug!(%category, "Shortcuts disabled on this platform");
                return None;
            }
            if !model.viewport.is_browsing() {
                tracing::debug!(%category, "Ignoring shortcut while searching");
                return None;
            }
            // Active category follows the next visibility report, not the tap
            let entry = model.layouts.for_category(category)?;
            Some(Cmd::ScrollToOffset {
                index: entry.index,
                offset: entry.offset,
            })
        }

        ViewportMsg::DisplayChanged(params) => {
            if !model.set_display(params) {
                return None;
            }
            tracing::debug!(
                columns = params.columns,
                emoji_size = params.emoji_size,
                "Recomputed layout table"
            );
            Some(keep_active_in_view(model))
        }
    }
}

/// Redraw, and while browsing scroll the active category to its new offset
fn keep_active_in_view(model: &PickerModel) -> Cmd {
    let entry = model
        .viewport
        .active_category()
        .filter(|_| model.capabilities.shortcuts_enabled)
        .and_then(|category| model.layouts.for_category(category));

    match entry {
        Some(entry) => Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::ScrollToOffset {
                index: entry.index,
                offset: entry.offset,
            },
        ]),
        None => Cmd::Redraw,
    }
}
