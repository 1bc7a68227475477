//! Event dispatch for an embedded picker

use crate::catalog::Category;
use crate::commands::Cmd;
use crate::layout::{DisplayParams, LayoutEntry};
use crate::messages::{Msg, PickerMsg, ViewportMsg};
use crate::model::PickerModel;
use crate::update::update;
use crate::view::{ListData, ShortcutBar};

use super::host::HostList;

type SelectCallback = Box<dyn FnMut(&str)>;
type PressOutsideCallback = Box<dyn FnMut()>;

/// A picker bound to a host list and the embedder's callbacks
///
/// Every handler runs to completion synchronously on the caller's thread.
pub struct Picker<H: HostList> {
    model: PickerModel,
    host: H,
    on_emoji_selected: SelectCallback,
    on_press_outside: PressOutsideCallback,
    needs_redraw: bool,
}

impl<H: HostList> Picker<H> {
    pub fn new(model: PickerModel, host: H) -> Self {
        Self {
            model,
            host,
            on_emoji_selected: Box::new(|_| {}),
            on_press_outside: Box::new(|| {}),
            needs_redraw: true,
        }
    }

    /// Called with the chosen emoji
    pub fn on_emoji_selected(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_emoji_selected = Box::new(callback);
        self
    }

    /// Called when the dismiss area around the picker is tapped
    pub fn on_press_outside(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_press_outside = Box::new(callback);
        self
    }

    pub fn model(&self) -> &PickerModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Run a message through `update` and perform the resulting side effects
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.execute(cmd);
        }
    }

    fn execute(&mut self, cmd: Cmd) {
        if cmd.needs_redraw() {
            self.needs_redraw = true;
        }
        self.process_cmd(cmd);
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Redraw => {}
            Cmd::ScrollToOffset { index, offset } => {
                // Swallowed: the next visibility report resynchronizes the active category
                if let Err(e) = self.host.scroll_to_offset(index, offset) {
                    tracing::debug!(index, offset, error = %e, "Scroll request failed");
                }
            }
            Cmd::EmojiSelected(glyph) => (self.on_emoji_selected)(&glyph),
            Cmd::PressOutside => (self.on_press_outside)(),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Whether the list must be re-rendered; clears the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn query_changed(&mut self, query: &str) {
        self.dispatch(Msg::query(query));
    }

    pub fn visible_items_changed<S: Into<String>>(&mut self, keys: impl IntoIterator<Item = S>) {
        self.dispatch(Msg::visible(keys));
    }

    pub fn shortcut_pressed(&mut self, category: Category) {
        self.dispatch(Msg::shortcut(category));
    }

    pub fn emoji_pressed(&mut self, glyph: &str) {
        self.dispatch(Msg::Picker(PickerMsg::EmojiPressed(glyph.to_string())));
    }

    pub fn press_outside(&mut self) {
        self.dispatch(Msg::Picker(PickerMsg::PressOutside));
    }

    pub fn set_display(&mut self, params: DisplayParams) {
        self.dispatch(Msg::Viewport(ViewportMsg::DisplayChanged(params)));
    }

    /// Geometry for the host list's item at `index`
    pub fn item_layout(&self, index: usize) -> Option<LayoutEntry> {
        self.model.item_layout(index)
    }

    pub fn list_data(&self) -> ListData<'_> {
        ListData::from_model(&self.model)
    }

    pub fn shortcut_bar(&self) -> ShortcutBar {
        ShortcutBar::from_model(&self.model)
    }
}
