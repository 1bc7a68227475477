//! Emoji selection and dismissal

use crate::commands::Cmd;
use crate::messages::PickerMsg;
use crate::model::PickerModel;
use crate::search::EMPTY_RESULT;

pub fn update_picker(_model: &mut PickerModel, msg: PickerMsg) -> Option<Cmd> {
    match msg {
        // The empty-results placeholder is never a selectable emoji
        PickerMsg::EmojiPressed(glyph) if glyph == EMPTY_RESULT => None,
        PickerMsg::EmojiPressed(glyph) => Some(Cmd::EmojiSelected(glyph)),
        PickerMsg::PressOutside => Some(Cmd::PressOutside),
    }
}
