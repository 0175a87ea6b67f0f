//! Classifies clicks on the selected thumb, telling a click from a drag.

use crate::input::{InteractionContext, PointerButton};
use iced::Point;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickClassifier {
    rclick_on_thumb: bool,
    lclick_on_thumb: bool,
    press_center: Option<Point>,
}

impl ClickClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the flags for one frame.
    ///
    /// `hovered` tells whether the pointer is over the selected thumb,
    /// `center` is that thumb's center after this frame's input and `changed`
    /// whether a value changed during the frame.
    pub fn observe(&mut self, ctx: &dyn InteractionContext, hovered: bool, center: Point, changed: bool) {
        let left_clicked = ctx.button_clicked(PointerButton::Left);
        let right_clicked = ctx.button_clicked(PointerButton::Right);

        if hovered && right_clicked {
            self.rclick_on_thumb = true;
        }
        if (!hovered && right_clicked) || left_clicked {
            self.rclick_on_thumb = false;
        }

        if hovered && !changed {
            if left_clicked {
                self.press_center = Some(center);
            }
            if ctx.button_released(PointerButton::Left) && self.press_center.take() == Some(center) {
                log::debug!("click without drag on selected thumb");
                self.lclick_on_thumb = true;
            }
        }
    }

    /// Returns the left-click flag and clears it.
    pub fn take_lclick_on_thumb(&mut self) -> bool {
        std::mem::take(&mut self.lclick_on_thumb)
    }

    pub fn is_rclick_on_thumb(&self) -> bool {
        self.rclick_on_thumb
    }
}
