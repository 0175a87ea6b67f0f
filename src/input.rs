//! Host capabilities the slider consumes: pointer sampling, hit testing and
//! input capture.

use iced::{Point, Rectangle};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Identity of a widget instance for capture and hover arbitration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    pub fn from_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        WidgetId(hasher.finish())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
}

impl PointerButton {
    fn index(self) -> usize {
        match self {
            PointerButton::Left => 0,
            PointerButton::Right => 1,
        }
    }
}

/// Device that caused the current capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    Pointer,
    Other,
}

/// What the slider needs from the immediate-mode host for one frame.
pub trait InteractionContext {
    fn pointer(&self) -> Point;
    fn button_down(&self, button: PointerButton) -> bool;
    /// The button went down during this frame.
    fn button_clicked(&self, button: PointerButton) -> bool;
    /// The button went up during this frame.
    fn button_released(&self, button: PointerButton) -> bool;
    fn wheel(&self) -> f32;
    /// The button is held and the pointer moved past the drag threshold.
    fn is_dragging(&self, button: PointerButton) -> bool;
    /// Pointer inside `rect` and no other widget holds the capture.
    fn hoverable(&self, rect: Rectangle, id: WidgetId) -> bool;
    fn active_id(&self) -> Option<WidgetId>;
    fn active_source(&self) -> InputSource;
    fn set_active(&mut self, id: WidgetId);
    fn clear_active(&mut self);
    fn set_focus(&mut self, id: WidgetId);
}

#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    down: bool,
    clicked: bool,
    released: bool,
    press_origin: Option<Point>,
}

/// Recorded input for a frame-driven host.
///
/// Feed events with [`move_to`](Self::move_to), [`press`](Self::press),
/// [`release`](Self::release) and [`scroll`](Self::scroll), run one slider
/// frame, then call [`end_frame`](Self::end_frame) to drop the one-shot edges.
#[derive(Debug, Clone)]
pub struct FrameInput {
    pointer: Option<Point>,
    buttons: [ButtonState; 2],
    wheel: f32,
    drag_threshold: f32,
    active: Option<WidgetId>,
    active_source: InputSource,
    focus: Option<WidgetId>,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            pointer: None,
            buttons: [ButtonState::default(); 2],
            wheel: 0.0,
            drag_threshold: 6.0,
            active: None,
            active_source: InputSource::Pointer,
            focus: None,
        }
    }
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold.max(0.0);
        self
    }

    pub fn set_drag_threshold(&mut self, threshold: f32) {
        self.drag_threshold = threshold.max(0.0);
    }

    pub fn move_to(&mut self, position: Point) {
        self.pointer = Some(position);
    }

    /// The pointer left the host surface.
    pub fn leave(&mut self) {
        self.pointer = None;
    }

    pub fn press(&mut self, button: PointerButton) {
        let pointer = self.pointer;
        let state = &mut self.buttons[button.index()];
        if !state.down {
            state.clicked = true;
            state.press_origin = pointer;
        }
        state.down = true;
    }

    pub fn release(&mut self, button: PointerButton) {
        let state = &mut self.buttons[button.index()];
        if state.down {
            state.released = true;
        }
        state.down = false;
        state.press_origin = None;
    }

    pub fn scroll(&mut self, delta: f32) {
        self.wheel += delta;
    }

    pub fn end_frame(&mut self) {
        for state in &mut self.buttons {
            state.clicked = false;
            state.released = false;
        }
        self.wheel = 0.0;
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focus
    }

    pub fn set_active_source(&mut self, source: InputSource) {
        self.active_source = source;
    }
}

impl InteractionContext for FrameInput {
    fn pointer(&self) -> Point {
        self.pointer.unwrap_or(Point::ORIGIN)
    }

    fn button_down(&self, button: PointerButton) -> bool {
        self.buttons[button.index()].down
    }

    fn button_clicked(&self, button: PointerButton) -> bool {
        self.buttons[button.index()].clicked
    }

    fn button_released(&self, button: PointerButton) -> bool {
        self.buttons[button.index()].released
    }

    fn wheel(&self) -> f32 {
        self.wheel
    }

    fn is_dragging(&self, button: PointerButton) -> bool {
        let state = &self.buttons[button.index()];
        match (state.down, state.press_origin, self.pointer) {
            (true, Some(origin), Some(pointer)) => {
                let delta = pointer - origin;
                (delta.x * delta.x + delta.y * delta.y).sqrt() >= self.drag_threshold
            }
            _ => false,
        }
    }

    fn hoverable(&self, rect: Rectangle, id: WidgetId) -> bool {
        let Some(pointer) = self.pointer else {
            return false;
        };
        if self.active.is_some_and(|active| active != id) {
            return false;
        }
        rect.contains(pointer)
    }

    fn active_id(&self) -> Option<WidgetId> {
        self.active
    }

    fn active_source(&self) -> InputSource {
        self.active_source
    }

    fn set_active(&mut self, id: WidgetId) {
        if self.active != Some(id) {
            log::debug!("capture acquired by {id:?}");
        }
        self.active = Some(id);
        self.active_source = InputSource::Pointer;
    }

    fn clear_active(&mut self) {
        if let Some(id) = self.active.take() {
            log::debug!("capture released by {id:?}");
        }
    }

    fn set_focus(&mut self, id: WidgetId) {
        self.focus = Some(id);
    }
}
