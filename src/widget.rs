//! [`Canvas`] adapter that hosts a [`DoubleSlider`] inside an iced layout.

use crate::axis::Orientation;
use crate::control::{DoubleSlider, SliderFlags};
use crate::input::{FrameInput, PointerButton};
use crate::model::Thumb;
use crate::paint::{DrawCommand, DrawList, LabelFormatter};
use crate::style::SliderStyle;
use iced::mouse;
use iced::widget::canvas::{self, Action, Canvas, Geometry, Program};
use iced::{Element, Event, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::ops::RangeInclusive;
use std::sync::Arc;

const DEFAULT_THICKNESS: f32 = 80.0;
/// Pixels of a precise scroll that count as one wheel line.
const PIXELS_PER_LINE: f32 = 40.0;

/// What the slider reports back to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    /// A value changed while `thumb` was selected.
    Changed { lower: i32, higher: i32, thumb: Thumb },
    /// Left click without drag on the selected thumb.
    ThumbClicked(Thumb),
    /// Right click on the selected thumb.
    ThumbRightClicked(Thumb),
}

pub fn double_slider<'a, Message>(
    name: impl Into<String>,
    range: RangeInclusive<i32>,
    lower: i32,
    higher: i32,
    on_event: impl Fn(SliderEvent) -> Message + 'a,
) -> DoubleSliderWidget<'a, Message> {
    DoubleSliderWidget::new(name, range, lower, higher, on_event)
}

pub fn vertical_double_slider<'a, Message>(
    name: impl Into<String>,
    range: RangeInclusive<i32>,
    lower: i32,
    higher: i32,
    on_event: impl Fn(SliderEvent) -> Message + 'a,
) -> DoubleSliderWidget<'a, Message> {
    DoubleSliderWidget::new(name, range, lower, higher, on_event)
        .orientation(Orientation::Vertical)
        .width(Length::Fixed(DEFAULT_THICKNESS))
        .height(Length::Fill)
}

/// Values the application passes in on every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Inputs {
    lower: i32,
    higher: i32,
    min: i32,
    max: i32,
    has_lower_thumb: bool,
    combined: bool,
    orientation: Orientation,
    wheel: bool,
}

pub struct DoubleSliderWidget<'a, Message> {
    name: String,
    inputs: Inputs,
    width: Length,
    height: Length,
    style: SliderStyle,
    show_move_label: bool,
    label: Option<LabelFormatter>,
    on_event: Arc<dyn Fn(SliderEvent) -> Message + 'a>,
}

impl<'a, Message> DoubleSliderWidget<'a, Message> {
    pub fn new(
        name: impl Into<String>,
        range: RangeInclusive<i32>,
        lower: i32,
        higher: i32,
        on_event: impl Fn(SliderEvent) -> Message + 'a,
    ) -> Self {
        Self {
            name: name.into(),
            inputs: Inputs {
                lower,
                higher,
                min: *range.start(),
                max: *range.end(),
                has_lower_thumb: true,
                combined: false,
                orientation: Orientation::Horizontal,
                wheel: true,
            },
            width: Length::Fill,
            height: Length::Fixed(DEFAULT_THICKNESS),
            style: SliderStyle::default(),
            show_move_label: true,
            label: None,
            on_event: Arc::new(on_event),
        }
    }

    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Length) -> Self {
        self.height = height;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.inputs.orientation = orientation;
        self
    }

    /// Drops the lower thumb; only `higher` is shown and edited.
    pub fn single_thumb(mut self) -> Self {
        self.inputs.has_lower_thumb = false;
        self
    }

    pub fn combine_thumbs(mut self, combined: bool) -> Self {
        self.inputs.combined = combined;
        self
    }

    pub fn wheel(mut self, enabled: bool) -> Self {
        self.inputs.wheel = enabled;
        self
    }

    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn show_label_on_move(mut self, show: bool) -> Self {
        self.show_move_label = show;
        self
    }

    pub fn label(mut self, formatter: impl Fn(i32) -> String + 'static) -> Self {
        self.label = Some(Arc::new(formatter));
        self
    }
}

impl<'a, Message> From<DoubleSliderWidget<'a, Message>> for Element<'a, Message>
where
    Message: 'a,
{
    fn from(widget: DoubleSliderWidget<'a, Message>) -> Self {
        let DoubleSliderWidget {
            name,
            inputs,
            width,
            height,
            style,
            show_move_label,
            label,
            on_event,
        } = widget;
        let program = SliderProgram {
            name,
            inputs,
            style,
            show_move_label,
            label,
            on_event,
        };
        Canvas::new(program).width(width).height(height).into()
    }
}

#[derive(Default)]
struct SliderState {
    control: Option<DoubleSlider>,
    synced: Option<Inputs>,
    input: FrameInput,
    /// Draw list of the last interactive frame and what it was built from.
    frame: Option<(Size, Inputs, DrawList)>,
    rclick: bool,
}

struct SliderProgram<'a, Message> {
    name: String,
    inputs: Inputs,
    style: SliderStyle,
    show_move_label: bool,
    label: Option<LabelFormatter>,
    on_event: Arc<dyn Fn(SliderEvent) -> Message + 'a>,
}

impl<'a, Message> SliderProgram<'a, Message> {
    fn build(&self) -> DoubleSlider {
        let inputs = self.inputs;
        let flags = SliderFlags {
            orientation: inputs.orientation,
            wheel: inputs.wheel,
        };
        let mut control = DoubleSlider::new(
            inputs.lower,
            inputs.higher,
            inputs.min,
            inputs.max,
            flags,
            self.name.clone(),
            inputs.has_lower_thumb,
        );
        if inputs.combined {
            control.combine_thumbs(true);
        }
        control
    }

    /// Brings `control` in line with the application's values when they
    /// changed since `synced`.
    fn apply(&self, control: &mut DoubleSlider, synced: Option<Inputs>) {
        control.set_style(self.style);
        control.show_label_on_move(self.show_move_label);
        control.set_label_formatter_shared(self.label.clone());

        let new = self.inputs;
        let Some(old) = synced else {
            return;
        };
        if old == new {
            return;
        }
        if old.combined != new.combined {
            control.combine_thumbs(new.combined);
        }
        if old.max != new.max {
            control.set_max(new.max);
        }
        if (control.lower(), control.higher()) != (new.lower, new.higher) {
            control.set_selection_span(new.lower, new.higher);
        }
    }

    fn sync<'s>(
        &self,
        control: &'s mut Option<DoubleSlider>,
        synced: &mut Option<Inputs>,
        input: &mut FrameInput,
    ) -> &'s mut DoubleSlider {
        let new = self.inputs;
        let rebuild = |old: Inputs| {
            old.min != new.min
                || old.has_lower_thumb != new.has_lower_thumb
                || old.orientation != new.orientation
                || old.wheel != new.wheel
        };
        if synced.is_some_and(rebuild) {
            log::debug!("{}: rebuilding slider", self.name);
            *control = None;
            *synced = None;
        }

        let control = control.get_or_insert_with(|| self.build());
        self.apply(control, *synced);
        *synced = Some(new);
        input.set_drag_threshold(self.style.drag_threshold());
        control
    }

    /// Paints the application's current values without reading input.
    fn idle_frame(&self, state: &SliderState, size: Size) -> DrawList {
        let mut control = match &state.control {
            Some(control) => control.clone(),
            None => self.build(),
        };
        self.apply(&mut control, state.synced);
        control.set_size(size);
        control.layout();

        let mut list = DrawList::new(&self.style);
        control.paint(&mut list);
        list
    }

    fn feed(&self, input: &mut FrameInput, event: &Event, bounds: Rectangle, cursor: mouse::Cursor) -> bool {
        let Event::Mouse(event) = event else {
            return false;
        };

        match cursor.position() {
            Some(position) => input.move_to(position - Vector::new(bounds.x, bounds.y)),
            None => input.leave(),
        }

        let over = cursor.is_over(bounds);
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) if over => input.press(PointerButton::Left),
            mouse::Event::ButtonPressed(mouse::Button::Right) if over => input.press(PointerButton::Right),
            mouse::Event::ButtonReleased(mouse::Button::Left) => input.release(PointerButton::Left),
            mouse::Event::ButtonReleased(mouse::Button::Right) => input.release(PointerButton::Right),
            mouse::Event::WheelScrolled { delta } if over => match delta {
                mouse::ScrollDelta::Lines { y, .. } => input.scroll(*y),
                mouse::ScrollDelta::Pixels { y, .. } => input.scroll(*y / PIXELS_PER_LINE),
            },
            mouse::Event::CursorLeft => input.leave(),
            _ => {}
        }
        true
    }
}

impl<'a, Message> Program<Message> for SliderProgram<'a, Message> {
    type State = SliderState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if !self.feed(&mut state.input, event, bounds, cursor) {
            return None;
        }

        let inputs = self.inputs;
        let style = self.style;
        let control = self.sync(&mut state.control, &mut state.synced, &mut state.input);
        control.set_pos(Point::ORIGIN);
        control.set_size(bounds.size());

        let mut list = DrawList::new(&style);
        let changed = control.render(&mut state.input, &mut list);
        let clicked = control.take_lclick_on_thumb();
        let rclick = control.is_rclick_on_thumb();
        let rclick_started = rclick && !state.rclick;
        let message = frame_event(control, changed, clicked, rclick_started);
        let active = control.is_active(&state.input);

        state.input.end_frame();
        state.frame = Some((bounds.size(), inputs, list));
        state.rclick = rclick;

        match (message, active) {
            (Some(message), true) => Some(Action::publish((self.on_event)(message)).and_capture()),
            (Some(message), false) => Some(Action::publish((self.on_event)(message))),
            (None, true) => Some(Action::capture()),
            (None, false) if cursor.is_over(bounds) => Some(Action::request_redraw()),
            (None, false) => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        match &state.frame {
            Some((size, inputs, list)) if *size == bounds.size() && *inputs == self.inputs => {
                replay(&mut frame, list.commands());
            }
            _ => {
                let list = self.idle_frame(state, bounds.size());
                replay(&mut frame, list.commands());
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let Some(control) = &state.control else {
            return mouse::Interaction::default();
        };

        if control.is_active(&state.input) {
            return mouse::Interaction::Grabbing;
        }

        if let Some(position) = cursor.position_in(bounds) {
            let regions = control.regions();
            if regions.higher_thumb.contains(position) || regions.lower_thumb.contains(position) {
                return mouse::Interaction::Grab;
            }
        }

        mouse::Interaction::default()
    }
}

/// What one interactive frame of `control` reports to the application.
fn frame_event(control: &DoubleSlider, changed: bool, clicked: bool, rclick_started: bool) -> Option<SliderEvent> {
    let thumb = control.selection().unwrap_or(Thumb::Higher);
    if changed {
        Some(SliderEvent::Changed {
            lower: control.lower(),
            higher: control.higher(),
            thumb,
        })
    } else if clicked {
        Some(SliderEvent::ThumbClicked(thumb))
    } else if rclick_started {
        Some(SliderEvent::ThumbRightClicked(thumb))
    } else {
        None
    }
}

/// Draws recorded commands onto an iced canvas frame.
pub fn replay(frame: &mut canvas::Frame, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Rect { rect, color, rounding } => {
                if *rounding > 0.0 {
                    let path = canvas::Path::rounded_rectangle(rect.position(), rect.size(), (*rounding).into());
                    frame.fill(&path, *color);
                } else {
                    frame.fill_rectangle(rect.position(), rect.size(), *color);
                }
            }
            DrawCommand::Triangle { points, color } => {
                frame.fill(&polygon(points), *color);
            }
            DrawCommand::Polygon { points, color } => {
                frame.fill(&polygon(points), *color);
            }
            DrawCommand::Line { from, to, color, width } => {
                frame.stroke(
                    &canvas::Path::line(*from, *to),
                    canvas::Stroke::default().with_color(*color).with_width(*width),
                );
            }
            DrawCommand::Text {
                position,
                content,
                color,
                size,
            } => {
                frame.fill_text(canvas::Text {
                    content: content.clone(),
                    position: *position,
                    color: *color,
                    size: (*size).into(),
                    ..Default::default()
                });
            }
        }
    }
}

fn polygon(points: &[Point]) -> canvas::Path {
    canvas::Path::new(|builder| {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        builder.move_to(*first);
        for point in rest {
            builder.line_to(*point);
        }
        builder.close();
    })
}
