//! The two-thumb slider control: one call per host frame derives the
//! geometry, applies pointer and wheel input, resolves thumb collisions,
//! classifies clicks and paints the result.

use crate::axis::Orientation;
use crate::clicks::ClickClassifier;
use crate::collision::{self, ThumbPair};
use crate::input::{InteractionContext, PointerButton, WidgetId};
use crate::model::{RangeModel, Thumb, ThumbMode};
use crate::paint::{self, ExtraDrawHook, LabelFormatter, Painter, ScrollLineHook};
use crate::reactor::{self, WheelMode};
use crate::regions::{self, Regions};
use crate::style::SliderStyle;
use iced::{Point, Rectangle, Size};
use std::sync::Arc;

/// Behavior switches fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderFlags {
    pub orientation: Orientation,
    /// Let the mouse wheel step the selected thumb while hovering.
    pub wheel: bool,
}

impl Default for SliderFlags {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            wheel: true,
        }
    }
}

impl SliderFlags {
    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct DoubleSlider {
    name: String,
    id: WidgetId,
    model: RangeModel,
    flags: SliderFlags,
    pos: Point,
    size: Size,
    style: SliderStyle,
    regions: Regions,
    clicks: ClickClassifier,
    show_move_label: bool,
    /// Value under the pointer while hovering, kept across frames.
    mouse_pos: i32,
    /// Where the on-move label goes this frame, if shown.
    move_label_rect: Option<Rectangle>,
    label: Option<LabelFormatter>,
    move_label: Option<LabelFormatter>,
    scroll_line_hook: Option<ScrollLineHook>,
    extra_draw_hook: Option<ExtraDrawHook>,
}

impl std::fmt::Debug for DoubleSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoubleSlider")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("flags", &self.flags)
            .field("pos", &self.pos)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl DoubleSlider {
    pub fn new(
        lower: i32,
        higher: i32,
        min: i32,
        max: i32,
        flags: SliderFlags,
        name: impl Into<String>,
        use_lower_thumb: bool,
    ) -> Self {
        let name = name.into();
        Self {
            id: WidgetId::from_name(&name),
            name,
            model: RangeModel::new(lower, higher, min, max, use_lower_thumb),
            flags,
            pos: Point::ORIGIN,
            size: Size::ZERO,
            style: SliderStyle::default(),
            regions: Regions::default(),
            clicks: ClickClassifier::new(),
            show_move_label: true,
            mouse_pos: min,
            move_label_rect: None,
            label: None,
            move_label: None,
            scroll_line_hook: None,
            extra_draw_hook: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn model(&self) -> &RangeModel {
        &self.model
    }

    pub fn flags(&self) -> SliderFlags {
        self.flags
    }

    pub fn is_horizontal(&self) -> bool {
        self.flags.orientation.is_horizontal()
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
    }

    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    /// Geometry of the last frame.
    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    pub fn show_label_on_move(&mut self, show: bool) {
        self.show_move_label = show;
    }

    pub fn set_label_formatter(&mut self, formatter: impl Fn(i32) -> String + 'static) {
        self.label = Some(Arc::new(formatter));
    }

    pub fn set_label_formatter_shared(&mut self, formatter: Option<LabelFormatter>) {
        self.label = formatter;
    }

    pub fn set_move_label_formatter(&mut self, formatter: impl Fn(i32) -> String + 'static) {
        self.move_label = Some(Arc::new(formatter));
    }

    pub fn set_scroll_line_hook(
        &mut self,
        hook: impl Fn(&mut dyn Painter, Rectangle, Rectangle) + 'static,
    ) {
        self.scroll_line_hook = Some(Arc::new(hook));
    }

    pub fn set_extra_draw_hook(&mut self, hook: impl Fn(&mut dyn Painter, Rectangle) + 'static) {
        self.extra_draw_hook = Some(Arc::new(hook));
    }

    // Model access.

    pub fn min(&self) -> i32 {
        self.model.min()
    }

    pub fn max(&self) -> i32 {
        self.model.max()
    }

    pub fn lower(&self) -> i32 {
        self.model.lower()
    }

    pub fn higher(&self) -> i32 {
        self.model.higher()
    }

    pub fn selection(&self) -> Option<Thumb> {
        self.model.selection()
    }

    pub fn is_combined(&self) -> bool {
        self.model.is_combined()
    }

    pub fn active_position(&self) -> Option<i32> {
        self.model.active_position()
    }

    pub fn set_lower(&mut self, value: i32) {
        self.model.set_lower(value);
    }

    pub fn set_higher(&mut self, value: i32) {
        self.model.set_higher(value);
    }

    pub fn set_selection_span(&mut self, lower: i32, higher: i32) {
        self.model.set_selection_span(lower, higher);
    }

    pub fn set_max(&mut self, max: i32) {
        self.model.set_max(max);
    }

    pub fn move_active_by(&mut self, delta: i32) {
        self.model.move_active_by(delta);
    }

    pub fn combine_thumbs(&mut self, combine: bool) {
        self.model.combine_thumbs(combine);
    }

    pub fn reset_positions(&mut self) {
        self.model.reset_positions();
    }

    // Click flags.

    /// True once after a click without drag on the selected thumb.
    pub fn take_lclick_on_thumb(&mut self) -> bool {
        self.clicks.take_lclick_on_thumb()
    }

    pub fn is_rclick_on_thumb(&self) -> bool {
        self.clicks.is_rclick_on_thumb()
    }

    pub fn is_active(&self, ctx: &dyn InteractionContext) -> bool {
        ctx.active_id() == Some(self.id)
    }

    /// Both thumbs exist and move independently.
    fn two_thumbs(&self) -> bool {
        self.model.has_lower_thumb() && !self.model.is_combined()
    }

    fn selected(&self) -> Thumb {
        self.model.selection().unwrap_or(Thumb::Higher)
    }

    pub fn active_thumb_rect(&self) -> Rectangle {
        match self.selected() {
            Thumb::Lower => self.regions.lower_thumb,
            Thumb::Higher => self.regions.higher_thumb,
        }
    }

    fn active_slideable_region(&self) -> Rectangle {
        match self.selected() {
            Thumb::Lower => self.regions.lower_slideable,
            Thumb::Higher => self.regions.higher_slideable,
        }
    }

    /// Label for a thumb at `pos`; `None` when `pos` is out of bounds or the
    /// formatter produced nothing.
    pub fn label_for(&self, pos: i32) -> Option<String> {
        let (lo, hi) = (self.min().min(self.max()), self.min().max(self.max()));
        if !(lo..=hi).contains(&pos) {
            return None;
        }
        let label = match &self.label {
            Some(format) => format(pos),
            None => pos.to_string(),
        };
        (!label.is_empty()).then_some(label)
    }

    /// Label for the on-move preview, falling back to [`Self::label_for`].
    pub fn move_label_for(&self, pos: i32) -> Option<String> {
        match &self.move_label {
            Some(format) => {
                let (lo, hi) = (self.min().min(self.max()), self.min().max(self.max()));
                let label = format(pos);
                ((lo..=hi).contains(&pos) && !label.is_empty()).then_some(label)
            }
            None => self.label_for(pos),
        }
    }

    /// Value the pointer maps to while the preview label is shown.
    pub fn preview_position(&self) -> Option<i32> {
        self.move_label_rect.map(|_| self.mouse_pos)
    }

    /// Recomputes the geometry from the model without reading any input.
    pub fn layout(&mut self) {
        self.regions = Regions::derive(
            self.pos,
            self.size,
            self.flags.orientation,
            &self.style,
            (self.model.lower(), self.model.higher()),
            (self.model.min(), self.model.max()),
            self.model.has_lower_thumb(),
            self.model.is_combined(),
        );
    }

    /// Runs one frame of interaction and returns whether a value changed.
    pub fn update(&mut self, ctx: &mut dyn InteractionContext) -> bool {
        let orientation = self.flags.orientation;
        let id = self.id;
        let item = Rectangle::new(self.pos, self.size);

        let groove = regions::groove(self.pos, self.size, orientation, &self.style);
        let draggable = regions::draggable_region(groove, orientation, &self.style);
        if ctx.hoverable(draggable, id) && ctx.button_down(PointerButton::Left) {
            ctx.set_active(id);
            ctx.set_focus(id);
        }

        self.layout();
        self.model.select_default();

        let clicked = ctx.button_clicked(PointerButton::Left);
        if clicked && ctx.hoverable(self.regions.higher_thumb, id) {
            self.model.select(Thumb::Higher);
        }
        if clicked && self.two_thumbs() && ctx.hoverable(self.regions.lower_thumb, id) {
            self.model.select(Thumb::Lower);
        }

        let (min, max) = (self.model.min(), self.model.max());
        let selected = self.selected();
        let wheel = if self.flags.wheel {
            WheelMode::Step
        } else {
            WheelMode::Ignore
        };

        let mut pair = ThumbPair {
            lower: self.regions.lower_thumb,
            higher: self.regions.higher_thumb,
            lower_value: self.model.lower(),
            higher_value: self.model.higher(),
        };
        let changed = match selected {
            Thumb::Higher => reactor::behavior(
                ctx,
                id,
                self.regions.higher_slideable,
                min,
                max,
                &mut pair.higher_value,
                &mut pair.higher,
                orientation,
                wheel,
            ),
            Thumb::Lower if self.two_thumbs() => reactor::behavior(
                ctx,
                id,
                self.regions.lower_slideable,
                min,
                max,
                &mut pair.lower_value,
                &mut pair.lower,
                orientation,
                wheel,
            ),
            Thumb::Lower => false,
        };

        let corrected = self.two_thumbs()
            && collision::resolve(&mut pair, selected, self.style.thumb_radius(), orientation);

        self.regions.lower_thumb = pair.lower;
        self.regions.higher_thumb = pair.higher;
        if changed || corrected {
            let (value, other) = match selected {
                Thumb::Lower => (pair.lower_value, pair.higher_value),
                Thumb::Higher => (pair.higher_value, pair.lower_value),
            };
            self.model.commit_drag(selected, value, other);
        }

        let slideable = self.active_slideable_region();
        let active_thumb = self.active_thumb_rect();

        self.move_label_rect = None;
        if self.show_move_label
            && !changed
            && ctx.hoverable(item, id)
            && !ctx.is_dragging(PointerButton::Left)
        {
            let mut rect = active_thumb;
            reactor::behavior(
                ctx,
                id,
                slideable,
                min,
                max,
                &mut self.mouse_pos,
                &mut rect,
                orientation,
                WheelMode::Jump,
            );
            self.move_label_rect = Some(rect);
        }

        let hovered = ctx.hoverable(active_thumb, id);
        self.clicks.observe(ctx, hovered, active_thumb.center(), changed);

        if changed {
            log::trace!(
                "{}: {} thumb -> {}..={}",
                self.name,
                selected,
                self.model.lower(),
                self.model.higher()
            );
        }
        changed
    }

    /// Paints the last frame's geometry.
    pub fn paint(&self, painter: &mut dyn Painter) {
        let orientation = self.flags.orientation;
        let style = &self.style;
        let selected = self.selected();
        let slideable = self.active_slideable_region();

        let higher_center = self.regions.higher_thumb.center();
        let lower_center = self.regions.lower_thumb.center();

        if let Some(hook) = &self.extra_draw_hook {
            hook(painter, slideable);
        }

        paint::draw_background(painter, slideable, orientation, style);

        let line = if self.model.is_combined() {
            self.regions.groove
        } else {
            regions::slider_line(slideable, higher_center, lower_center, orientation, style)
        };
        match &self.scroll_line_hook {
            Some(hook) => hook(painter, line, slideable),
            None => paint::draw_default_scroll_line(painter, line, style),
        }

        let mark_higher = selected == Thumb::Higher && self.two_thumbs();
        paint::draw_thumb(painter, higher_center, mark_higher, orientation, style);
        if let Some(label) = self.label_for(self.model.higher()) {
            paint::draw_label(painter, &label, self.regions.higher_thumb, false, false, orientation, style);
        }

        if self.two_thumbs() {
            let label = self.label_for(self.model.lower());
            let text = painter.measure_text(label.as_deref().unwrap_or(""), style.label_text_size());
            let padding = style.text_padding();
            let mirrored = match orientation {
                Orientation::Horizontal => higher_center.x - lower_center.x < text.width + padding.x * 2.0,
                Orientation::Vertical => lower_center.y - higher_center.y < text.height + padding.y * 2.0,
            };

            paint::draw_thumb(painter, lower_center, selected == Thumb::Lower, orientation, style);
            if let Some(label) = label {
                paint::draw_label(painter, &label, self.regions.lower_thumb, mirrored, false, orientation, style);
            }
        }

        if let Some(rect) = self.move_label_rect {
            if let Some(label) = self.move_label_for(self.mouse_pos) {
                paint::draw_label(painter, &label, rect, false, true, orientation, style);
            }
        }
    }

    /// One full host frame: [`update`](Self::update) then
    /// [`paint`](Self::paint).
    pub fn render(&mut self, ctx: &mut dyn InteractionContext, painter: &mut dyn Painter) -> bool {
        let changed = self.update(ctx);
        self.paint(painter);
        changed
    }

    pub fn mode(&self) -> ThumbMode {
        self.model.mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FrameInput;
    use crate::paint::{DrawCommand, DrawList};

    fn slider() -> DoubleSlider {
        let mut slider = DoubleSlider::new(20, 80, 0, 100, SliderFlags::default(), "range", true);
        slider.set_size(Size::new(400.0, 80.0));
        slider
    }

    #[test]
    fn first_frame_selects_higher() {
        let mut slider = slider();
        let mut input = FrameInput::new();
        assert_eq!(slider.active_position(), None);
        assert!(!slider.update(&mut input));
        assert_eq!(slider.active_position(), Some(80));
    }

    #[test]
    fn clicking_lower_thumb_selects_it() {
        let mut slider = slider();
        let mut input = FrameInput::new();
        slider.update(&mut input);

        input.move_to(slider.regions().lower_thumb.center());
        input.press(PointerButton::Left);
        slider.update(&mut input);
        assert_eq!(slider.selection(), Some(Thumb::Lower));
        assert!(slider.is_active(&input));
    }

    #[test]
    fn out_of_range_labels_are_suppressed() {
        let mut slider = slider();
        slider.set_label_formatter(|pos| format!("L{pos}"));
        assert_eq!(slider.label_for(50).as_deref(), Some("L50"));
        assert_eq!(slider.label_for(100).as_deref(), Some("L100"));
        assert_eq!(slider.label_for(101), None);
        assert_eq!(slider.label_for(-1), None);
    }

    #[test]
    fn empty_formatter_output_hides_label() {
        let mut slider = slider();
        slider.set_label_formatter(|_| String::new());
        let mut input = FrameInput::new();
        let mut list = DrawList::new(slider.style());
        slider.render(&mut input, &mut list);
        assert_eq!(list.texts().count(), 0);
    }

    #[test]
    fn paints_both_labels() {
        let mut slider = slider();
        let mut input = FrameInput::new();
        let mut list = DrawList::new(slider.style());
        slider.render(&mut input, &mut list);
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(texts, vec!["80", "20"]);
    }

    #[test]
    fn combined_mode_draws_single_thumb() {
        let mut slider = slider();
        slider.combine_thumbs(true);
        let mut input = FrameInput::new();
        let mut list = DrawList::new(slider.style());
        slider.render(&mut input, &mut list);
        let thumbs = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count();
        // Border and fill of one hexagon.
        assert_eq!(thumbs, 2);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["80"]);
    }

    #[test]
    fn hooks_replace_default_drawing() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut slider = slider();
        let line_calls = Rc::new(Cell::new(0));
        let extra_calls = Rc::new(Cell::new(0));
        {
            let line_calls = line_calls.clone();
            slider.set_scroll_line_hook(move |_, _, _| line_calls.set(line_calls.get() + 1));
        }
        {
            let extra_calls = extra_calls.clone();
            slider.set_extra_draw_hook(move |_, _| extra_calls.set(extra_calls.get() + 1));
        }

        let mut input = FrameInput::new();
        let mut list = DrawList::new(slider.style());
        slider.render(&mut input, &mut list);
        assert_eq!((line_calls.get(), extra_calls.get()), (1, 1));
    }

    #[test]
    fn hovering_shows_preview_label() {
        let mut slider = slider();
        let mut input = FrameInput::new();
        slider.update(&mut input);

        input.move_to(slider.regions().higher_slideable.center());
        let mut list = DrawList::new(slider.style());
        slider.render(&mut input, &mut list);

        assert_eq!(slider.preview_position(), Some(50));
        assert_eq!(list.texts().count(), 3);
        assert_eq!((slider.lower(), slider.higher()), (20, 80));
    }

    #[test]
    fn preview_can_be_disabled() {
        let mut slider = slider();
        slider.show_label_on_move(false);
        let mut input = FrameInput::new();
        input.move_to(Point::new(200.0, 10.0));
        slider.update(&mut input);
        assert_eq!(slider.preview_position(), None);
    }

    #[test]
    fn wheel_steps_selected_thumb() {
        let mut slider = slider();
        let mut input = FrameInput::new();
        slider.update(&mut input);

        input.move_to(slider.regions().draggable.center());
        input.scroll(3.0);
        assert!(slider.update(&mut input));
        assert_eq!(slider.higher(), 83);
    }

    #[test]
    fn wheel_can_be_disabled() {
        let flags = SliderFlags {
            wheel: false,
            ..SliderFlags::default()
        };
        let mut slider = DoubleSlider::new(20, 80, 0, 100, flags, "no-wheel", true);
        slider.set_size(Size::new(400.0, 80.0));
        let mut input = FrameInput::new();
        slider.update(&mut input);

        input.move_to(slider.regions().draggable.center());
        input.scroll(3.0);
        assert!(!slider.update(&mut input));
        assert_eq!(slider.higher(), 80);
    }
}
