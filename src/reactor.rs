//! Per-frame pointer and wheel handling for a single thumb.

use crate::axis::{self, Orientation};
use crate::input::{InputSource, InteractionContext, PointerButton, WidgetId};
use crate::regions;
use iced::{Point, Rectangle};

/// How hovering with the wheel-responsive region turns into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelMode {
    /// Step the current value by the truncated wheel delta.
    Step,
    /// Take the value under the pointer.
    Jump,
    /// Hovering never changes the value.
    Ignore,
}

/// Runs one frame of interaction for the thumb at `value` travelling within
/// `region` and returns whether the value changed.
///
/// `thumb` is re-centered on the pixel of the resulting value either way.
#[allow(clippy::too_many_arguments)]
pub fn behavior(
    ctx: &mut dyn InteractionContext,
    id: WidgetId,
    region: Rectangle,
    min: i32,
    max: i32,
    value: &mut i32,
    thumb: &mut Rectangle,
    orientation: Orientation,
    mode: WheelMode,
) -> bool {
    let pointer_ratio = axis::pointer_ratio(ctx.pointer(), region, orientation);
    let (lo, hi) = (min.min(max), min.max(max));

    let mut candidate = *value;

    let wheel_region = regions::wheel_region(region, thumb.size(), orientation);
    if ctx.hoverable(wheel_region, id) {
        candidate = match mode {
            WheelMode::Jump => axis::pixel_to_value(pointer_ratio, min, max),
            WheelMode::Step => value.saturating_add(ctx.wheel() as i32).clamp(lo, hi),
            WheelMode::Ignore => *value,
        };
    }

    if ctx.active_id() == Some(id) && ctx.active_source() == InputSource::Pointer {
        if ctx.button_released(PointerButton::Left) {
            ctx.clear_active();
        }
        if ctx.button_down(PointerButton::Left) {
            candidate = axis::pixel_to_value(pointer_ratio, min, max);
        }
    }

    let changed = *value != candidate;
    *value = candidate;

    let pos = axis::clamped_value_to_pixel(*value, min, max, region, orientation);
    let center = thumb.center();
    let center = match orientation {
        Orientation::Horizontal => Point::new(pos, center.y),
        Orientation::Vertical => Point::new(center.x, pos),
    };
    *thumb = regions::recenter(*thumb, center);

    changed
}
