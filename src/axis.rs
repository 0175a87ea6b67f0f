//! Conversions between logical values and pixel coordinates along one axis.
//!
//! The vertical axis is inverted: larger values sit closer to the top.

use iced::{Point, Rectangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    /// Coordinate of `point` along this axis.
    pub fn coord(self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// `(start, end)` of `rect` along this axis.
    pub fn span(self, rect: Rectangle) -> (f32, f32) {
        match self {
            Orientation::Horizontal => (rect.x, rect.x + rect.width),
            Orientation::Vertical => (rect.y, rect.y + rect.height),
        }
    }

    fn orient_ratio(self, ratio: f32) -> f32 {
        match self {
            Orientation::Horizontal => ratio,
            Orientation::Vertical => 1.0 - ratio,
        }
    }
}

fn value_ratio(value: i32, min: i32, max: i32) -> f32 {
    let range = max as i64 - min as i64;
    if range == 0 {
        0.0
    } else {
        ((value as i64 - min as i64) as f64 / range as f64) as f32
    }
}

/// Pixel coordinate of `value` inside `rect`. Values outside `[min, max]`
/// extrapolate linearly; a zero-length range maps every value like `min`.
pub fn value_to_pixel(value: i32, min: i32, max: i32, rect: Rectangle, orientation: Orientation) -> f32 {
    let ratio = orientation.orient_ratio(value_ratio(value, min, max));
    let (start, end) = orientation.span(rect);
    start + (end - start) * ratio
}

/// Same as [`value_to_pixel`] but clamps `value` into the bounds first.
pub fn clamped_value_to_pixel(
    value: i32,
    min: i32,
    max: i32,
    rect: Rectangle,
    orientation: Orientation,
) -> f32 {
    let value = value.clamp(min.min(max), min.max(max));
    value_to_pixel(value, min, max, rect, orientation)
}

/// `min + round(|max - min| * ratio)`, rounding half up.
pub fn pixel_to_value(ratio: f32, min: i32, max: i32) -> i32 {
    let range = (max as i64 - min as i64).unsigned_abs() as f64;
    let offset = (range * ratio as f64 + 0.5).floor() as i64;
    (min as i64 + offset).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Position of `pointer` along `region` as a ratio in `[0, 1]`, inverted for
/// the vertical axis. An empty region is treated as a pointer at its start.
pub fn pointer_ratio(pointer: Point, region: Rectangle, orientation: Orientation) -> f32 {
    let (start, end) = orientation.span(region);
    let size = end - start;
    let ratio = if size > 0.0 {
        ((orientation.coord(pointer) - start) / size).clamp(0.0, 1.0)
    } else {
        0.0
    };
    orientation.orient_ratio(ratio)
}
