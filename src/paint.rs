//! Drawing of the slider on top of a minimal primitive set, plus the hooks a
//! host can use to replace parts of it.

use crate::axis::Orientation;
use crate::regions;
use crate::style::SliderStyle;
use iced::{Color, Point, Rectangle, Size, Vector};
use std::f32::consts::PI;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

pub const TOOLTIP_BG: Color = Color {
    r: 0.4,
    g: 0.4,
    b: 0.4,
    a: 1.0,
};
pub const THUMB_BG: Color = Color {
    r: 0.923,
    g: 0.504,
    b: 0.264,
    a: 1.0,
};
pub const GROOVE_BG: Color = Color {
    r: 0.133,
    g: 0.133,
    b: 0.133,
    a: 0.8,
};
pub const BORDER: Color = Color::WHITE;
pub const TEXT: Color = Color::WHITE;

/// Formats a thumb position for display.
pub type LabelFormatter = Arc<dyn Fn(i32) -> String>;
/// Replaces the scroll line; receives the line and the slideable region.
pub type ScrollLineHook = Arc<dyn Fn(&mut dyn Painter, Rectangle, Rectangle)>;
/// Draws an extra layer below the slider; receives the slideable region.
pub type ExtraDrawHook = Arc<dyn Fn(&mut dyn Painter, Rectangle)>;

/// Draw primitives provided by the host.
pub trait Painter {
    fn fill_rect(&mut self, rect: Rectangle, color: Color, rounding: f32);
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color);
    fn fill_polygon(&mut self, points: &[Point], color: Color);
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f32);
    fn text(&mut self, position: Point, content: &str, color: Color, size: f32);
    fn measure_text(&self, content: &str, size: f32) -> Size;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rectangle,
        color: Color,
        rounding: f32,
    },
    Triangle {
        points: [Point; 3],
        color: Color,
    },
    Polygon {
        points: Vec<Point>,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    Text {
        position: Point,
        content: String,
        color: Color,
        size: f32,
    },
}

/// A [`Painter`] that records commands for later replay.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    glyph_width: f32,
    base_text_size: f32,
}

impl DrawList {
    pub fn new(style: &SliderStyle) -> Self {
        Self {
            commands: Vec::new(),
            glyph_width: style.glyph_width(),
            base_text_size: style.label_text_size().max(1.0),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every text drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Painter for DrawList {
    fn fill_rect(&mut self, rect: Rectangle, color: Color, rounding: f32) {
        self.commands.push(DrawCommand::Rect { rect, color, rounding });
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        self.commands.push(DrawCommand::Triangle {
            points: [a, b, c],
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn text(&mut self, position: Point, content: &str, color: Color, size: f32) {
        self.commands.push(DrawCommand::Text {
            position,
            content: content.to_string(),
            color,
            size,
        });
    }

    fn measure_text(&self, content: &str, size: f32) -> Size {
        let columns = content.width() as f32;
        Size::new(columns * self.glyph_width * size / self.base_text_size, size)
    }
}

/// Pill behind the travel range plus the darker groove inside it.
pub fn draw_background(
    painter: &mut dyn Painter,
    slideable: Rectangle,
    orientation: Orientation,
    style: &SliderStyle,
) {
    let half = style.groove_sz() * 0.55;
    let center = slideable.center();
    let groove = match orientation {
        Orientation::Horizontal => Rectangle {
            x: slideable.x,
            y: center.y - half.y,
            width: slideable.width,
            height: half.y * 2.0,
        },
        Orientation::Vertical => Rectangle {
            x: center.x - half.x,
            y: slideable.y,
            width: half.x * 2.0,
            height: slideable.height,
        },
    };
    let padding = match orientation {
        Orientation::Horizontal => Vector::new(2.0, 2.0),
        Orientation::Vertical => Vector::new(3.0, 4.0),
    } * style.scale;

    let background = regions::expand(groove, padding);
    let narrow = |rect: Rectangle| 0.5 * rect.width.min(rect.height);
    painter.fill_rect(background, BORDER, narrow(background));
    painter.fill_rect(groove, GROOVE_BG, narrow(groove));
}

pub fn draw_default_scroll_line(painter: &mut dyn Painter, line: Rectangle, style: &SliderStyle) {
    painter.fill_rect(line, THUMB_BG, style.rounding());
}

fn hexagon(center: Point, radius: f32, angle: f32) -> [Point; 6] {
    std::array::from_fn(|i| {
        let a = angle + i as f32 * PI / 3.0;
        Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
    })
}

/// Hexagonal thumb; `mark` adds a cross to flag the selected one of two.
pub fn draw_thumb(
    painter: &mut dyn Painter,
    center: Point,
    mark: bool,
    orientation: Orientation,
    style: &SliderStyle,
) {
    let line_width = style.thumb_border();
    let radius = style.thumb_radius();
    let angle = if orientation.is_horizontal() { 0.0 } else { PI * 0.5 };

    painter.fill_polygon(&hexagon(center, radius, angle), BORDER);
    painter.fill_polygon(&hexagon(center, radius - line_width, angle), THUMB_BG);

    if mark {
        let offset = 0.5 * radius;
        painter.stroke_line(
            center + Vector::new(-offset, 0.0),
            center + Vector::new(offset, 0.0),
            BORDER,
            line_width,
        );
        painter.stroke_line(
            center + Vector::new(0.0, -offset),
            center + Vector::new(0.0, offset),
            BORDER,
            line_width,
        );
    }
}

/// Corner triangle tying a label box to its thumb.
fn label_pointer(rect: Rectangle, offset: Vector, rounding: f32, mirrored: bool, horizontal: bool) -> [Point; 3] {
    let max = regions::max_corner(rect);
    let tip = match (mirrored, horizontal) {
        (false, true) => Point::new(rect.x + rounding, max.y),
        (false, false) => Point::new(max.x - rounding, max.y),
        (true, true) => Point::new(max.x - rounding - 1.0, max.y - 1.0),
        (true, false) => Point::new(max.x - rounding, rect.y),
    };
    let (second, third) = match (mirrored, horizontal) {
        (false, true) => (tip - Vector::new(offset.x, 0.0), tip - Vector::new(0.0, offset.y)),
        (false, false) => (tip - Vector::new(0.0, offset.y), tip + Vector::new(offset.x, 0.0)),
        (true, true) => (tip + Vector::new(offset.x, 0.0), tip - Vector::new(0.0, offset.y)),
        (true, false) => (tip + Vector::new(0.0, offset.y), tip + Vector::new(offset.x, 0.0)),
    };
    [tip, second, third]
}

/// Tooltip-style label next to `thumb`. Mirrored labels go to the opposite
/// side so that two labels don't overlap.
#[allow(clippy::too_many_arguments)]
pub fn draw_label(
    painter: &mut dyn Painter,
    label: &str,
    thumb: Rectangle,
    mirrored: bool,
    with_border: bool,
    orientation: Orientation,
    style: &SliderStyle,
) {
    if label.is_empty() {
        return;
    }

    let horizontal = orientation.is_horizontal();
    let center = thumb.center();
    let padding = style.text_padding();
    let rounding = style.rounding();
    let pointer = Vector::new(9.0, 8.0) * style.scale;
    let text_size = style.label_text_size();

    let content = painter.measure_text(label, text_size);
    let size = Size::new(content.width + padding.x * 2.0, content.height + padding.y * 2.0);
    let left_of_thumb = thumb.x - size.width - pointer.x;
    let start = match (mirrored, horizontal) {
        (false, true) => Point::new(thumb.x + thumb.width + pointer.x, center.y - size.height),
        (true, false) => Point::new(left_of_thumb, center.y),
        _ => Point::new(left_of_thumb, center.y - size.height),
    };
    let rect = Rectangle::new(start, size);

    if with_border {
        let border = 0.75 * rounding;
        let outer = regions::expand(rect, Vector::new(border, border));
        let offset = pointer + Vector::new(border, border);
        let [a, b, c] = label_pointer(outer, offset, border, mirrored, horizontal);
        painter.fill_rect(outer, THUMB_BG, rounding);
        painter.fill_triangle(a, b, c, THUMB_BG);
    }

    let [a, b, c] = label_pointer(rect, pointer, rounding, mirrored, horizontal);
    painter.fill_rect(rect, TOOLTIP_BG, rounding);
    painter.fill_triangle(a, b, c, TOOLTIP_BG);
    painter.text(start + padding, label, TEXT, text_size);
}
