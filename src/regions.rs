//! Rectangles derived from the container and the style metrics each frame.

use crate::axis::{self, Orientation};
use crate::style::SliderStyle;
use iced::{Point, Rectangle, Size, Vector};

/// Geometry of one frame. Nothing here survives into the next frame except
/// through the model values it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Regions {
    pub groove: Rectangle,
    pub draggable: Rectangle,
    pub lower_slideable: Rectangle,
    pub higher_slideable: Rectangle,
    pub lower_thumb: Rectangle,
    pub higher_thumb: Rectangle,
}

/// Rectangle spanning `min`..`max`, normalising swapped corners.
pub fn from_corners(min: Point, max: Point) -> Rectangle {
    let x = min.x.min(max.x);
    let y = min.y.min(max.y);
    Rectangle {
        x,
        y,
        width: (max.x - min.x).abs(),
        height: (max.y - min.y).abs(),
    }
}

pub fn max_corner(rect: Rectangle) -> Point {
    Point::new(rect.x + rect.width, rect.y + rect.height)
}

/// Grows `rect` by `amount` on every side.
pub fn expand(rect: Rectangle, amount: Vector) -> Rectangle {
    Rectangle {
        x: rect.x - amount.x,
        y: rect.y - amount.y,
        width: rect.width + amount.x * 2.0,
        height: rect.height + amount.y * 2.0,
    }
}

pub fn translate(rect: Rectangle, offset: Vector) -> Rectangle {
    Rectangle {
        x: rect.x + offset.x,
        y: rect.y + offset.y,
        ..rect
    }
}

/// A square of side `2 * radius` centered on `center`.
pub fn thumb_rect(center: Point, radius: f32) -> Rectangle {
    Rectangle::new(
        Point::new(center.x - radius, center.y - radius),
        Size::new(radius * 2.0, radius * 2.0),
    )
}

/// Moves `rect` so that its center lies at `center`.
pub fn recenter(rect: Rectangle, center: Point) -> Rectangle {
    Rectangle::new(
        Point::new(center.x - rect.width * 0.5, center.y - rect.height * 0.5),
        rect.size(),
    )
}

/// Track inside the container, inset by thumb and label room on both ends of
/// the primary axis and pushed to the far side of the cross axis.
pub fn groove(pos: Point, size: Size, orientation: Orientation, style: &SliderStyle) -> Rectangle {
    let thumb_dummy = style.thumb_dummy_sz();
    let text_dummy = style.text_dummy_sz();
    let groove = style.groove_sz();
    let dummy = style.dummy_sz();

    let (start, extent) = match orientation {
        Orientation::Horizontal => (
            Point::new(
                pos.x + thumb_dummy.x + text_dummy.x,
                pos.y + size.height - groove.y - dummy.y,
            ),
            Size::new(size.width - 2.0 * (thumb_dummy.x + text_dummy.x), groove.y),
        ),
        Orientation::Vertical => (
            Point::new(pos.x + size.width - groove.x - dummy.x, pos.y + text_dummy.y),
            Size::new(groove.x, size.height - 2.0 * text_dummy.y),
        ),
    };

    Rectangle::new(start, Size::new(extent.width.max(0.0), extent.height.max(0.0)))
}

/// The groove's centerline widened along the cross axis.
pub fn draggable_region(groove: Rectangle, orientation: Orientation, style: &SliderStyle) -> Rectangle {
    let center = groove.center();
    let half = style.draggable_region_sz();
    match orientation {
        Orientation::Horizontal => Rectangle {
            x: groove.x,
            y: center.y - half.y,
            width: groove.width,
            height: half.y * 2.0,
        },
        Orientation::Vertical => Rectangle {
            x: center.x - half.x,
            y: groove.y,
            width: half.x * 2.0,
            height: groove.height,
        },
    }
}

/// Travel ranges of the two thumb centers as `(lower, higher)`.
///
/// With two independent thumbs each range gives up one thumb radius on the
/// side facing the other thumb, so equal values put the centers exactly one
/// radius apart.
pub fn slideable_regions(
    draggable: Rectangle,
    thumb_radius: f32,
    has_lower_thumb: bool,
    combine_thumbs: bool,
    orientation: Orientation,
) -> (Rectangle, Rectangle) {
    if !has_lower_thumb || combine_thumbs {
        return (draggable, draggable);
    }

    let min = draggable.position();
    let max = max_corner(draggable);
    match orientation {
        Orientation::Horizontal => (
            from_corners(min, max - Vector::new(thumb_radius, 0.0)),
            from_corners(min + Vector::new(thumb_radius, 0.0), max),
        ),
        Orientation::Vertical => (
            from_corners(min + Vector::new(0.0, thumb_radius), max),
            from_corners(min, max - Vector::new(0.0, thumb_radius)),
        ),
    }
}

/// Thumb square for `value` within `slideable`, centered on the draggable
/// band's cross-axis midline.
pub fn thumb_for_value(
    value: i32,
    min: i32,
    max: i32,
    slideable: Rectangle,
    draggable: Rectangle,
    thumb_radius: f32,
    orientation: Orientation,
) -> Rectangle {
    let mid = draggable.center();
    let pos = axis::value_to_pixel(value, min, max, slideable, orientation);
    let center = match orientation {
        Orientation::Horizontal => Point::new(pos, mid.y),
        Orientation::Vertical => Point::new(mid.x, pos),
    };
    thumb_rect(center, thumb_radius)
}

/// Segment of the groove between the two thumb centers.
pub fn slider_line(
    slideable: Rectangle,
    higher_center: Point,
    lower_center: Point,
    orientation: Orientation,
    style: &SliderStyle,
) -> Rectangle {
    let mid = slideable.center();
    let groove = style.groove_sz();
    match orientation {
        Orientation::Horizontal => from_corners(
            Point::new(lower_center.x, mid.y - groove.y / 2.0),
            Point::new(higher_center.x, mid.y + groove.y / 2.0),
        ),
        Orientation::Vertical => from_corners(
            Point::new(mid.x - groove.x / 2.0, higher_center.y),
            Point::new(mid.x + groove.x / 2.0, lower_center.y),
        ),
    }
}

/// `region` padded by half a thumb on both ends of the primary axis.
pub fn wheel_region(region: Rectangle, thumb: Size, orientation: Orientation) -> Rectangle {
    match orientation {
        Orientation::Horizontal => expand(region, Vector::new(thumb.width / 2.0, 0.0)),
        Orientation::Vertical => expand(region, Vector::new(0.0, thumb.height / 2.0)),
    }
}

impl Regions {
    /// Groove, band, travel ranges and thumbs for the given values.
    #[allow(clippy::too_many_arguments)]
    pub fn derive(
        pos: Point,
        size: Size,
        orientation: Orientation,
        style: &SliderStyle,
        (lower, higher): (i32, i32),
        (min, max): (i32, i32),
        has_lower_thumb: bool,
        combine_thumbs: bool,
    ) -> Self {
        let groove = groove(pos, size, orientation, style);
        let draggable = draggable_region(groove, orientation, style);
        let radius = style.thumb_radius();
        let (lower_slideable, higher_slideable) =
            slideable_regions(draggable, radius, has_lower_thumb, combine_thumbs, orientation);

        Self {
            groove,
            draggable,
            lower_slideable,
            higher_slideable,
            lower_thumb: thumb_for_value(lower, min, max, lower_slideable, draggable, radius, orientation),
            higher_thumb: thumb_for_value(higher, min, max, higher_slideable, draggable, radius, orientation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> SliderStyle {
        SliderStyle::default()
    }

    #[test]
    fn horizontal_groove_is_inset_symmetrically() {
        let groove = groove(Point::ORIGIN, Size::new(400.0, 60.0), Orientation::Horizontal, &style());
        // 17 thumb room + 50 label room on each end.
        assert_eq!(groove.x, 67.0);
        assert_eq!(groove.width, 400.0 - 134.0);
        assert_eq!(groove.y, 60.0 - 4.0 - 16.0);
        assert_eq!(groove.height, 4.0);
    }

    #[test]
    fn vertical_groove_hugs_right_edge() {
        let groove = groove(Point::new(10.0, 0.0), Size::new(80.0, 300.0), Orientation::Vertical, &style());
        assert_eq!(groove.x, 10.0 + 80.0 - 4.0 - 24.0);
        assert_eq!(groove.y, 34.0);
        assert_eq!(groove.height, 300.0 - 68.0);
    }

    #[test]
    fn tiny_container_never_yields_negative_groove() {
        let groove = groove(Point::ORIGIN, Size::new(20.0, 20.0), Orientation::Horizontal, &style());
        assert_eq!(groove.width, 0.0);
    }

    #[test]
    fn draggable_band_straddles_groove_center() {
        let groove = Rectangle::new(Point::new(0.0, 10.0), Size::new(100.0, 4.0));
        let band = draggable_region(groove, Orientation::Horizontal, &style());
        assert_eq!(band.center(), groove.center());
        assert_eq!(band.height, 38.0);
        assert_eq!(band.width, 100.0);
    }

    #[test]
    fn slideable_regions_reserve_one_radius() {
        let band = Rectangle::new(Point::ORIGIN, Size::new(100.0, 20.0));
        let (lower, higher) = slideable_regions(band, 10.0, true, false, Orientation::Horizontal);
        assert_eq!((lower.x, lower.width), (0.0, 90.0));
        assert_eq!((higher.x, higher.width), (10.0, 90.0));

        let band = Rectangle::new(Point::ORIGIN, Size::new(20.0, 100.0));
        let (lower, higher) = slideable_regions(band, 10.0, true, false, Orientation::Vertical);
        assert_eq!((lower.y, lower.height), (10.0, 90.0));
        assert_eq!((higher.y, higher.height), (0.0, 90.0));
    }

    #[test]
    fn single_or_combined_thumb_uses_whole_band() {
        let band = Rectangle::new(Point::ORIGIN, Size::new(100.0, 20.0));
        assert_eq!(slideable_regions(band, 10.0, false, false, Orientation::Horizontal), (band, band));
        assert_eq!(slideable_regions(band, 10.0, true, true, Orientation::Vertical), (band, band));
    }

    #[test]
    fn equal_values_sit_one_radius_apart() {
        let style = style();
        let regions = Regions::derive(
            Point::ORIGIN,
            Size::new(400.0, 60.0),
            Orientation::Horizontal,
            &style,
            (40, 40),
            (0, 100),
            true,
            false,
        );
        let gap = regions.higher_thumb.center().x - regions.lower_thumb.center().x;
        assert!((gap - style.thumb_radius()).abs() < 1e-3);
    }

    #[test]
    fn wheel_region_pads_primary_axis_only() {
        let region = Rectangle::new(Point::new(10.0, 10.0), Size::new(100.0, 20.0));
        let padded = wheel_region(region, Size::new(20.0, 20.0), Orientation::Horizontal);
        assert_eq!((padded.x, padded.width), (0.0, 120.0));
        assert_eq!((padded.y, padded.height), (10.0, 20.0));
    }
}
