//! Keeps the two thumbs at least one radius apart after a drag frame.

use crate::axis::Orientation;
use crate::model::Thumb;
use crate::regions::translate;
use iced::{Rectangle, Vector};

/// Thumb rects and values as produced by the reactor for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPair {
    pub lower: Rectangle,
    pub higher: Rectangle,
    pub lower_value: i32,
    pub higher_value: i32,
}

/// Signed distance from the lower to the higher thumb center, positive while
/// the thumbs are in order. Vertical sliders grow upwards.
pub fn separation(pair: &ThumbPair, orientation: Orientation) -> f32 {
    let lower = pair.lower.center();
    let higher = pair.higher.center();
    match orientation {
        Orientation::Horizontal => higher.x - lower.x,
        Orientation::Vertical => lower.y - higher.y,
    }
}

/// Snaps the thumb that is not `selected` to exactly `radius` from the
/// selected one and gives it the selected value when the centers are closer
/// than `radius`. Returns whether a correction happened.
///
/// Only meaningful with two independent thumbs; the caller skips it for a
/// single or combined thumb.
pub fn resolve(pair: &mut ThumbPair, selected: Thumb, radius: f32, orientation: Orientation) -> bool {
    if separation(pair, orientation) >= radius {
        return false;
    }

    // Offset that moves a thumb one radius toward the higher end.
    let toward_higher = match orientation {
        Orientation::Horizontal => Vector::new(radius, 0.0),
        Orientation::Vertical => Vector::new(0.0, -radius),
    };

    match selected {
        Thumb::Higher => {
            pair.lower = translate(pair.higher, Vector::new(-toward_higher.x, -toward_higher.y));
            pair.lower_value = pair.higher_value;
        }
        Thumb::Lower => {
            pair.higher = translate(pair.lower, toward_higher);
            pair.higher_value = pair.lower_value;
        }
    }
    log::debug!(
        "thumbs collided, {} thumb snapped to {}",
        selected.other(),
        pair.higher_value
    );
    true
}
