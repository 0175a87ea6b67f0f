//! A two-thumb range slider with an inverted vertical axis, optional single
//! thumb and combine modes, hover preview labels and click classification.
//!
//! [`DoubleSlider`] is host-agnostic: it reads input through an
//! [`InteractionContext`] and draws through a [`Painter`]. The [`widget`]
//! module hosts it in an iced canvas.

pub mod axis;
pub mod clicks;
pub mod collision;
pub mod control;
pub mod input;
pub mod model;
pub mod paint;
pub mod reactor;
pub mod regions;
pub mod style;
pub mod widget;

pub use axis::Orientation;
pub use control::{DoubleSlider, SliderFlags};
pub use input::{FrameInput, InputSource, InteractionContext, PointerButton, WidgetId};
pub use model::{RangeModel, Thumb, ThumbMode};
pub use paint::{DrawCommand, DrawList, Painter};
pub use style::{SliderStyle, StyleError};
pub use widget::{double_slider, vertical_double_slider, DoubleSliderWidget, SliderEvent};
