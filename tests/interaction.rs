//! Frame-by-frame interaction scenarios driven through `FrameInput`.

use double_slider::{
    DoubleSlider, DrawList, FrameInput, InteractionContext, PointerButton, SliderFlags,
    SliderStyle, Thumb, WidgetId,
};
use iced::{Point, Size};

fn horizontal(lower: i32, higher: i32) -> DoubleSlider {
    let mut slider = DoubleSlider::new(lower, higher, 0, 100, SliderFlags::default(), "range", true);
    slider.set_size(Size::new(400.0, 80.0));
    slider
}

/// Runs one frame and drops the one-shot input edges.
fn frame(slider: &mut DoubleSlider, input: &mut FrameInput) -> bool {
    let changed = slider.update(input);
    input.end_frame();
    changed
}

fn painted(slider: &mut DoubleSlider, input: &mut FrameInput) -> DrawList {
    let mut list = DrawList::new(slider.style());
    slider.render(input, &mut list);
    input.end_frame();
    list
}

#[test]
fn click_without_drag_is_reported_once() {
    let mut slider = horizontal(20, 80);
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    input.move_to(slider.regions().higher_thumb.center());
    input.press(PointerButton::Left);
    assert!(!frame(&mut slider, &mut input));
    input.release(PointerButton::Left);
    assert!(!frame(&mut slider, &mut input));

    assert!(slider.take_lclick_on_thumb());
    assert!(!slider.take_lclick_on_thumb());
    assert_eq!((slider.lower(), slider.higher()), (20, 80));
}

#[test]
fn drag_follows_pointer_and_releases_capture() {
    let mut slider = horizontal(20, 80);
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    input.move_to(slider.regions().higher_thumb.center());
    input.press(PointerButton::Left);
    frame(&mut slider, &mut input);
    assert!(slider.is_active(&input));

    input.move_to(slider.regions().higher_slideable.center());
    assert!(frame(&mut slider, &mut input));
    assert_eq!(slider.higher(), 50);
    assert!(!slider.take_lclick_on_thumb());

    input.release(PointerButton::Left);
    frame(&mut slider, &mut input);
    assert!(!slider.is_active(&input));
    assert_eq!(input.active_id(), None);
}

#[test]
fn capture_keeps_tracking_outside_the_band() {
    let mut slider = horizontal(20, 80);
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    input.move_to(slider.regions().higher_thumb.center());
    input.press(PointerButton::Left);
    frame(&mut slider, &mut input);

    // Far above and to the right of the control.
    input.move_to(Point::new(2000.0, -300.0));
    frame(&mut slider, &mut input);
    assert_eq!(slider.higher(), 100);
}

#[test]
fn dragging_higher_below_lower_pushes_it_down() {
    let mut slider = horizontal(20, 80);
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    input.move_to(slider.regions().higher_thumb.center());
    input.press(PointerButton::Left);
    frame(&mut slider, &mut input);

    let left = slider.regions().higher_slideable.x;
    input.move_to(Point::new(left, slider.regions().draggable.center_y()));
    assert!(frame(&mut slider, &mut input));
    assert_eq!((slider.lower(), slider.higher()), (0, 0));

    let regions = slider.regions();
    let gap = regions.higher_thumb.center_x() - regions.lower_thumb.center_x();
    assert!((gap - slider.style().thumb_radius()).abs() < 1e-3);
}

#[test]
fn clicking_lower_thumb_moves_selection() {
    let mut slider = horizontal(20, 80);
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);
    assert_eq!(slider.selection(), Some(Thumb::Higher));

    input.move_to(slider.regions().lower_thumb.center());
    input.press(PointerButton::Left);
    frame(&mut slider, &mut input);
    input.release(PointerButton::Left);
    frame(&mut slider, &mut input);

    assert_eq!(slider.selection(), Some(Thumb::Lower));
    assert_eq!(slider.active_position(), Some(20));
    assert!(slider.take_lclick_on_thumb());
}

#[test]
fn right_click_flag_is_not_consumed() {
    let mut slider = horizontal(20, 80);
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    input.move_to(slider.regions().higher_thumb.center());
    input.press(PointerButton::Right);
    frame(&mut slider, &mut input);
    input.release(PointerButton::Right);
    frame(&mut slider, &mut input);

    assert!(slider.is_rclick_on_thumb());
    assert!(slider.is_rclick_on_thumb());

    input.press(PointerButton::Left);
    frame(&mut slider, &mut input);
    assert!(!slider.is_rclick_on_thumb());
}

#[test]
fn hover_preview_uses_move_formatter() {
    let mut slider = horizontal(20, 80);
    slider.set_label_formatter(|value| format!("layer {value}"));
    slider.set_move_label_formatter(|value| format!("go to {value}"));
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    input.move_to(slider.regions().higher_slideable.center());
    let list = painted(&mut slider, &mut input);
    let texts: Vec<_> = list.texts().collect();
    assert_eq!(texts, vec!["layer 80", "layer 20", "go to 50"]);
    assert_eq!((slider.lower(), slider.higher()), (20, 80));
}

#[test]
fn no_preview_while_dragging() {
    let mut slider = horizontal(20, 80);
    let mut input = FrameInput::new().with_drag_threshold(4.0);
    frame(&mut slider, &mut input);

    let start = slider.regions().higher_thumb.center();
    input.move_to(start);
    input.press(PointerButton::Left);
    frame(&mut slider, &mut input);

    // Wiggle past the threshold and back onto the same value.
    input.move_to(Point::new(start.x, start.y + 8.0));
    frame(&mut slider, &mut input);
    assert!(input.is_dragging(PointerButton::Left));
    assert_eq!(slider.preview_position(), None);
}

#[test]
fn out_of_range_label_is_suppressed() {
    let mut slider = horizontal(20, 80);
    slider.set_label_formatter(|value| format!("{value} mm"));
    assert_eq!(slider.label_for(0).as_deref(), Some("0 mm"));
    assert_eq!(slider.label_for(100).as_deref(), Some("100 mm"));
    assert_eq!(slider.label_for(101), None);
    assert_eq!(slider.move_label_for(-3), None);
}

#[test]
fn vertical_quarter_from_top_is_three_quarters() {
    let mut slider = DoubleSlider::new(0, 0, 0, 100, SliderFlags::vertical(), "layers", false);
    slider.set_size(Size::new(80.0, 300.0));
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    let band = slider.regions().higher_slideable;
    input.move_to(Point::new(band.center_x(), band.y + band.height * 0.25));
    input.press(PointerButton::Left);
    assert!(frame(&mut slider, &mut input));
    assert_eq!(slider.higher(), 75);
}

#[test]
fn vertical_wheel_steps_up() {
    let mut slider = DoubleSlider::new(0, 40, 0, 100, SliderFlags::vertical(), "layers", true);
    slider.set_size(Size::new(80.0, 300.0));
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    input.move_to(slider.regions().draggable.center());
    input.scroll(2.0);
    assert!(frame(&mut slider, &mut input));
    assert_eq!(slider.higher(), 42);
}

#[test]
fn another_capture_blocks_interaction() {
    let mut slider = horizontal(20, 80);
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    input.set_active(WidgetId::from_name("other"));
    input.move_to(slider.regions().higher_slideable.center());
    input.press(PointerButton::Left);
    input.scroll(5.0);
    assert!(!frame(&mut slider, &mut input));
    assert_eq!(slider.higher(), 80);
    assert_eq!(input.active_id(), Some(WidgetId::from_name("other")));
}

#[test]
fn combined_thumbs_move_together() {
    let mut slider = horizontal(20, 80);
    slider.combine_thumbs(true);
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    input.move_to(slider.regions().higher_slideable.center());
    input.press(PointerButton::Left);
    assert!(frame(&mut slider, &mut input));
    assert_eq!((slider.lower(), slider.higher()), (50, 50));

    slider.combine_thumbs(false);
    assert_eq!((slider.lower(), slider.higher()), (0, 100));
}

#[test]
fn style_from_toml_scales_geometry() {
    let style = SliderStyle::from_toml_str("scale = 2.0\nthumb_radius = 8.0\n").expect("valid style");
    let mut slider = horizontal(20, 80);
    slider.set_style(style);
    let mut input = FrameInput::new();
    frame(&mut slider, &mut input);

    let thumb = slider.regions().higher_thumb;
    assert_eq!(thumb.width, 32.0);
}
