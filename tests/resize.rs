//! Resize session tests - dragging the handle, clamping, session boundaries

mod common;

use common::{handle_point, move_to, press, release, test_model};
use sidebar_layout::messages::{Msg, PanelMsg};
use sidebar_layout::model::SidebarMetrics;
use sidebar_layout::update::update;
use sidebar_layout::{PanelResizeController, PointerEvent, PointerEvents};

#[test]
fn test_drag_handle_resizes_sidebar() {
    let mut model = test_model();
    let (x, y) = handle_point(&model);

    press(&mut model, x, y);
    assert!(model.sidebar.is_resizing());

    move_to(&mut model, 200.0, 400.0);
    assert_eq!(model.sidebar_width(), 200.0);

    move_to(&mut model, 350.0, 10.0);
    assert_eq!(model.sidebar_width(), 350.0);

    release(&mut model);
    assert!(!model.sidebar.is_resizing());
    assert_eq!(model.sidebar_width(), 350.0);
}

#[test]
fn test_drag_clamps_to_bounds() {
    let mut model = test_model();
    let (x, y) = handle_point(&model);
    press(&mut model, x, y);

    move_to(&mut model, 5000.0, y);
    assert_eq!(model.sidebar_width(), 450.0);

    move_to(&mut model, 3.0, y);
    assert_eq!(model.sidebar_width(), 15.0);

    move_to(&mut model, -200.0, y);
    assert_eq!(model.sidebar_width(), 15.0);
}

#[test]
fn test_moves_without_session_are_ignored() {
    let mut model = test_model();

    move_to(&mut model, 120.0, 300.0);
    assert_eq!(model.sidebar_width(), 300.0);
    assert!(!model.sidebar.is_resizing());
}

#[test]
fn test_moves_after_release_are_ignored() {
    let mut model = test_model();
    let (x, y) = handle_point(&model);
    press(&mut model, x, y);
    move_to(&mut model, 250.0, y);
    release(&mut model);

    move_to(&mut model, 400.0, y);
    assert_eq!(model.sidebar_width(), 250.0);
}

#[test]
fn test_release_anywhere_ends_session() {
    let mut model = test_model();
    let (x, y) = handle_point(&model);
    press(&mut model, x, y);

    // Far outside the sidebar, past the window's right edge
    move_to(&mut model, 2000.0, 900.0);
    release(&mut model);

    assert!(!model.sidebar.is_resizing());
    assert_eq!(model.sidebar_width(), 450.0);
}

#[test]
fn test_press_on_main_does_not_start_session() {
    let mut model = test_model();
    press(&mut model, 800.0, 300.0);
    assert!(!model.sidebar.is_resizing());

    move_to(&mut model, 100.0, 300.0);
    assert_eq!(model.sidebar_width(), 300.0);
}

#[test]
fn test_press_on_sidebar_does_not_start_session() {
    let mut model = test_model();
    press(&mut model, 100.0, 300.0);
    assert!(!model.sidebar.is_resizing());
}

#[test]
fn test_width_stays_in_bounds_for_any_sample() {
    let mut model = test_model();
    let metrics = model.sidebar.metrics();
    update(&mut model, Msg::Panel(PanelMsg::BeginResize));

    let samples = [
        -1e9,
        -1.0,
        0.0,
        14.9,
        15.0,
        15.1,
        299.5,
        449.9,
        450.0,
        451.0,
        1e12,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];
    for x in samples {
        update(&mut model, Msg::Panel(PanelMsg::TrackPointer(x)));
        let width = model.sidebar_width();
        assert!(
            width >= metrics.min_width && width <= metrics.max_width,
            "width {} out of bounds after sample {}",
            width,
            x
        );
    }
}

#[test]
fn test_non_finite_sample_keeps_previous_width() {
    let mut model = test_model();
    update(&mut model, Msg::Panel(PanelMsg::BeginResize));
    update(&mut model, Msg::Panel(PanelMsg::TrackPointer(222.0)));
    update(&mut model, Msg::Panel(PanelMsg::TrackPointer(f64::NAN)));
    assert_eq!(model.sidebar_width(), 222.0);
}

#[test]
fn test_resize_moves_main_region() {
    let mut model = test_model();
    let (x, y) = handle_point(&model);
    press(&mut model, x, y);
    move_to(&mut model, 240.0, y);

    let geometry = model.geometry();
    assert_eq!(geometry.sidebar.width, 240.0);
    assert_eq!(geometry.main.x, 240.0 + model.config.handle_width);
}

#[test]
fn test_custom_metrics_bounds() {
    let metrics = SidebarMetrics::new(200.0, 50.0, 2.0);
    assert_eq!(metrics.max_width, 400.0);
    assert_eq!(metrics.clamp(10.0), 50.0);
    assert_eq!(metrics.clamp(1000.0), 400.0);
}

#[test]
fn test_clamp_relative_to_offset_anchor() {
    let events = PointerEvents::new();
    let controller = PanelResizeController::new(SidebarMetrics::default(), || 100.0, &events);
    controller.begin_resize();

    events.emit(PointerEvent::Moved { x: 600.0, y: 0.0 });
    assert_eq!(controller.width(), 450.0);

    events.emit(PointerEvent::Moved { x: 50.0, y: 0.0 });
    assert_eq!(controller.width(), 15.0);

    events.emit(PointerEvent::Moved { x: 320.0, y: 0.0 });
    assert_eq!(controller.width(), 220.0);

    events.emit(PointerEvent::Released);
    assert!(!controller.is_resizing());
}
