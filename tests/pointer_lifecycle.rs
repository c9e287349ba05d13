//! Pointer subscription lifecycle - mount, dispose, late delivery

mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::test_model;
use sidebar_layout::model::SidebarMetrics;
use sidebar_layout::{PanelResizeController, PointerEvent, PointerEvents};

fn moved(x: f64) -> PointerEvent {
    PointerEvent::Moved { x, y: 0.0 }
}

#[test]
fn test_model_holds_exactly_one_subscription() {
    let model = test_model();
    assert_eq!(model.pointer_events.listener_count(), 1);
}

#[test]
fn test_dispose_releases_subscription_once() {
    let mut model = test_model();
    model.sidebar.dispose();
    assert_eq!(model.pointer_events.listener_count(), 0);

    model.sidebar.dispose();
    assert_eq!(model.pointer_events.listener_count(), 0);
    assert!(model.sidebar.is_disposed());
}

#[test]
fn test_dropping_model_releases_subscription() {
    let model = test_model();
    let events = model.pointer_events.clone();
    assert_eq!(events.listener_count(), 1);

    drop(model);
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn test_events_after_dispose_are_no_ops() {
    let events = PointerEvents::new();
    let mut controller = PanelResizeController::new(SidebarMetrics::default(), || 0.0, &events);
    controller.begin_resize();
    controller.dispose();

    events.emit(moved(100.0));
    events.emit(PointerEvent::Released);

    assert_eq!(controller.width(), 300.0);
    assert!(!controller.is_resizing());
}

#[test]
fn test_late_delivery_to_disposed_controller_is_ignored() {
    let events = PointerEvents::new();
    let slot: Rc<RefCell<Option<PanelResizeController>>> = Rc::new(RefCell::new(None));

    // Registered first, so it runs before the controller's listener
    let disposer = {
        let slot = Rc::clone(&slot);
        events.subscribe(move |_| {
            if let Some(controller) = slot.borrow_mut().as_mut() {
                controller.dispose();
            }
        })
    };

    let controller = PanelResizeController::new(SidebarMetrics::default(), || 0.0, &events);
    controller.begin_resize();
    *slot.borrow_mut() = Some(controller);

    // The controller's listener is still in this dispatch's snapshot
    events.emit(moved(120.0));

    let slot = slot.borrow();
    let Some(controller) = slot.as_ref() else {
        panic!("controller missing");
    };
    assert!(controller.is_disposed());
    assert_eq!(controller.width(), 300.0);
    assert_eq!(events.listener_count(), 1);
    drop(disposer);
}

#[test]
fn test_late_delivery_to_dropped_controller_is_ignored() {
    let events = PointerEvents::new();
    let slot: Rc<RefCell<Option<PanelResizeController>>> = Rc::new(RefCell::new(None));

    let _dropper = {
        let slot = Rc::clone(&slot);
        events.subscribe(move |_| {
            slot.borrow_mut().take();
        })
    };

    let controller = PanelResizeController::new(SidebarMetrics::default(), || 0.0, &events);
    controller.begin_resize();
    *slot.borrow_mut() = Some(controller);

    events.emit(moved(120.0));
    events.emit(PointerEvent::Released);

    assert!(slot.borrow().is_none());
    assert_eq!(events.listener_count(), 1);
}

#[test]
fn test_anchor_read_per_sample() {
    let events = PointerEvents::new();
    let left = Rc::new(Cell::new(0.0));
    let live = Rc::clone(&left);
    let controller =
        PanelResizeController::new(SidebarMetrics::default(), move || live.get(), &events);
    controller.begin_resize();

    events.emit(moved(200.0));
    assert_eq!(controller.width(), 200.0);

    // Container shifted right between samples
    left.set(50.0);
    events.emit(moved(200.0));
    assert_eq!(controller.width(), 150.0);
}

#[test]
fn test_independent_controllers_share_stream() {
    let events = PointerEvents::new();
    let first = PanelResizeController::new(SidebarMetrics::default(), || 0.0, &events);
    let second = PanelResizeController::new(SidebarMetrics::new(200.0, 20.0, 2.0), || 0.0, &events);
    assert_eq!(events.listener_count(), 2);

    second.begin_resize();
    events.emit(moved(380.0));

    assert_eq!(first.width(), 300.0);
    assert_eq!(second.width(), 380.0);

    drop(second);
    assert_eq!(events.listener_count(), 1);
}
