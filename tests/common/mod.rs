//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use sidebar_layout::config::LayoutConfig;
use sidebar_layout::messages::{Msg, PointerEvent, UiMsg};
use sidebar_layout::model::{AppModel, OutlineEntry};
use sidebar_layout::update::update;

pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 800;

pub const ROUTES: [&str; 3] = ["/overview", "/endpoints", "/models"];

/// Create a test model with default config, three outline routes, at the first route
pub fn test_model() -> AppModel {
    test_model_with(LayoutConfig::default())
}

/// Create a test model with the given config
pub fn test_model_with(config: LayoutConfig) -> AppModel {
    AppModel::new(
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        config,
        OutlineEntry::from_routes(ROUTES),
        ROUTES[0],
    )
}

/// Press the primary button at window coordinates
pub fn press(model: &mut AppModel, x: f64, y: f64) {
    update(model, Msg::Pointer(PointerEvent::Moved { x, y }));
    update(model, Msg::Ui(UiMsg::PointerPressed { x, y }));
}

pub fn move_to(model: &mut AppModel, x: f64, y: f64) {
    update(model, Msg::Pointer(PointerEvent::Moved { x, y }));
}

pub fn release(model: &mut AppModel) {
    update(model, Msg::Pointer(PointerEvent::Released));
}

/// Centre of the drag handle, away from the fold button
pub fn handle_point(model: &AppModel) -> (f64, f64) {
    let geometry = model.geometry();
    (
        (geometry.handle.x + geometry.handle.width / 2.0) as f64,
        (geometry.handle.y + 20.0) as f64,
    )
}

/// Centre of the fold button
pub fn fold_button_point(model: &AppModel) -> (f64, f64) {
    let button = model.geometry().fold_button;
    (
        (button.x + button.width / 2.0) as f64,
        (button.y + button.height / 2.0) as f64,
    )
}

/// Click the fold button (press and release without moving)
pub fn click_fold_button(model: &mut AppModel) {
    let (x, y) = fold_button_point(model);
    press(model, x, y);
    release(model);
}

/// Centre of outline row `index`
pub fn outline_row_point(model: &AppModel, index: usize) -> (f64, f64) {
    let row = model.geometry().outline_row(index);
    (
        (row.x + row.width / 2.0) as f64,
        (row.y + row.height / 2.0) as f64,
    )
}
