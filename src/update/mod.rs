//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod navigation;
mod panel;
mod pointer;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::messages::PointerEvent;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use navigation::update_navigation;
pub use panel::update_panel;
pub use pointer::update_pointer;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Pointer(event) => pointer::update_pointer(model, event),
        Msg::Navigation(m) => navigation::update_navigation(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Pointer moves arrive at display rate
    let is_noisy = matches!(&msg, Msg::Pointer(PointerEvent::Moved { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let width_before = model.sidebar.width();
    let result = update_inner(model, msg);

    let state = model.sidebar.snapshot();
    if state.width != width_before {
        debug!(
            target: "panel",
            from = width_before,
            to = state.width,
            msg = %msg_name,
            "width changed"
        );
    }
    debug_assert!(
        state.width >= state.metrics.min_width && state.width <= state.metrics.max_width,
        "sidebar width {} outside [{}, {}] after {}",
        state.width,
        state.metrics.min_width,
        state.metrics.max_width,
        msg_name
    );

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Pointer(e) => format!("Pointer::{:?}", e),
        Msg::Navigation(m) => format!("Navigation::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
