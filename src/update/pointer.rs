//! Viewport pointer stream handling
//!
//! Moves and releases are emitted on the model's `PointerEvents`, which is how
//! they reach the sidebar controller. A release over the same fold button or
//! outline row that was pressed (see `update_ui`) counts as a click.

use crate::commands::Cmd;
use crate::messages::{NavigationMsg, PointerEvent};
use crate::model::AppModel;
use crate::view::hit_test::{hit_test, HitTarget};

use super::navigation::update_navigation;

/// Forward a pointer event to every subscriber and apply its effects
pub fn update_pointer(model: &mut AppModel, event: PointerEvent) -> Option<Cmd> {
    let width_before = model.sidebar.width();
    let resizing_before = model.sidebar.is_resizing();

    if let PointerEvent::Moved { x, y } = event {
        model.ui.pointer_position = Some((x, y));
    }

    model.pointer_events.emit(event);

    let width_changed = model.sidebar.width() != width_before;
    if width_changed {
        model.relayout();
    }

    let mut redraw = width_changed || resizing_before != model.sidebar.is_resizing();

    match event {
        PointerEvent::Moved { .. } => {
            redraw |= refresh_hover(model);
            Cmd::redraw_if(redraw)
        }
        PointerEvent::Released => {
            let click = complete_click(model);
            match (click, redraw) {
                (Some(cmd), _) => Some(cmd),
                (None, true) => Some(Cmd::Redraw),
                (None, false) => None,
            }
        }
    }
}

/// Recompute the hover target; returns true if it changed
fn refresh_hover(model: &mut AppModel) -> bool {
    let hover = model
        .ui
        .pointer_position
        .and_then(|(x, y)| hit_test(&model.geometry(), x as f32, y as f32));
    let changed = hover != model.ui.hover;
    model.ui.hover = hover;
    changed
}

/// Turn a press/release pair over the same target into a click
fn complete_click(model: &mut AppModel) -> Option<Cmd> {
    let pressed = model.ui.release()?;
    let (x, y) = model.ui.pointer_position?;
    let released = hit_test(&model.geometry(), x as f32, y as f32)?;

    match (pressed, released) {
        (HitTarget::FoldButton, HitTarget::FoldButton) => {
            model.sidebar.toggle_fold();
            model.relayout();
            refresh_hover(model);
            Some(Cmd::Redraw)
        }
        (HitTarget::Sidebar { row: Some(a) }, HitTarget::Sidebar { row: Some(b) }) if a == b => {
            let route = model.outline.get(a)?.route.clone();
            update_navigation(model, NavigationMsg::LocationChanged(route))
        }
        _ => None,
    }
}
