//! UI message handlers (presses, pointer leaving the window)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;
use crate::view::hit_test::hit_test;

/// Handle UI messages (presses and pointer leaving the window)
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::PointerPressed { x, y } => {
            model.ui.pointer_position = Some((x, y));
            let target = hit_test(&model.geometry(), x as f32, y as f32);
            model.ui.press(target);

            if let Some(target) = target {
                if target.suppresses_default() {
                    tracing::trace!(?target, "press suppresses default selection");
                }
                if target.starts_resize() {
                    model.sidebar.begin_resize();
                    return Some(Cmd::Redraw);
                }
            }
            None
        }

        UiMsg::PointerLeft => {
            model.ui.pointer_position = None;
            let had_hover = model.ui.hover.take().is_some();
            Cmd::redraw_if(had_hover)
        }
    }
}
