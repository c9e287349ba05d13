//! Sidebar panel message handlers

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;

/// Handle panel messages (resize session and fold toggle)
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::BeginResize => {
            let was_resizing = model.sidebar.is_resizing();
            model.sidebar.begin_resize();
            // Handle highlight changes when a session starts
            Cmd::redraw_if(!was_resizing && model.sidebar.is_resizing())
        }

        PanelMsg::EndResize => {
            let was_resizing = model.sidebar.is_resizing();
            model.sidebar.end_resize();
            Cmd::redraw_if(was_resizing)
        }

        PanelMsg::TrackPointer(x) => {
            let changed = model.sidebar.track_pointer(x);
            if changed {
                model.relayout();
            }
            Cmd::redraw_if(changed)
        }

        PanelMsg::ToggleFold => {
            if model.sidebar.is_disposed() {
                return None;
            }
            model.sidebar.toggle_fold();
            model.relayout();
            Some(Cmd::Redraw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    fn test_model() -> AppModel {
        AppModel::new(1200, 800, LayoutConfig::default(), vec![], "/")
    }

    #[test]
    fn test_begin_twice_redraws_once() {
        let mut model = test_model();
        assert_eq!(
            update_panel(&mut model, PanelMsg::BeginResize),
            Some(Cmd::Redraw)
        );
        assert_eq!(update_panel(&mut model, PanelMsg::BeginResize), None);
    }

    #[test]
    fn test_track_pointer_without_change_is_quiet() {
        let mut model = test_model();
        model.sidebar.begin_resize();
        assert_eq!(
            update_panel(&mut model, PanelMsg::TrackPointer(300.0)),
            None
        );
        assert_eq!(
            update_panel(&mut model, PanelMsg::TrackPointer(250.0)),
            Some(Cmd::Redraw)
        );
        assert_eq!(model.geometry().handle.x, 250.0);
    }

    #[test]
    fn test_end_resize_when_idle_is_quiet() {
        let mut model = test_model();
        assert_eq!(update_panel(&mut model, PanelMsg::EndResize), None);
    }
}
