//! Navigation and main-content scroll handlers

use crate::commands::Cmd;
use crate::messages::NavigationMsg;
use crate::model::AppModel;

/// Handle navigation messages
pub fn update_navigation(model: &mut AppModel, msg: NavigationMsg) -> Option<Cmd> {
    match msg {
        NavigationMsg::LocationChanged(location) => {
            if !model.navigation.change_location(&location) {
                return None;
            }
            tracing::debug!(%location, "location changed, scrolling main content to top");
            model.main_scroll.scroll_to_top();
            // Active outline row changes even if the offset was already 0
            Some(Cmd::Redraw)
        }

        NavigationMsg::ScrollMain(delta) => Cmd::redraw_if(model.main_scroll.scroll_by(delta)),

        NavigationMsg::ScrollToTop => Cmd::redraw_if(model.main_scroll.scroll_to_top()),
    }
}
