//! Keyboard input handling
//!
//! - `Cmd+B` / `Ctrl+B` toggles the sidebar fold
//! - `Home` scrolls the main content to the top
//! - Arrow and page keys scroll the main content
//! - `Escape` quits

use winit::keyboard::{Key, ModifiersState, NamedKey};

use sidebar_layout::commands::Cmd;
use sidebar_layout::messages::{AppMsg, Msg, NavigationMsg, PanelMsg};
use sidebar_layout::model::AppModel;
use sidebar_layout::update::update;

/// Map a key press to a message and apply it
pub fn handle_key(model: &mut AppModel, key: &Key, modifiers: ModifiersState) -> Option<Cmd> {
    let msg = key_to_msg(model, key, modifiers)?;
    update(model, msg)
}

fn key_to_msg(model: &AppModel, key: &Key, modifiers: ModifiersState) -> Option<Msg> {
    let command = modifiers.control_key() || modifiers.super_key();
    let line = model.config.scroll_line_height;
    let page = model.main_scroll.viewport_height;

    match key {
        Key::Character(c) if command && c.eq_ignore_ascii_case("b") => {
            Some(Msg::Panel(PanelMsg::ToggleFold))
        }
        Key::Named(NamedKey::Home) => Some(Msg::Navigation(NavigationMsg::ScrollToTop)),
        Key::Named(NamedKey::ArrowDown) => Some(Msg::Navigation(NavigationMsg::ScrollMain(line))),
        Key::Named(NamedKey::ArrowUp) => Some(Msg::Navigation(NavigationMsg::ScrollMain(-line))),
        Key::Named(NamedKey::PageDown) => Some(Msg::Navigation(NavigationMsg::ScrollMain(page))),
        Key::Named(NamedKey::PageUp) => Some(Msg::Navigation(NavigationMsg::ScrollMain(-page))),
        Key::Named(NamedKey::Escape) => Some(Msg::App(AppMsg::Quit)),
        _ => None,
    }
}
