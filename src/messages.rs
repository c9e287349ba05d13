//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

pub use crate::pointer::PointerEvent;

/// Sidebar panel actions
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Pointer pressed on the drag handle
    BeginResize,
    /// End the drag session
    EndResize,
    /// Pointer sample at window x (logical pixels), applied while resizing
    TrackPointer(f64),
    /// Collapse to minimum width / restore the configured width (fold button, Cmd+B)
    ToggleFold,
}

/// Navigation and main-content scrolling
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationMsg {
    /// The current location changed; resets main scroll when it differs
    LocationChanged(String),
    /// Scroll main content by pixels (positive = down)
    ScrollMain(f32),
    /// Jump main content back to the top (Home)
    ScrollToTop,
}

/// Pointer input that is not part of the viewport-wide stream
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Primary button pressed at window coordinates (logical pixels)
    PointerPressed { x: f64, y: f64 },
    /// Pointer left the window
    PointerLeft,
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized (logical width, height)
    Resize(u32, u32),
    /// Request to quit
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Panel(PanelMsg),
    /// Viewport-wide pointer input, forwarded to every subscriber
    Pointer(PointerEvent),
    Navigation(NavigationMsg),
    Ui(UiMsg),
    App(AppMsg),
}
