//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! Handlers return `None` when nothing needs to happen.

/// Commands returned by update functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Request a redraw of the window
    Redraw,
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Redraw only when `changed` is true
    pub fn redraw_if(changed: bool) -> Option<Self> {
        changed.then_some(Cmd::Redraw)
    }

    pub fn needs_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Cmd::Quit)
    }
}
