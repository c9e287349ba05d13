//! UI state - press and hover tracking for the layout

use crate::view::hit_test::HitTarget;

/// Pointer interaction state that is not owned by the sidebar controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Target under the last primary-button press, until release
    pub pressed: Option<HitTarget>,
    /// Target currently under the pointer
    pub hover: Option<HitTarget>,
    /// Last known pointer position (logical pixels)
    pub pointer_position: Option<(f64, f64)>,
}

impl UiState {
    pub fn press(&mut self, target: Option<HitTarget>) {
        self.pressed = target;
    }

    /// Finish a press; returns the target that was pressed
    pub fn release(&mut self) -> Option<HitTarget> {
        self.pressed.take()
    }
}
