//! Sidebar panel state - width, resize session, and fold toggle
//!
//! `PanelState` is the single record behind the resize controller. Every
//! action has one transition method here so the fold/resize interaction can
//! be tested without any rendering or event plumbing.
//!
//! States are `Idle`/`Resizing` crossed with `Unfolded`/`Folded`:
//! - `Idle --begin_resize--> Resizing`
//! - `Resizing --track_pointer(x)--> Resizing` (width updates in place)
//! - `Resizing --end_resize--> Idle`
//! - `toggle_fold` snaps the width and flips the fold flag
//!
//! After `dispose` every transition is a no-op.

use crate::config::LayoutConfig;

/// Width limits for the sidebar panel, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarMetrics {
    /// Smallest width the panel can take (also the folded width)
    pub min_width: f32,
    /// Largest width a drag can reach
    pub max_width: f32,
    /// Configured width, used at startup and when unfolding
    pub default_width: f32,
}

impl SidebarMetrics {
    pub const DEFAULT_WIDTH: f32 = 300.0;
    pub const MIN_WIDTH: f32 = 15.0;
    pub const MAX_RATIO: f32 = 1.5;

    /// Build metrics from a default width, deriving the max as `ratio × default`
    pub fn new(default_width: f32, min_width: f32, max_ratio: f32) -> Self {
        let max_width = (default_width * max_ratio).max(min_width);
        Self {
            min_width,
            max_width,
            default_width: default_width.max(min_width).min(max_width),
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(
            config.sidebar_width,
            config.sidebar_min_width,
            config.sidebar_max_ratio,
        )
    }

    /// Clamp a raw width into `[min_width, max_width]`
    #[inline]
    pub fn clamp(&self, width: f32) -> f32 {
        width.max(self.min_width).min(self.max_width)
    }
}

impl Default for SidebarMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::MIN_WIDTH, Self::MAX_RATIO)
    }
}

/// Current panel state
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub metrics: SidebarMetrics,
    /// Current width in logical pixels, always within the metric bounds
    pub width: f32,
    /// A pointer drag is in progress
    pub resizing: bool,
    /// The panel was collapsed with the fold toggle
    pub folded: bool,
    /// The owning controller has been torn down
    pub disposed: bool,
}

impl PanelState {
    pub fn new(metrics: SidebarMetrics) -> Self {
        Self {
            metrics,
            width: metrics.default_width,
            resizing: false,
            folded: false,
            disposed: false,
        }
    }

    /// Start a resize session (pointer-down on the drag handle)
    pub fn begin_resize(&mut self) {
        if self.disposed {
            return;
        }
        if !self.resizing {
            tracing::debug!(target: "panel", width = self.width, "resize started");
        }
        self.resizing = true;
    }

    /// End the resize session (pointer-up anywhere). Idempotent.
    pub fn end_resize(&mut self) {
        if self.disposed || !self.resizing {
            return;
        }
        self.resizing = false;
        tracing::debug!(target: "panel", width = self.width, "resize ended");
    }

    /// Apply a pointer sample while resizing.
    ///
    /// `anchor_left` is the panel container's left edge at sample time.
    /// Returns true when the width changed.
    pub fn track_pointer(&mut self, pointer_x: f64, anchor_left: f64) -> bool {
        if self.disposed || !self.resizing {
            return false;
        }

        let raw = pointer_x - anchor_left;
        if !raw.is_finite() {
            tracing::trace!(target: "panel", pointer_x, anchor_left, "ignoring non-finite sample");
            return false;
        }

        let width = self.metrics.clamp(raw as f32);
        let changed = width != self.width;
        self.width = width;
        changed
    }

    /// Collapse to the minimum width, or restore the configured default.
    ///
    /// Unfolding never restores a width set by dragging.
    pub fn toggle_fold(&mut self) {
        if self.disposed {
            return;
        }
        if self.folded {
            self.width = self.metrics.default_width;
            self.folded = false;
        } else {
            self.width = self.metrics.min_width;
            self.folded = true;
        }
        tracing::debug!(target: "panel", folded = self.folded, width = self.width, "fold toggled");
    }

    pub fn dispose(&mut self) {
        self.resizing = false;
        self.disposed = true;
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(SidebarMetrics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics() {
        let metrics = SidebarMetrics::default();
        assert_eq!(metrics.min_width, 15.0);
        assert_eq!(metrics.max_width, 450.0);
        assert_eq!(metrics.default_width, 300.0);
    }

    #[test]
    fn test_initial_state_is_idle_unfolded() {
        let state = PanelState::default();
        assert_eq!(state.width, 300.0);
        assert!(!state.resizing);
        assert!(!state.folded);
    }

    #[test]
    fn test_track_pointer_clamps_both_ends() {
        let mut state = PanelState::default();
        state.begin_resize();

        for x in [-1.0e9, -50.0, 0.0, 14.0, 15.0, 200.0, 450.0, 451.0, 1.0e9] {
            state.track_pointer(x, 0.0);
            assert!(state.width >= 15.0 && state.width <= 450.0, "x={x}");
        }
    }

    #[test]
    fn test_track_pointer_relative_to_anchor() {
        let mut state = PanelState::default();
        state.begin_resize();
        assert!(state.track_pointer(320.0, 100.0));
        assert_eq!(state.width, 220.0);
    }

    #[test]
    fn test_track_pointer_idle_is_noop() {
        let mut state = PanelState::default();
        assert!(!state.track_pointer(120.0, 0.0));
        assert_eq!(state.width, 300.0);
    }

    #[test]
    fn test_nan_sample_keeps_width() {
        let mut state = PanelState::default();
        state.begin_resize();
        state.track_pointer(200.0, 0.0);
        assert!(!state.track_pointer(f64::NAN, 0.0));
        assert!(!state.track_pointer(f64::INFINITY, 0.0));
        assert_eq!(state.width, 200.0);
    }

    #[test]
    fn test_end_resize_is_idempotent() {
        let mut state = PanelState::default();
        state.begin_resize();
        state.track_pointer(250.0, 0.0);
        state.end_resize();
        assert!(!state.resizing);
        state.end_resize();
        assert!(!state.resizing);
        assert_eq!(state.width, 250.0);
    }

    #[test]
    fn test_fold_restores_default_not_dragged_width() {
        let mut state = PanelState::default();
        state.begin_resize();
        state.track_pointer(400.0, 0.0);
        state.end_resize();

        state.toggle_fold();
        assert_eq!(state.width, 15.0);
        assert!(state.folded);

        state.toggle_fold();
        assert_eq!(state.width, 300.0);
        assert!(!state.folded);
    }

    #[test]
    fn test_drag_while_folded_keeps_fold_flag() {
        let mut state = PanelState::default();
        state.toggle_fold();
        state.begin_resize();
        state.track_pointer(120.0, 0.0);
        state.end_resize();
        assert_eq!(state.width, 120.0);
        assert!(state.folded);

        state.toggle_fold();
        assert_eq!(state.width, 300.0);
    }

    #[test]
    fn test_disposed_state_ignores_everything() {
        let mut state = PanelState::default();
        state.begin_resize();
        state.dispose();
        assert!(!state.resizing);

        state.begin_resize();
        state.track_pointer(100.0, 0.0);
        state.toggle_fold();
        assert_eq!(state.width, 300.0);
        assert!(!state.folded);
    }

    #[test]
    fn test_metrics_from_custom_default() {
        let metrics = SidebarMetrics::new(200.0, 20.0, 2.0);
        assert_eq!(metrics.max_width, 400.0);
        assert_eq!(metrics.clamp(10.0), 20.0);
        assert_eq!(metrics.clamp(500.0), 400.0);
    }
}
