//! Application model - the complete state of the layout
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod outline;
pub mod panel;
pub mod scroll;
pub mod ui;

pub use outline::OutlineEntry;
pub use panel::{PanelState, SidebarMetrics};
pub use scroll::{Navigation, ScrollState};
pub use ui::UiState;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::LayoutConfig;
use crate::controller::PanelResizeController;
use crate::pointer::PointerEvents;
use crate::theme::Theme;
use crate::view::geometry::LayoutGeometry;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Sizing constants
    pub config: LayoutConfig,
    /// Colors
    pub theme: Theme,
    /// Viewport-wide pointer stream; the sidebar controller is subscribed to it
    pub pointer_events: PointerEvents,
    /// Sidebar width and resize/fold state
    pub sidebar: PanelResizeController,
    /// Sidebar container left edge, refreshed on every relayout
    anchor: Rc<Cell<f64>>,
    /// Main content scroll position
    pub main_scroll: ScrollState,
    /// Current location; changing it resets `main_scroll`
    pub navigation: Navigation,
    /// Sidebar content
    pub outline: Vec<OutlineEntry>,
    /// Window dimensions in logical pixels
    pub window_size: (u32, u32),
    /// Press/hover tracking
    pub ui: UiState,
}

impl AppModel {
    /// Create a model for a window of the given logical size
    pub fn new(
        window_width: u32,
        window_height: u32,
        config: LayoutConfig,
        outline: Vec<OutlineEntry>,
        location: impl Into<String>,
    ) -> Self {
        let pointer_events = PointerEvents::new();
        let anchor = Rc::new(Cell::new(0.0));

        let live_anchor = Rc::clone(&anchor);
        let sidebar = PanelResizeController::new(
            SidebarMetrics::from_config(&config),
            move || live_anchor.get(),
            &pointer_events,
        );

        let mut model = Self {
            main_scroll: ScrollState::new(0.0, window_height as f32),
            config,
            theme: Theme::default(),
            pointer_events,
            sidebar,
            anchor,
            navigation: Navigation::new(location),
            outline,
            window_size: (window_width, window_height),
            ui: UiState::default(),
        };
        model.relayout();
        model
    }

    /// Current sidebar width in logical pixels
    pub fn sidebar_width(&self) -> f32 {
        self.sidebar.width()
    }

    /// Geometry for the current window size and sidebar width
    pub fn geometry(&self) -> LayoutGeometry {
        LayoutGeometry::compute(
            self.window_size.0 as f32,
            self.window_size.1 as f32,
            self.sidebar.width(),
            &self.config,
        )
    }

    /// Refresh values derived from geometry: resize anchor and scroll extents
    pub fn relayout(&mut self) {
        let geometry = self.geometry();
        self.anchor.set(geometry.anchor_left());
        self.main_scroll.content_height = geometry.main_scroll_height();
        self.main_scroll.set_viewport_height(geometry.main.height);
    }

    /// Index of the outline entry matching the current location
    pub fn active_outline_index(&self) -> Option<usize> {
        self.outline
            .iter()
            .position(|entry| entry.route == self.navigation.location)
    }
}
