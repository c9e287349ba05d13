//! Layout geometry for the two panes
//!
//! Pure functions that turn window size, current panel width, and config into
//! rectangles. The renderer and hit-testing both read from `LayoutGeometry`
//! so what is drawn and what is clickable cannot drift apart.

use crate::config::LayoutConfig;

/// Top padding inside the sidebar before the first outline row
pub const SIDEBAR_PADDING_TOP: f32 = 8.0;
/// Height of one outline row in the sidebar
pub const OUTLINE_ROW_HEIGHT: f32 = 28.0;
/// Side of the square fold button, centred on the drag handle
pub const FOLD_BUTTON_SIZE: f32 = 14.0;
/// Horizontal padding inside the main scroll region
pub const MAIN_PADDING_X: f32 = 16.0;
/// Vertical padding above and below the main content
pub const MAIN_PADDING_Y: f32 = 64.0;

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Computed rectangles for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGeometry {
    /// Whole window
    pub window: Rect,
    /// Sidebar container: panel plus drag handle, capped at max width + handle
    pub sidebar_container: Rect,
    /// Panel area that holds the outline
    pub sidebar: Rect,
    /// Left padding inside the panel when the container is wider than the content cap
    pub sidebar_padding_left: f32,
    /// Drag handle strip right of the panel
    pub handle: Rect,
    /// Fold toggle, centred on the handle
    pub fold_button: Rect,
    /// Main scroll region filling the rest of the window
    pub main: Rect,
    /// Main content column inside the scroll region (before scroll offset)
    pub main_content: Rect,
    /// Width cap for the main content column
    pub main_max_width: f32,
}

impl LayoutGeometry {
    /// Lay out both panes for a window of `window_width × window_height`
    pub fn compute(
        window_width: f32,
        window_height: f32,
        panel_width: f32,
        config: &LayoutConfig,
    ) -> Self {
        let window = Rect::new(0.0, 0.0, window_width.max(0.0), window_height.max(0.0));
        let handle_width = config.handle_width;

        let container_width =
            (panel_width + handle_width).min(config.sidebar_max_width() + handle_width);
        let sidebar_container = Rect::new(window.x, window.y, container_width, window.height);

        let sidebar_width = (container_width - handle_width).max(0.0);
        let sidebar = Rect::new(
            sidebar_container.x,
            sidebar_container.y,
            sidebar_width,
            window.height,
        );
        // Resolved against the capped container, not the window
        let sidebar_padding_left = ((container_width - config.max_content_width) / 2.0)
            .max(0.0)
            .min(sidebar_width);

        let handle = Rect::new(sidebar.right(), window.y, handle_width, window.height);
        let fold_button = Rect::new(
            handle.x + handle.width / 2.0 - FOLD_BUTTON_SIZE / 2.0,
            handle.y + handle.height / 2.0 - FOLD_BUTTON_SIZE / 2.0,
            FOLD_BUTTON_SIZE,
            FOLD_BUTTON_SIZE,
        );

        let main = Rect::new(
            sidebar_container.right(),
            window.y,
            (window.width - sidebar_container.right()).max(0.0),
            window.height,
        );

        let main_max_width = main_max_width(config.max_content_width, panel_width);
        let main_content = Rect::new(
            main.x + MAIN_PADDING_X,
            main.y + MAIN_PADDING_Y,
            (main.width - 2.0 * MAIN_PADDING_X).max(0.0).min(main_max_width),
            config.content_height,
        );

        Self {
            window,
            sidebar_container,
            sidebar,
            sidebar_padding_left,
            handle,
            fold_button,
            main,
            main_content,
            main_max_width,
        }
    }

    /// Left edge of the sidebar container, used as the resize anchor
    pub fn anchor_left(&self) -> f64 {
        self.sidebar_container.x as f64
    }

    /// Rectangle of outline row `index` inside the sidebar
    pub fn outline_row(&self, index: usize) -> Rect {
        let x = self.sidebar.x + self.sidebar_padding_left;
        Rect::new(
            x,
            self.sidebar.y + SIDEBAR_PADDING_TOP + index as f32 * OUTLINE_ROW_HEIGHT,
            (self.sidebar.right() - x).max(0.0),
            OUTLINE_ROW_HEIGHT,
        )
    }

    /// Outline row under a point, if any (not bounds-checked against the entry count)
    pub fn outline_row_at(&self, x: f32, y: f32) -> Option<usize> {
        if !self.sidebar.contains(x, y) || x < self.sidebar.x + self.sidebar_padding_left {
            return None;
        }
        let rel = y - self.sidebar.y - SIDEBAR_PADDING_TOP;
        if rel < 0.0 {
            return None;
        }
        Some((rel / OUTLINE_ROW_HEIGHT) as usize)
    }

    /// Height of the scrollable main region's content including padding
    pub fn main_scroll_height(&self) -> f32 {
        self.main_content.height + 2.0 * MAIN_PADDING_Y
    }
}

/// Width cap for main content: total width minus the panel, never negative
pub fn main_max_width(max_content_width: f32, panel_width: f32) -> f32 {
    (max_content_width - panel_width).max(0.0)
}
