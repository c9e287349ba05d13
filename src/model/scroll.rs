//! Main content scrolling and location tracking

/// Vertical scroll state of the main content region
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    /// Distance scrolled from the top, in logical pixels
    pub offset: f32,
    /// Total height of the rendered content
    pub content_height: f32,
    /// Visible height of the scroll region
    pub viewport_height: f32,
}

impl ScrollState {
    pub fn new(content_height: f32, viewport_height: f32) -> Self {
        Self {
            offset: 0.0,
            content_height,
            viewport_height,
        }
    }

    /// Largest valid offset
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Scroll by `delta` pixels (positive = down). Returns true if the offset moved.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let offset = (self.offset + delta).clamp(0.0, self.max_offset());
        let moved = offset != self.offset;
        self.offset = offset;
        moved
    }

    pub fn scroll_to_top(&mut self) -> bool {
        let moved = self.offset != 0.0;
        self.offset = 0.0;
        moved
    }

    /// Resize the visible region, keeping the offset in range
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
        self.offset = self.offset.min(self.max_offset());
    }
}

/// Current location reported by the navigation source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub location: String,
}

impl Navigation {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Record a new location; returns true if it differs from the current one
    pub fn change_location(&mut self, location: &str) -> bool {
        if self.location == location {
            return false;
        }
        self.location = location.to_string();
        true
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new("/")
    }
}
