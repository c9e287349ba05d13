//! Colors for the two-pane layout

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Palette used by the painter
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Sidebar panel background
    pub sidebar_background: Color,
    /// Right border of the sidebar panel
    pub sidebar_border: Color,
    /// Outline row bar
    pub outline_row: Color,
    /// Outline row matching the current location
    pub outline_row_active: Color,
    /// Drag handle strip
    pub handle: Color,
    /// Drag handle while hovered or dragging
    pub handle_active: Color,
    /// Fold button glyph
    pub fold_icon: Color,
    /// Main region background
    pub main_background: Color,
    /// Placeholder content blocks in the main column
    pub content_block: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            sidebar_background: Color::rgb(0x2B, 0x2D, 0x30),
            sidebar_border: Color::rgb(0x1E, 0x1F, 0x22),
            outline_row: Color::rgb(0x3C, 0x3F, 0x41),
            outline_row_active: Color::rgb(0x2E, 0x43, 0x6E),
            handle: Color::rgb(0x25, 0x27, 0x29),
            handle_active: Color::rgb(0x35, 0x74, 0xF0),
            fold_icon: Color::rgb(0xA9, 0xB7, 0xC6),
            main_background: Color::rgb(0x1E, 0x1F, 0x22),
            content_block: Color::rgba(0xBC, 0xBE, 0xC4, 0x30),
        }
    }
}
