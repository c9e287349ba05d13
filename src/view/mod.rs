//! View - paints the two-pane layout into a pixel buffer
//!
//! `paint` is a pure function of the model, so the same code drives the
//! window renderer and headless tests.

pub mod frame;
pub mod geometry;

use crate::model::AppModel;

use frame::Frame;
use geometry::{LayoutGeometry, Rect};
use hit_test::HitTarget;

/// Vertical distance between placeholder content blocks
const CONTENT_BLOCK_PITCH: f32 = 48.0;
/// Height of a placeholder content block
const CONTENT_BLOCK_HEIGHT: f32 = 24.0;
/// Inset of outline row bars inside their row
const OUTLINE_ROW_INSET: f32 = 4.0;

fn scaled(rect: Rect, scale: f32) -> Rect {
    Rect::new(
        rect.x * scale,
        rect.y * scale,
        rect.width * scale,
        rect.height * scale,
    )
}

/// Paint the whole window. Geometry is in logical pixels; `scale` maps to the frame.
pub fn paint(frame: &mut Frame, model: &AppModel, scale: f32) {
    let geometry = model.geometry();
    let theme = &model.theme;

    frame.clear(theme.main_background.to_argb_u32());

    paint_sidebar(frame, model, &geometry, scale);
    paint_handle(frame, model, &geometry, scale);
    paint_main(frame, model, &geometry, scale);
}

fn paint_sidebar(frame: &mut Frame, model: &AppModel, geometry: &LayoutGeometry, scale: f32) {
    let theme = &model.theme;
    let sidebar = scaled(geometry.sidebar, scale);

    frame.fill_rect(sidebar, theme.sidebar_background.to_argb_u32());
    frame.draw_vline(
        sidebar.right() - 1.0,
        sidebar.y,
        sidebar.bottom(),
        theme.sidebar_border.to_argb_u32(),
    );

    frame.set_clip(sidebar);
    let active = model.active_outline_index();
    for index in 0..model.outline.len() {
        let row = geometry.outline_row(index);
        if row.y > geometry.sidebar.bottom() {
            break;
        }
        let bar = Rect::new(
            row.x + OUTLINE_ROW_INSET,
            row.y + OUTLINE_ROW_INSET,
            (row.width - 2.0 * OUTLINE_ROW_INSET).max(0.0),
            row.height - 2.0 * OUTLINE_ROW_INSET,
        );
        let color = if active == Some(index) {
            theme.outline_row_active
        } else {
            theme.outline_row
        };
        frame.fill_rect(scaled(bar, scale), color.to_argb_u32());
    }
    frame.clear_clip();
}

fn paint_handle(frame: &mut Frame, model: &AppModel, geometry: &LayoutGeometry, scale: f32) {
    let theme = &model.theme;
    let highlighted = model.sidebar.is_resizing()
        || matches!(
            model.ui.hover,
            Some(HitTarget::ResizeHandle | HitTarget::FoldButton)
        );
    let color = if highlighted {
        theme.handle_active
    } else {
        theme.handle
    };
    frame.fill_rect(scaled(geometry.handle, scale), color.to_argb_u32());

    // Left/right arrows glyph
    let button = geometry.fold_button;
    let icon = theme.fold_icon.to_argb_u32();
    let upper = button.y + button.height / 3.0;
    let lower = button.y + 2.0 * button.height / 3.0;
    frame.draw_hline(button.x * scale, button.right() * scale, upper * scale, icon);
    frame.draw_hline(button.x * scale, button.right() * scale, lower * scale, icon);
    frame.fill_rect(
        scaled(Rect::new(button.right() - 3.0, upper - 2.0, 1.0, 5.0), scale),
        icon,
    );
    frame.fill_rect(
        scaled(Rect::new(button.x + 2.0, lower - 2.0, 1.0, 5.0), scale),
        icon,
    );
}

fn paint_main(frame: &mut Frame, model: &AppModel, geometry: &LayoutGeometry, scale: f32) {
    let theme = &model.theme;
    let content = geometry.main_content;
    if content.width <= 0.0 {
        return;
    }

    frame.set_clip(scaled(geometry.main, scale));
    let color = theme.content_block.to_argb_u32();
    let top = content.y - model.main_scroll.offset;

    // Only blocks intersecting the window
    let first = ((geometry.main.y - top) / CONTENT_BLOCK_PITCH).floor().max(0.0) as usize;
    let count = (content.height / CONTENT_BLOCK_PITCH) as usize;
    for index in first..count {
        let y = top + index as f32 * CONTENT_BLOCK_PITCH;
        if y > geometry.main.bottom() {
            break;
        }
        // Vary line lengths so scrolling is visible
        let fraction = [1.0, 0.85, 0.6, 0.92, 0.4][index % 5];
        let block = Rect::new(content.x, y, content.width * fraction, CONTENT_BLOCK_HEIGHT);
        frame.blend_rect(scaled(block, scale), color);
    }
    frame.clear_clip();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::model::OutlineEntry;

    fn render(model: &AppModel) -> Vec<u32> {
        let (w, h) = (model.window_size.0 as usize, model.window_size.1 as usize);
        let mut buffer = vec![0u32; w * h];
        let mut frame = Frame::new(&mut buffer, w, h);
        paint(&mut frame, model, 1.0);
        buffer
    }

    #[test]
    fn test_sidebar_background_tracks_width() {
        let mut model = AppModel::new(800, 200, LayoutConfig::default(), vec![], "/");
        let sidebar_bg = model.theme.sidebar_background.to_argb_u32();
        let main_bg = model.theme.main_background.to_argb_u32();

        let pixels = render(&model);
        assert_eq!(pixels[10 * 800 + 250], sidebar_bg);

        model.sidebar.toggle_fold();
        model.relayout();
        let pixels = render(&model);
        assert_eq!(pixels[10 * 800 + 250], main_bg);
    }

    #[test]
    fn test_active_outline_row_highlighted() {
        let outline = OutlineEntry::from_routes(["/a", "/b"]);
        let model = AppModel::new(800, 200, LayoutConfig::default(), outline, "/b");
        let active = model.theme.outline_row_active.to_argb_u32();

        let row = model.geometry().outline_row(1);
        let (x, y) = ((row.x + 20.0) as usize, (row.y + 14.0) as usize);
        assert_eq!(render(&model)[y * 800 + x], active);
    }
}
