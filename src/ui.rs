//! Small buffer-drawing helpers shared by the desktop renderers.
//!
//! Renderers compute rectangles that can drift outside the terminal during
//! drags and resizes; everything here clips to the provided bounds so no
//! draw call can write out of the buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Paint every cell of `rect` (clipped to the buffer) with `style`,
/// clearing the glyphs.
pub(crate) fn fill_rect(buffer: &mut Buffer, rect: Rect, style: Style) {
    let clip = rect.intersection(buffer.area);
    for y in clip.y..clip.y.saturating_add(clip.height) {
        for x in clip.x..clip.x.saturating_add(clip.width) {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_symbol(" ");
                cell.set_style(style);
            }
        }
    }
}

/// Inclusive cell containment for hit rectangles.
pub(crate) fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
