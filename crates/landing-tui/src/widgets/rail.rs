use ratatui::{buffer::Buffer, layout::Rect};

use crate::layout::Layout;
use crate::theme::Theme;

use super::paint_layout;

/// Fixed navigation rail with a hairline on its right edge
pub struct RailWidget;

impl RailWidget {
    pub fn render(buf: &mut Buffer, area: Rect, layout: &Layout, theme: &Theme) {
        if area.width == 0 {
            return;
        }
        let inner = Rect {
            width: area.width - 1,
            ..area
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_bg(theme.bg_deep);
                }
            }
            if let Some(cell) = buf.cell_mut((area.right() - 1, y)) {
                cell.set_symbol("│").set_fg(theme.border);
            }
        }
        paint_layout(buf, inner, layout, 0, theme);
    }
}
