use landing_core::page::RadialGradient;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::layout::Region;
use crate::theme::{blend, Theme};

/// Page background with the hero's radial glow
pub struct BackgroundWidget;

impl BackgroundWidget {
    /// Fill `area` with the deep background, then glow the visible part of
    /// `hero` (page rows, shifted up by `scroll`).
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        hero: Option<Region>,
        gradient: &RadialGradient,
        scroll: u16,
        theme: &Theme,
    ) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(theme.bg_deep);
                }
            }
        }

        let Some(hero) = hero else {
            return;
        };
        // Cells are twice as tall as wide; measure the gradient in half-rows
        let (w, h) = (hero.width as f64, hero.height as f64 * 2.0);
        for row in hero.y..hero.bottom() {
            let screen_y = area.y as i32 + row - scroll as i32;
            if screen_y < area.top() as i32 || screen_y >= area.bottom() as i32 {
                continue;
            }
            for col in hero.x..hero.right() {
                let screen_x = area.x as i32 + col;
                if screen_x < area.left() as i32 || screen_x >= area.right() as i32 {
                    continue;
                }
                let px = (col - hero.x) as f64 + 0.5;
                let py = ((row - hero.y) as f64 + 0.5) * 2.0;
                let t = gradient.intensity_at(px, py, w, h);
                if let Some(cell) = buf.cell_mut((screen_x as u16, screen_y as u16)) {
                    cell.set_bg(blend(theme.bg_deep, theme.glow, t));
                }
            }
        }
    }
}
