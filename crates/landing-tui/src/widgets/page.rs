use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
};
use unicode_width::UnicodeWidthChar;

use crate::layout::{Clip, Layout, Paint};
use crate::theme::{blend, Theme};

/// Main content column
pub struct PageWidget;

impl PageWidget {
    pub fn render(buf: &mut Buffer, area: Rect, layout: &Layout, scroll: u16, theme: &Theme) {
        paint_layout(buf, area, layout, scroll, theme);
    }
}

/// Screen cell for a page cell, if it is inside `area` and the clip window
fn screen_cell(area: Rect, scroll: u16, clip: Option<Clip>, col: i32, row: i32) -> Option<(u16, u16)> {
    if let Some(clip) = clip {
        if !clip.allows(col) {
            return None;
        }
    }
    let x = area.x as i32 + col;
    let y = area.y as i32 + row - scroll as i32;
    let inside = x >= area.left() as i32
        && x < area.right() as i32
        && y >= area.top() as i32
        && y < area.bottom() as i32;
    inside.then_some((x as u16, y as u16))
}

/// Hover tints toward the accent; pressing sinks toward the page background
fn emphasize(color: Color, paint: Paint, theme: &Theme) -> Color {
    if paint.emphasis > 0.0 {
        blend(color, theme.accent, paint.emphasis)
    } else if paint.emphasis < 0.0 {
        blend(color, theme.bg_deep, -paint.emphasis * 0.3)
    } else {
        color
    }
}

/// Draw a laid-out page into `area`, with page row `scroll` at the top.
///
/// Colours are blended against whatever is already in the buffer, so the
/// background must be drawn first.
pub fn paint_layout(buf: &mut Buffer, area: Rect, layout: &Layout, scroll: u16, theme: &Theme) {
    for fill in &layout.fills {
        let region = fill.region;
        let target = emphasize(theme.tone(fill.tone), fill.paint, theme);
        for row in region.y..region.bottom() {
            for col in region.x..region.right() {
                let Some(pos) = screen_cell(area, scroll, fill.clip, col, row) else {
                    continue;
                };
                let Some(cell) = buf.cell_mut(pos) else {
                    continue;
                };
                let under = cell.bg;
                let bg = blend(under, target, fill.paint.opacity);
                cell.set_bg(bg);
                if fill.image.is_some() {
                    // Halftone stand-in for a photo
                    let shade = if (col + row) % 2 == 0 { "░" } else { " " };
                    cell.set_symbol(shade);
                    cell.set_fg(blend(bg, theme.border, fill.paint.opacity));
                }
            }
        }

        if let Some(alt) = fill.image.as_deref().filter(|alt| !alt.is_empty()) {
            let label = format!("[ {} ]", alt);
            let label_w = label.chars().count() as i32;
            let col0 = region.x + (region.width as i32 - label_w).max(0) / 2;
            let row = region.y + region.height as i32 / 2;
            for (i, ch) in label.chars().enumerate() {
                if let Some(cell) = screen_cell(area, scroll, fill.clip, col0 + i as i32, row)
                    .and_then(|pos| buf.cell_mut(pos))
                {
                    let fg = blend(cell.bg, theme.text_muted, fill.paint.opacity);
                    cell.set_char(ch).set_fg(fg);
                }
            }
        }
    }

    for rule in &layout.rules {
        for col in rule.x..rule.x + rule.width as i32 {
            if let Some(cell) = screen_cell(area, scroll, rule.clip, col, rule.y)
                .and_then(|pos| buf.cell_mut(pos))
            {
                let fg = blend(cell.bg, theme.border, rule.paint.opacity);
                cell.set_symbol("─").set_fg(fg);
            }
        }
    }

    for run in &layout.runs {
        if run.paint.opacity <= 0.0 {
            continue;
        }
        let color = theme.tone(run.tone);
        let mut col = run.x;
        for ch in run.text.chars() {
            let width = ch.width().unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            if let Some(cell) = screen_cell(area, scroll, run.clip, col, run.y)
                .and_then(|pos| buf.cell_mut(pos))
            {
                let fg = blend(cell.bg, color, run.paint.opacity);
                cell.set_char(ch).set_fg(fg);
                if run.bold {
                    cell.modifier.insert(Modifier::BOLD);
                }
            }
            col += width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Fill, Region, TextRun};
    use landing_core::view::Tone;

    fn theme() -> Theme {
        Theme {
            bg_deep: Color::Rgb(0, 0, 0),
            text_main: Color::Rgb(200, 200, 200),
            ..Theme::default()
        }
    }

    fn run(x: i32, y: i32, text: &str, opacity: f64) -> TextRun {
        TextRun {
            x,
            y,
            text: text.to_string(),
            tone: Tone::Main,
            bold: false,
            paint: Paint {
                opacity,
                emphasis: 0.0,
            },
            clip: None,
        }
    }

    fn blank(area: Rect, theme: &Theme) -> Buffer {
        let mut buf = Buffer::empty(area);
        buf.set_style(area, ratatui::style::Style::default().bg(theme.bg_deep));
        buf
    }

    #[test]
    fn test_scroll_moves_rows_up() {
        let theme = theme();
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = blank(area, &theme);
        let layout = Layout {
            runs: vec![run(0, 5, "hello", 1.0)],
            ..Layout::default()
        };
        paint_layout(&mut buf, area, &layout, 4, &theme);
        assert_eq!(buf[(0, 1)].symbol(), "h");
        assert_eq!(buf[(0, 1)].fg, Color::Rgb(200, 200, 200));
    }

    #[test]
    fn test_opacity_blends_toward_background() {
        let theme = theme();
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = blank(area, &theme);
        let layout = Layout {
            runs: vec![run(0, 0, "a", 0.5), run(2, 0, "b", 0.0)],
            ..Layout::default()
        };
        paint_layout(&mut buf, area, &layout, 0, &theme);
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(100, 100, 100));
        assert_eq!(buf[(2, 0)].symbol(), " ");
    }

    #[test]
    fn test_clip_hides_overflow() {
        let theme = theme();
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = blank(area, &theme);
        let mut clipped = run(-2, 0, "abcdef", 1.0);
        clipped.clip = Some(Clip { left: 0, right: 3 });
        let layout = Layout {
            runs: vec![clipped],
            ..Layout::default()
        };
        paint_layout(&mut buf, area, &layout, 0, &theme);
        assert_eq!(buf[(0, 0)].symbol(), "c");
        assert_eq!(buf[(2, 0)].symbol(), "e");
        assert_eq!(buf[(3, 0)].symbol(), " ");
    }

    #[test]
    fn test_hovered_fill_turns_accent() {
        let theme = theme();
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = blank(area, &theme);
        let layout = Layout {
            fills: vec![Fill {
                region: Region::new(0, 0, 4, 1),
                tone: Tone::Main,
                paint: Paint {
                    opacity: 1.0,
                    emphasis: 1.0,
                },
                clip: None,
                image: None,
            }],
            ..Layout::default()
        };
        paint_layout(&mut buf, area, &layout, 0, &theme);
        assert_eq!(buf[(1, 0)].bg, theme.accent);
    }

    #[test]
    fn test_fill_and_text_share_tone_colour() {
        let theme = theme();
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = blank(area, &theme);
        let mut label = run(0, 1, "ok", 1.0);
        label.tone = Tone::Warm;
        let layout = Layout {
            fills: vec![Fill {
                region: Region::new(0, 0, 4, 1),
                tone: Tone::Warm,
                paint: Paint::default(),
                clip: None,
                image: None,
            }],
            runs: vec![label],
            ..Layout::default()
        };
        paint_layout(&mut buf, area, &layout, 0, &theme);
        assert_eq!(buf[(0, 0)].bg, theme.warm);
        assert_eq!(buf[(0, 1)].fg, theme.warm);
        assert_eq!(buf[(0, 0)].bg, buf[(0, 1)].fg);
    }
}
