//! Phosphor: green-on-black terminal look

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg_deep: Color::Rgb(0x02, 0x06, 0x03),
        bg_panel: Color::Rgb(0x07, 0x12, 0x09),
        text_main: Color::Rgb(0xb8, 0xf5, 0xc4),
        text_muted: Color::Rgb(0x4e, 0x8a, 0x5c),
        accent: Color::Rgb(0x39, 0xff, 0x7a),
        border: Color::Rgb(0x16, 0x33, 0x1d),
        warm: Color::Rgb(0xc6, 0xe3, 0x6b),
        glow: Color::Rgb(0x0c, 0x24, 0x12),
    }
}
