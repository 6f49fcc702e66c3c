//! Ember: near-black panels, warm orange accent

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg_deep: Color::Rgb(0x05, 0x05, 0x05),
        bg_panel: Color::Rgb(0x0f, 0x0f, 0x0f),
        text_main: Color::Rgb(0xea, 0xea, 0xea),
        text_muted: Color::Rgb(0x88, 0x88, 0x88),
        accent: Color::Rgb(0xff, 0x5f, 0x1f),
        border: Color::Rgb(0x2a, 0x2a, 0x2a),
        warm: Color::Rgb(0xdc, 0xa7, 0x86),
        glow: Color::Rgb(0x1a, 0x1a, 0x1a),
    }
}
