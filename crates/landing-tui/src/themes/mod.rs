//! Theme registry and loader
//!
//! Two built-in palettes with per-colour user overrides.

mod ember;
mod phosphor;

use landing_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

pub fn ember() -> Theme {
    ember::default()
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "ember" => ember::default(),
        "phosphor" => phosphor::default(),
        other => {
            warn!("Unknown theme '{}', falling back to ember", other);
            ember::default()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color, &str); 8] = [
        (&overrides.bg_deep, &mut theme.bg_deep, "bg_deep"),
        (&overrides.bg_panel, &mut theme.bg_panel, "bg_panel"),
        (&overrides.text_main, &mut theme.text_main, "text_main"),
        (&overrides.text_muted, &mut theme.text_muted, "text_muted"),
        (&overrides.accent, &mut theme.accent, "accent"),
        (&overrides.border, &mut theme.border, "border"),
        (&overrides.warm, &mut theme.warm, "warm"),
        (&overrides.glow, &mut theme.glow, "glow"),
    ];

    for (hex, slot, name) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Invalid colour '{}' for {}, keeping theme value", hex, name),
            }
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["ember", "phosphor"]
}
