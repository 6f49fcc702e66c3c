use landing_core::view::Tone;
use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg_deep: Color,
    pub bg_panel: Color,

    // Foreground colors
    pub text_main: Color,
    pub text_muted: Color,

    // Palette colors
    pub accent: Color,
    pub border: Color,
    pub warm: Color,
    /// Core of the hero background gradient
    pub glow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::ember()
    }
}

impl Theme {
    /// Colour of a view tone; text runs and fills share the palette
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Main => self.text_main,
            Tone::Muted => self.text_muted,
            Tone::Accent => self.accent,
            Tone::Warm => self.warm,
            Tone::Inverse => self.bg_deep,
            Tone::Panel => self.bg_panel,
        }
    }
}

/// Linear mix from `from` (t = 0) to `to` (t = 1).
///
/// Only RGB colours blend; anything else snaps at the halfway point.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_blend_non_rgb_snaps() {
        assert_eq!(blend(Color::Red, Color::Blue, 0.2), Color::Red);
        assert_eq!(blend(Color::Red, Color::Blue, 0.8), Color::Blue);
    }

    #[test]
    fn test_inverse_tone_is_dark_on_light() {
        let theme = Theme::default();
        assert_eq!(theme.tone(Tone::Inverse), theme.bg_deep);
        assert_eq!(theme.tone(Tone::Main), theme.text_main);
    }
}
