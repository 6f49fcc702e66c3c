use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::motion::EasingType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Animation parameters shared by every motion component on the page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Suppress positional animation, keep opacity transitions
    #[serde(default)]
    pub reduced_motion: bool,
    /// Reveal fade/slide duration in milliseconds
    #[serde(default = "default_reveal_duration")]
    pub reveal_duration_ms: u64,
    /// Vertical distance a reveal slides in from, in px
    #[serde(default = "default_reveal_offset")]
    pub reveal_offset_px: f64,
    /// Viewport margin for reveal intersection (negative shrinks the viewport)
    #[serde(default = "default_reveal_margin")]
    pub reveal_margin_px: f64,
    /// Reveal easing curve
    #[serde(default = "default_reveal_easing")]
    pub reveal_easing: EasingType,
    /// Seconds for one full marquee cycle
    #[serde(default = "default_marquee_speed")]
    pub marquee_speed_secs: f64,
    /// Hover/press return duration in milliseconds
    #[serde(default = "default_hover_duration")]
    pub hover_duration_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            reveal_duration_ms: default_reveal_duration(),
            reveal_offset_px: default_reveal_offset(),
            reveal_margin_px: default_reveal_margin(),
            reveal_easing: default_reveal_easing(),
            marquee_speed_secs: default_marquee_speed(),
            hover_duration_ms: default_hover_duration(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Height of one terminal row in page px
    #[serde(default = "default_px_per_row")]
    pub px_per_row: f64,
    /// Width of the navigation rail in columns
    #[serde(default = "default_rail_width")]
    pub rail_width: u16,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Page scroll behaviour
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            px_per_row: default_px_per_row(),
            rail_width: default_rail_width(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Smooth scrolling configuration for the page body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default = "default_scroll_easing")]
    pub easing: EasingType,
    /// Lines per scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: default_scroll_easing(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "ember", "phosphor")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides, each a hex string ("#ff5f1f" or "ff5f1f")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg_deep: Option<String>,
    /// Ticker / panel background
    pub bg_panel: Option<String>,
    /// Primary text
    pub text_main: Option<String>,
    /// Secondary text
    pub text_muted: Option<String>,
    /// Accent (pulse dot, tags, hover)
    pub accent: Option<String>,
    /// Hairline borders
    pub border: Option<String>,
    /// Stat values
    pub warm: Option<String>,
    /// Parallax gradient core
    pub glow: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-d>" (Ctrl+d), "<S-g>" (Shift+g), "gg", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("landing")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_reveal_duration() -> u64 {
    600
}

fn default_reveal_offset() -> f64 {
    20.0
}

fn default_reveal_margin() -> f64 {
    -50.0
}

fn default_reveal_easing() -> EasingType {
    EasingType::CubicBezier {
        x1: 0.23,
        y1: 1.0,
        x2: 0.32,
        y2: 1.0,
    }
}

fn default_marquee_speed() -> f64 {
    20.0
}

fn default_hover_duration() -> u64 {
    200
}

fn default_tick_rate() -> u64 {
    100
}

fn default_px_per_row() -> f64 {
    16.0
}

fn default_rail_width() -> u16 {
    28
}

fn default_theme_name() -> String {
    "ember".to_string()
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_easing() -> EasingType {
    EasingType::Cubic
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u16 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = Self::from_toml(&content)?;
            tracing::info!(path = %path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/landing/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("landing")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("landing.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert!(!config.motion.reduced_motion);
        assert_eq!(config.motion.reveal_duration_ms, 600);
        assert_eq!(config.motion.reveal_offset_px, 20.0);
        assert_eq!(config.motion.reveal_margin_px, -50.0);
        assert_eq!(config.motion.marquee_speed_secs, 20.0);
        assert_eq!(config.ui.theme.name, "ember");
        assert_eq!(config.ui.scroll.animation_fps, 60);
        assert_eq!(config.keymap.jump_to_top, "gg");
    }

    #[test]
    fn test_theme_as_string() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"phosphor\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "phosphor");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_table() {
        let text = r##"
[ui.theme]
name = "ember"
colors = { accent = "#00ff00" }
"##;
        let config = AppConfig::from_toml(text).unwrap();
        assert_eq!(config.ui.theme.name, "ember");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#00ff00"));
    }

    #[test]
    fn test_motion_overrides() {
        let text = r#"
[motion]
reduced_motion = true
reveal_easing = "linear"
marquee_speed_secs = 10.0
"#;
        let config = AppConfig::from_toml(text).unwrap();
        assert!(config.motion.reduced_motion);
        assert_eq!(config.motion.reveal_easing, EasingType::Linear);
        assert_eq!(config.motion.marquee_speed_secs, 10.0);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let err = AppConfig::from_toml("[motion]\nreveal_duration_ms = \"slow\"\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_unreadable_config_is_io_error() {
        // A directory exists but cannot be read as a file
        let err = AppConfig::load_from(&std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_missing_config_yields_defaults() {
        let path = std::env::temp_dir().join("landing-no-such-dir").join("config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.motion.marquee_speed_secs, 20.0);
    }

    #[test]
    fn test_toml_roundtrip_keeps_bezier() {
        let text = AppConfig::default().to_toml().unwrap();
        let back = AppConfig::from_toml(&text).unwrap();
        assert_eq!(back.motion.reveal_easing, default_reveal_easing());
    }
}
