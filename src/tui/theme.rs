use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Title and column header background
    pub header: Color,
    /// Month banner background
    pub banner: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub red: Color,
    /// Filled part of the Gantt bar
    pub bar: Color,
    /// Unfilled part of the Gantt bar
    pub bar_track: Color,
    pub match_bg: Color,
    pub match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x12, 0x14, 0x16),
            text: Color::Rgb(0xD8, 0xDC, 0xDE),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x80, 0x88, 0x8C),
            header: Color::Rgb(0x17, 0x97, 0x66),
            banner: Color::Rgb(0x33, 0x33, 0x33),
            highlight: Color::Rgb(0x44, 0xDD, 0xAA),
            selection_bg: Color::Rgb(0x1F, 0x3A, 0x30),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            bar: Color::Rgb(0x4C, 0xAF, 0x50),
            bar_track: Color::Rgb(0xE0, 0xE0, 0xE0),
            match_bg: Color::Rgb(0xFF, 0xD7, 0x00),
            match_fg: Color::Rgb(0x12, 0x14, 0x16),
        }
    }
}

/// Parse a hex color string like "#179766" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from `[ui.colors]`, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = key.as_str(), value = value.as_str(), "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "header" => theme.header = color,
                "banner" => theme.banner = color,
                "highlight" => theme.highlight = color,
                "selection_bg" => theme.selection_bg = color,
                "red" => theme.red = color,
                "bar" => theme.bar = color,
                "bar_track" => theme.bar_track = color,
                "match_bg" => theme.match_bg = color,
                "match_fg" => theme.match_fg = color,
                _ => {}
            }
        }

        theme
    }
}
