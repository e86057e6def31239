//! Theme palettes resolved once at startup from the config file.
//! The rest of the UI only sees the resolved `Theme`.

use ratatui::style::Color;

use crate::config::{AppConfig, ThemeSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Mode::Dark),
            "light" => Some(Mode::Light),
            _ => None,
        }
    }
}

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    #[allow(dead_code)]
    pub mode: Mode, // Resolved mode, kept for status display later

    pub accent: Color,      // Active borders, brand icon
    pub text: Color,        // Primary text
    pub text_dim: Color,    // Placeholder, hints, empty states
    pub inactive: Color,    // Inactive borders
    pub bg_selected: Color, // Sidebar selection background
    pub header: Color,      // Brand text
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Resolve the theme from config, falling back to the dark palette.
    pub fn load() -> Self {
        let config = AppConfig::load().unwrap_or_default();
        Self::from_settings(&config.theme)
    }

    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mode = Mode::from_name(&settings.mode).unwrap_or_else(|| {
            tracing::warn!("Unknown theme mode '{}', using dark", settings.mode);
            Mode::Dark
        });

        let mut theme = match mode {
            Mode::Dark => Self::dark(),
            Mode::Light => Self::light(),
        };

        if let Some(accent) = settings.accent.as_deref() {
            match parse_hex_color(accent) {
                Some(color) => theme.accent = color,
                None => tracing::warn!("Invalid accent color '{}', keeping palette accent", accent),
            }
        }

        theme
    }

    /// Catppuccin-inspired dark palette
    fn dark() -> Self {
        Self {
            mode: Mode::Dark,
            accent: Color::Rgb(250, 179, 135),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            inactive: Color::Rgb(88, 91, 112),
            bg_selected: Color::Rgb(69, 71, 90),
            header: Color::Rgb(243, 139, 168),
        }
    }

    /// Latte-inspired light palette
    fn light() -> Self {
        Self {
            mode: Mode::Light,
            accent: Color::Rgb(223, 142, 29),
            text: Color::Rgb(76, 79, 105),
            text_dim: Color::Rgb(140, 143, 161),
            inactive: Color::Rgb(172, 176, 190),
            bg_selected: Color::Rgb(204, 208, 218),
            header: Color::Rgb(210, 15, 57),
        }
    }
}

/// Parse a hex color string (#RRGGBB or #RGB)
fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim().trim_start_matches('#');

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex_color("#FFC107"), Some(Color::Rgb(255, 193, 7)));
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_hex_color("not-a-color"), None);
        assert_eq!(parse_hex_color("#12345"), None);
    }

    #[test]
    fn mode_names_are_case_insensitive() {
        assert_eq!(Mode::from_name("Light"), Some(Mode::Light));
        assert_eq!(Mode::from_name("DARK"), Some(Mode::Dark));
        assert_eq!(Mode::from_name("solarized"), None);
    }

    #[test]
    fn unknown_mode_falls_back_to_dark() {
        let theme = Theme::from_settings(&ThemeSettings {
            mode: "solarized".to_string(),
            accent: None,
        });

        assert_eq!(theme.mode, Mode::Dark);
    }

    #[test]
    fn accent_override_applies_on_top_of_the_palette() {
        let theme = Theme::from_settings(&ThemeSettings {
            mode: "light".to_string(),
            accent: Some("#FFC107".to_string()),
        });

        assert_eq!(theme.mode, Mode::Light);
        assert_eq!(theme.accent, Color::Rgb(255, 193, 7));
    }
}
