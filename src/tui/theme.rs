//! Terminal colors resolved from `[theme]`.
//!
//! A value that does not parse falls back to the built-in default for that
//! slot, with a warning in the log.

use std::str::FromStr;

use log::warn;
use ratatui::style::Color;

use crate::core::config::{ConfigError, ThemeColors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub card: Color,
    pub card_border: Color,
    pub accent: Color,
    pub button: Color,
    pub title_bg: Color,
    pub title_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_colors(&ThemeColors::default())
    }
}

impl Theme {
    pub fn from_colors(colors: &ThemeColors) -> Self {
        let defaults = ThemeColors::default();
        let resolve = |key: &'static str, value: &str, default: &str| {
            parse_color(key, value).unwrap_or_else(|e| {
                warn!("{e}, using {default}");
                parse_color(key, default).unwrap_or(Color::Reset)
            })
        };
        Self {
            card: resolve("card", &colors.card, &defaults.card),
            card_border: resolve("card_border", &colors.card_border, &defaults.card_border),
            accent: resolve("accent", &colors.accent, &defaults.accent),
            button: resolve("button", &colors.button, &defaults.button),
            title_bg: resolve("title_bg", &colors.title_bg, &defaults.title_bg),
            title_fg: resolve("title_fg", &colors.title_fg, &defaults.title_fg),
        }
    }
}

pub fn parse_color(key: &'static str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value.trim()).map_err(|_| ConfigError::InvalidColor {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.card, Color::Rgb(0, 0, 128));
        assert_eq!(theme.card_border, Color::Red);
        assert_eq!(theme.accent, Color::Green);
        assert_eq!(theme.button, Color::Rgb(128, 128, 128));
        assert_eq!(theme.title_fg, Color::White);
    }

    #[test]
    fn test_named_hex_and_indexed_colors() {
        assert_eq!(parse_color("card", "blue").unwrap(), Color::Blue);
        assert_eq!(parse_color("card", "#102030").unwrap(), Color::Rgb(16, 32, 48));
        assert_eq!(parse_color("card", "42").unwrap(), Color::Indexed(42));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let colors = ThemeColors {
            accent: "not-a-color".to_string(),
            ..Default::default()
        };
        let theme = Theme::from_colors(&colors);
        assert_eq!(theme.accent, Color::Green);

        let err = parse_color("accent", "not-a-color").unwrap_err();
        assert_eq!(err.to_string(), "invalid color 'not-a-color' for theme.accent");
    }
}
