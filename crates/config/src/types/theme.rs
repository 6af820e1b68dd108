//! Theme types for the action sheet.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//! - Loading the selected theme from env or file (see `loader`).
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable - always persist `ColorTheme`.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Every theme, in cycle order.
    pub fn all() -> [ColorTheme; 5] {
        [
            Self::Default,
            Self::Light,
            Self::Dark,
            Self::HighContrast,
            Self::Monochrome,
        ]
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    /// Parse the snake_case identifier used in config files and `SHEET_THEME`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "high_contrast" => Ok(Self::HighContrast),
            "monochrome" => Ok(Self::Monochrome),
            other => Err(format!(
                "unknown theme '{other}' (expected default, light, dark, high_contrast, monochrome)"
            )),
        }
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Persist `ColorTheme` and expand on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub disabled: Color,

    // Backdrop painted behind the sheet when the overlay is enabled
    pub overlay: Color,
}

impl Theme {
    /// Expand a persisted `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,

                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,

                disabled: Color::DarkGray,

                overlay: Color::Indexed(234),
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,

                disabled: Color::Gray,

                overlay: Color::Indexed(250),
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(110), // soft blue/cyan
                title: Color::Indexed(110),

                highlight_fg: Color::White,
                highlight_bg: Color::Indexed(236),

                disabled: Color::DarkGray,

                overlay: Color::Indexed(233),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::White,

                highlight_fg: Color::White,
                highlight_bg: Color::Blue,

                disabled: Color::Gray,

                overlay: Color::Black,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Indexed(245),
                border: Color::Indexed(250),
                title: Color::White,
                highlight_fg: Color::Black,
                highlight_bg: Color::White,
                disabled: Color::Indexed(238),
                overlay: Color::Indexed(233),
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_theme_default_is_default() {
        assert_eq!(ColorTheme::default(), ColorTheme::Default);
        assert_eq!(Theme::default(), Theme::from_color_theme(ColorTheme::Default));
    }

    #[test]
    fn test_color_theme_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ColorTheme::HighContrast).unwrap(),
            "\"high_contrast\""
        );
        assert_eq!(
            serde_json::from_str::<ColorTheme>("\"monochrome\"").unwrap(),
            ColorTheme::Monochrome
        );
    }

    #[test]
    fn test_color_theme_from_str_accepts_kebab_and_case() {
        assert_eq!("High-Contrast".parse::<ColorTheme>(), Ok(ColorTheme::HighContrast));
        assert_eq!(" dark ".parse::<ColorTheme>(), Ok(ColorTheme::Dark));
        assert!("neon".parse::<ColorTheme>().is_err());
    }

    #[test]
    fn test_color_theme_display() {
        assert_eq!(format!("{}", ColorTheme::Default), "Default");
        assert_eq!(format!("{}", ColorTheme::HighContrast), "High Contrast");
    }

    #[test]
    fn test_all_themes_convertible() {
        for theme in ColorTheme::all() {
            let runtime_theme = Theme::from_color_theme(theme);
            assert_ne!(runtime_theme.text, runtime_theme.disabled);
            assert_ne!(runtime_theme.highlight_fg, runtime_theme.highlight_bg);
        }
    }
}
