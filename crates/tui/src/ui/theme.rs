//! TUI-specific theme helpers and style builders.
//!
//! This module extends `sheet_config::Theme` with helpers for building
//! ratatui `Style` objects consistently across the sheet and the demo app.

use ratatui::style::{Modifier, Style};
use sheet_config::Theme;

/// Spinner characters for the animated loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
///
/// # Example
///
/// ```
/// use sheet_tui::ui::theme::spinner_char;
///
/// assert_eq!(spinner_char(0), spinner_char(8));
/// ```
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Base text style.
    fn text(&self) -> Style;
    /// Dimmed text style (descriptions, subnames).
    fn text_dim(&self) -> Style;
    /// Sheet title style (title color + bold).
    fn title(&self) -> Style;
    fn border(&self) -> Style;
    /// Focused row or button.
    fn highlight(&self) -> Style;
    fn disabled(&self) -> Style;
    /// Backdrop painted over the area behind the sheet.
    fn overlay(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn overlay(&self) -> Style {
        Style::default().bg(self.overlay).fg(self.text_dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_config::ColorTheme;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_char(0), '⠋');
        assert_eq!(spinner_char(7), '⠧');
        assert_eq!(spinner_char(8), '⠋');
        assert_eq!(spinner_char(255), SPINNER_CHARS[255 % 8]);
    }

    #[test]
    fn test_theme_ext_title() {
        let theme = Theme::from_color_theme(ColorTheme::Default);
        let style = theme.title();
        assert_eq!(style.fg, Some(theme.title));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_theme_ext_highlight() {
        let theme = Theme::from_color_theme(ColorTheme::Dark);
        let style = theme.highlight();
        assert_eq!(style.fg, Some(theme.highlight_fg));
        assert_eq!(style.bg, Some(theme.highlight_bg));
    }

    #[test]
    fn test_theme_ext_overlay_uses_backdrop_color() {
        for variant in ColorTheme::all() {
            let theme = Theme::from_color_theme(variant);
            assert_eq!(theme.overlay().bg, Some(theme.overlay));
        }
    }
}
