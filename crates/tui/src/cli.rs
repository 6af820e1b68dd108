//! Command-line argument parsing for sheet-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide the highest-precedence overrides for `ConfigLoader`.
//!
//! Does NOT handle:
//! - Environment variables or config files (handled by `sheet_config`).
//! - Terminal state management (see `runtime::terminal`).

use clap::Parser;
use sheet_config::ColorTheme;
use std::path::PathBuf;

/// Command-line arguments for sheet-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme, --close-on-popstate)
/// 2. Environment variables (e.g., SHEET_THEME, SHEET_CLOSE_ON_POPSTATE)
/// 3. Config file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "sheet-tui",
    about = "Bottom action sheet demo for the terminal",
    version,
    after_help = "Examples:\n  sheet-tui\n  sheet-tui --title Share --cancel-text Cancel\n  sheet-tui --theme high-contrast --close-on-popstate true\n  sheet-tui --title Share --close-icon close\n  sheet-tui --log-dir /tmp/sheet-logs --no-mouse\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Sheet title (empty hides the header)
    #[arg(long)]
    pub title: Option<String>,

    /// Text shown under the header
    #[arg(long)]
    pub description: Option<String>,

    /// Cancel button label (empty hides the button)
    #[arg(long)]
    pub cancel_text: Option<String>,

    /// Close the sheet after a row is selected
    #[arg(long)]
    pub close_on_click_action: Option<bool>,

    /// Close the sheet on Esc
    #[arg(long)]
    pub close_on_popstate: Option<bool>,

    /// Header close icon name (e.g. cross, close, clear)
    #[arg(long)]
    pub close_icon: Option<String>,

    /// Color theme
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ColorTheme>,
}

fn parse_theme(value: &str) -> Result<ColorTheme, String> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sheet-tui"]);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert!(!cli.no_mouse);
        assert!(cli.theme.is_none());
        assert!(cli.close_on_popstate.is_none());
    }

    #[test]
    fn test_labels() {
        let cli = Cli::parse_from([
            "sheet-tui",
            "--title",
            "Share",
            "--description",
            "Pick one",
            "--cancel-text",
            "",
        ]);
        assert_eq!(cli.title.as_deref(), Some("Share"));
        assert_eq!(cli.description.as_deref(), Some("Pick one"));
        assert_eq!(cli.cancel_text.as_deref(), Some(""));
    }

    #[test]
    fn test_boolean_overrides() {
        let cli = Cli::parse_from([
            "sheet-tui",
            "--close-on-click-action",
            "true",
            "--close-on-popstate",
            "false",
        ]);
        assert_eq!(cli.close_on_click_action, Some(true));
        assert_eq!(cli.close_on_popstate, Some(false));
    }

    #[test]
    fn test_theme_flag() {
        let cli = Cli::parse_from(["sheet-tui", "--theme", "high-contrast"]);
        assert_eq!(cli.theme, Some(ColorTheme::HighContrast));
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        assert!(Cli::try_parse_from(["sheet-tui", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_close_icon_flag() {
        let cli = Cli::parse_from(["sheet-tui", "--close-icon", "close"]);
        assert_eq!(cli.close_icon.as_deref(), Some("close"));
        assert!(Cli::parse_from(["sheet-tui"]).close_icon.is_none());
    }

    #[test]
    fn test_no_mouse_flag() {
        let cli = Cli::parse_from(["sheet-tui", "--no-mouse"]);
        assert!(cli.no_mouse);
    }
}
