//! Action sheet defaults shared by every sheet the TUI opens.
//!
//! Responsibilities:
//! - Define `SheetDefaults`, the persisted/loaded form of the sheet's boolean toggles,
//!   close icon, and color theme.
//!
//! Does NOT handle:
//! - Per-render configuration such as title or actions (see the TUI crate's `ActionSheetProps`).
//! - Reading values from env or disk (see `loader`).
//!
//! Invariants:
//! - Every field is `#[serde(default)]`, so a partial config file is always valid.
//! - Defaults: `round`, `closeable`, `safe_area_inset_bottom`, `overlay` and
//!   `close_on_click_overlay` are true; `close_on_popstate` and `close_on_click_action` are false;
//!   `close_icon` is `"cross"`.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CLOSE_ICON;
use crate::types::ColorTheme;

fn default_true() -> bool {
    true
}

fn default_close_icon() -> String {
    DEFAULT_CLOSE_ICON.to_string()
}

/// Sheet toggles loaded from config file and environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDefaults {
    /// Rounded corners on the sheet border.
    #[serde(default = "default_true")]
    pub round: bool,
    /// Show the close icon in the header.
    #[serde(default = "default_true")]
    pub closeable: bool,
    /// Symbolic name of the header close icon.
    #[serde(default = "default_close_icon")]
    pub close_icon: String,
    /// Reserve a blank row under the sheet content.
    #[serde(default = "default_true")]
    pub safe_area_inset_bottom: bool,
    /// Dismiss on back-navigation (`Esc`).
    #[serde(default)]
    pub close_on_popstate: bool,
    /// Dismiss after any successful item click.
    #[serde(default)]
    pub close_on_click_action: bool,
    /// Dismiss when clicking outside the sheet.
    #[serde(default = "default_true")]
    pub close_on_click_overlay: bool,
    /// Dim the screen behind the sheet.
    #[serde(default = "default_true")]
    pub overlay: bool,
    /// Color theme.
    #[serde(default)]
    pub theme: ColorTheme,
}

impl Default for SheetDefaults {
    fn default() -> Self {
        Self {
            round: true,
            closeable: true,
            close_icon: default_close_icon(),
            safe_area_inset_bottom: true,
            close_on_popstate: false,
            close_on_click_action: false,
            close_on_click_overlay: true,
            overlay: true,
            theme: ColorTheme::Default,
        }
    }
}
