//! Sheet configuration supplied by the caller on every render.
//!
//! Responsibilities:
//! - Define `ActionSheetProps` (title, actions, cancel text, description, toggles).
//! - Define `OverlayProps`, the enumerated subset of overlay configuration forwarded to
//!   the popup primitive.
//! - Answer the "is this part present" questions composition and dispatch share.
//!
//! Invariants:
//! - Defaults: `round`, `closeable`, `safe_area_inset_bottom` true; `close_icon` is "cross";
//!   `close_on_popstate` and `close_on_click_action` false.
//! - Text fields count as absent when empty.

use ratatui::style::Style;
use sheet_config::SheetDefaults;
use sheet_config::constants::DEFAULT_CLOSE_ICON;

use super::action::ActionSheetAction;

/// Overlay primitive configuration forwarded by the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayProps {
    /// Dim the region behind the sheet.
    pub overlay: bool,
    /// A click outside the sheet requests `UpdateShow(false)`.
    pub close_on_click_overlay: bool,
    /// Style painted over the backdrop; the theme's overlay color when `None`.
    pub overlay_style: Option<Style>,
}

impl Default for OverlayProps {
    fn default() -> Self {
        Self {
            overlay: true,
            close_on_click_overlay: true,
            overlay_style: None,
        }
    }
}

/// Action sheet configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSheetProps {
    /// Visibility, owned by the caller.
    pub show: bool,
    pub title: Option<String>,
    pub actions: Vec<ActionSheetAction>,
    pub cancel_text: Option<String>,
    pub description: Option<String>,
    pub close_on_popstate: bool,
    pub close_on_click_action: bool,
    pub round: bool,
    pub closeable: bool,
    pub close_icon: String,
    pub safe_area_inset_bottom: bool,
    pub overlay: OverlayProps,
}

impl Default for ActionSheetProps {
    fn default() -> Self {
        Self {
            show: false,
            title: None,
            actions: Vec::new(),
            cancel_text: None,
            description: None,
            close_on_popstate: false,
            close_on_click_action: false,
            round: true,
            closeable: true,
            close_icon: DEFAULT_CLOSE_ICON.to_string(),
            safe_area_inset_bottom: true,
            overlay: OverlayProps::default(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl ActionSheetProps {
    /// Start from loaded defaults.
    pub fn from_defaults(defaults: &SheetDefaults) -> Self {
        Self {
            close_on_popstate: defaults.close_on_popstate,
            close_on_click_action: defaults.close_on_click_action,
            round: defaults.round,
            closeable: defaults.closeable,
            close_icon: defaults.close_icon.clone(),
            safe_area_inset_bottom: defaults.safe_area_inset_bottom,
            overlay: OverlayProps {
                overlay: defaults.overlay,
                close_on_click_overlay: defaults.close_on_click_overlay,
                overlay_style: None,
            },
            ..Self::default()
        }
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn actions(mut self, actions: Vec<ActionSheetAction>) -> Self {
        self.actions = actions;
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn close_on_popstate(mut self, value: bool) -> Self {
        self.close_on_popstate = value;
        self
    }

    pub fn close_on_click_action(mut self, value: bool) -> Self {
        self.close_on_click_action = value;
        self
    }

    pub fn round(mut self, value: bool) -> Self {
        self.round = value;
        self
    }

    pub fn closeable(mut self, value: bool) -> Self {
        self.closeable = value;
        self
    }

    pub fn close_icon(mut self, name: impl Into<String>) -> Self {
        self.close_icon = name.into();
        self
    }

    pub fn safe_area_inset_bottom(mut self, value: bool) -> Self {
        self.safe_area_inset_bottom = value;
        self
    }

    pub fn overlay(mut self, overlay: OverlayProps) -> Self {
        self.overlay = overlay;
        self
    }

    /// Header title, present only when non-empty.
    pub fn header_title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Whether the header close icon exists (needs both a title and `closeable`).
    pub fn has_close_icon(&self) -> bool {
        self.closeable && self.header_title().is_some()
    }

    /// Cancel button label, present only when non-empty.
    pub fn cancel_label(&self) -> Option<&str> {
        non_empty(&self.cancel_text)
    }

    /// Description text, present only when non-empty.
    pub fn description_text(&self) -> Option<&str> {
        non_empty(&self.description)
    }
}
