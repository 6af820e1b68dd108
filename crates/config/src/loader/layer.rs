//! Partial configuration layers.
//!
//! A layer holds only the values one source actually provided. Layers are
//! merged over `SheetDefaults::default()` in precedence order at build time,
//! so the order in which sources are read never changes the outcome.

use serde::Deserialize;

use crate::types::{ColorTheme, SheetDefaults};

/// Values supplied by a single configuration source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SheetLayer {
    pub round: Option<bool>,
    pub closeable: Option<bool>,
    pub close_icon: Option<String>,
    pub safe_area_inset_bottom: Option<bool>,
    pub close_on_popstate: Option<bool>,
    pub close_on_click_action: Option<bool>,
    pub close_on_click_overlay: Option<bool>,
    pub overlay: Option<bool>,
    pub theme: Option<ColorTheme>,
}

impl SheetLayer {
    /// Overwrite every field of `target` this layer provides.
    pub fn apply_to(&self, target: &mut SheetDefaults) {
        if let Some(v) = self.round {
            target.round = v;
        }
        if let Some(v) = self.closeable {
            target.closeable = v;
        }
        if let Some(v) = &self.close_icon {
            target.close_icon = v.clone();
        }
        if let Some(v) = self.safe_area_inset_bottom {
            target.safe_area_inset_bottom = v;
        }
        if let Some(v) = self.close_on_popstate {
            target.close_on_popstate = v;
        }
        if let Some(v) = self.close_on_click_action {
            target.close_on_click_action = v;
        }
        if let Some(v) = self.close_on_click_overlay {
            target.close_on_click_overlay = v;
        }
        if let Some(v) = self.overlay {
            target.overlay = v;
        }
        if let Some(v) = self.theme {
            target.theme = v;
        }
    }
}
