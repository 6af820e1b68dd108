//! UI modules for the TUI.
//!
//! - `action_sheet`: the bottom action sheet component
//! - `overlay`: bottom-anchored popup primitive the sheet renders into
//! - `icon`: symbolic icon names to glyphs
//! - `widgets`: shared widgets (loading indicator)
//! - `theme`: `ThemeExt` style helpers over `sheet_config::Theme`

pub mod action_sheet;
pub mod icon;
pub mod overlay;
pub mod theme;
pub mod widgets;
