//! Configuration management for the action sheet TUI.
//!
//! This crate provides the theme palette, the sheet defaults, and a loader
//! that merges them from a config file, environment variables, and `.env`.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, ENV_CLOSE_ICON, ENV_CLOSE_ON_CLICK_ACTION,
    ENV_CLOSE_ON_CLICK_OVERLAY, ENV_CLOSE_ON_POPSTATE, ENV_CLOSEABLE, ENV_OVERLAY, ENV_ROUND,
    ENV_SAFE_AREA_INSET_BOTTOM, ENV_THEME, SheetLayer, default_config_path, env_var_or_none,
};
pub use types::{ColorTheme, SheetDefaults, Theme};
