//! Centralized constants for the sheet-tui workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Sheet Defaults
// =============================================================================

/// Default symbolic name of the header close icon.
pub const DEFAULT_CLOSE_ICON: &str = "cross";

/// Maximum sheet height as a percentage of the frame height.
pub const SHEET_MAX_HEIGHT_PERCENT: u16 = 80;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for outward sheet notifications.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Default UI tick interval for the loading spinner in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 120;

// =============================================================================
// Config Files
// =============================================================================

/// Application directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "sheet-tui";

/// Config file name inside the application config dir.
pub const CONFIG_FILE_NAME: &str = "config.json";
