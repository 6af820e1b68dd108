//! Runtime components for the TUI binary.
//!
//! - `terminal`: raw mode, alternate screen, and mouse capture with a restoring guard
//! - `logging`: file-based tracing setup
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `sheet_tui::app` and `sheet_tui::ui`).

pub mod logging;
pub mod terminal;
