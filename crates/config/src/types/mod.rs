//! Configuration type definitions for the action sheet.
//!
//! Responsibilities:
//! - Define the color theme types and the sheet defaults.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.

mod sheet;
mod theme;

pub use sheet::SheetDefaults;
pub use theme::{ColorTheme, Theme};
