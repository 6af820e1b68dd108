//! Action Sheet TUI Library
//!
//! A bottom-anchored action sheet for ratatui applications, plus the demo
//! caller used by the `sheet-tui` binary.
//!
//! # Example
//!
//! ```rust
//! use sheet_tui::ui::action_sheet::{
//!     ActionSheetAction, ActionSheetProps, SheetEvent, Trigger, dispatch,
//! };
//!
//! let props = ActionSheetProps::default()
//!     .show(true)
//!     .actions(vec![ActionSheetAction::new("Share")]);
//!
//! let mut events = Vec::new();
//! dispatch(&props, Trigger::OverlayClick, &mut events).unwrap();
//! assert_eq!(events, vec![SheetEvent::UpdateShow(false)]);
//! ```

pub mod app;
pub mod cli;
pub mod event;
pub mod runtime;
pub mod ui;

pub use app::App;
pub use ui::action_sheet::{
    ActionSheet, ActionSheetAction, ActionSheetProps, ActionSheetState, SheetError, SheetEvent,
};
