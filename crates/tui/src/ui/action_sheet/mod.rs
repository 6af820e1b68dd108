//! Bottom-anchored action sheet.
//!
//! The sheet is a pure function of its props: it renders rows for the caller's
//! action descriptors and turns clicks into outward notifications. It never
//! changes `show` itself. The caller applies `SheetEvent::UpdateShow`.
//!
//! # Module Structure
//!
//! - `action`: action descriptors (`ActionSheetAction`)
//! - `props`: configuration (`ActionSheetProps`, `OverlayProps`)
//! - `notify`: outward notifications (`SheetEvent`, `Notify`, `SheetError`)
//! - `controller`: dismiss triggers (`VisibilityController`)
//! - `evaluate`: row view-models and item click dispatch
//! - `compose`: section order and slots
//! - `hit`: hit regions, focus, and input-to-trigger mapping (`ActionSheetState`)
//! - `render`: the ratatui widget (`ActionSheet`)
//!
//! # Example
//!
//! ```rust
//! use sheet_tui::ui::action_sheet::{
//!     ActionSheetAction, ActionSheetProps, SheetEvent, Target, Trigger, dispatch,
//! };
//!
//! let props = ActionSheetProps::default()
//!     .show(true)
//!     .actions(vec![ActionSheetAction::new("Copy")]);
//!
//! let mut events = Vec::new();
//! dispatch(&props, Trigger::Activate(Target::Item(0)), &mut events).unwrap();
//! assert!(matches!(events[0], SheetEvent::Select { index: 0, .. }));
//! ```

mod action;
mod compose;
mod controller;
mod evaluate;
mod hit;
mod notify;
mod props;
mod render;

pub use action::{ActionCallback, ActionSheetAction};
pub use compose::{Section, SlotFn, Slots, compose};
pub use controller::VisibilityController;
pub use evaluate::{ActionRow, ITEM_CLASS, ItemModifiers, RowContent, click_action, evaluate};
pub use hit::{ActionSheetState, HitRegion, Target, Trigger, trigger_for_key, trigger_for_mouse};
pub use notify::{Notify, SheetError, SheetEvent};
pub use props::{ActionSheetProps, OverlayProps};
pub use render::ActionSheet;

use crossterm::event::{KeyEvent, MouseEvent};

/// What a trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was hit, or the affordance does not exist.
    Ignored,
    /// Keyboard focus moved; nothing was emitted.
    Focused,
    /// A disabled or loading row was hit; nothing was emitted.
    Suppressed,
    /// Notifications were emitted.
    Dispatched,
}

/// Route a trigger to the visibility controller or the action list.
///
/// Hidden sheets ignore every trigger.
pub fn dispatch<N: Notify + ?Sized>(
    props: &ActionSheetProps,
    trigger: Trigger,
    sink: &mut N,
) -> Result<Outcome, SheetError> {
    if !props.show {
        return Ok(Outcome::Ignored);
    }

    let controller = VisibilityController::new(props);
    match trigger {
        Trigger::Activate(Target::CloseIcon) => controller.close_icon_clicked(sink),
        Trigger::Activate(Target::Item(index)) => click_action(props, index, sink),
        Trigger::Activate(Target::Cancel) => controller.cancel_clicked(sink),
        Trigger::OverlayClick => controller.overlay_clicked(sink),
        Trigger::Popstate => controller.popstate(sink),
    }
}

/// Handle a key press while the sheet is shown.
pub fn handle_key<N: Notify + ?Sized>(
    props: &ActionSheetProps,
    state: &mut ActionSheetState,
    key: KeyEvent,
    sink: &mut N,
) -> Result<Outcome, SheetError> {
    if !props.show {
        return Ok(Outcome::Ignored);
    }
    let before = state.focus();
    match trigger_for_key(props, state, key) {
        Some(trigger) => dispatch(props, trigger, sink),
        None if state.focus() != before => Ok(Outcome::Focused),
        None => Ok(Outcome::Ignored),
    }
}

/// Handle a mouse event against the regions recorded by the last render.
pub fn handle_mouse<N: Notify + ?Sized>(
    props: &ActionSheetProps,
    state: &mut ActionSheetState,
    mouse: MouseEvent,
    sink: &mut N,
) -> Result<Outcome, SheetError> {
    if !props.show {
        return Ok(Outcome::Ignored);
    }
    match trigger_for_mouse(state, mouse) {
        Some(trigger) => dispatch(props, trigger, sink),
        None => Ok(Outcome::Ignored),
    }
}
