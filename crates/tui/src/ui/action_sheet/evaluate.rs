//! Action list evaluator.
//!
//! Responsibilities:
//! - Map the descriptor sequence to `ActionRow` view-models (content, modifiers, color, classes).
//! - Dispatch a click on row `i`: callback, then `Select`, then optional auto-close.
//!
//! Does NOT handle:
//! - Drawing rows (see `render`).
//! - Mapping pointer/keyboard input to a row (see `hit`).
//!
//! Invariants:
//! - One row per descriptor, in sequence order; `row.index` is the descriptor position.
//! - A loading row never carries `name` or `subname`.
//! - A disabled or loading row's click emits nothing and runs no callback.
//! - Click order is fixed: callback, `Select { action, index }`, then `UpdateShow(false)` when
//!   `close_on_click_action` is set.

use bitflags::bitflags;
use ratatui::style::Color;

use super::Outcome;
use super::action::ActionSheetAction;
use super::notify::{Notify, SheetError, SheetEvent, emit};
use super::props::ActionSheetProps;

/// Base style tag carried by every row.
pub const ITEM_CLASS: &str = "action-sheet__item";

bitflags! {
    /// Style states of a row. Independent; both may be set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ItemModifiers: u8 {
        const LOADING = 1 << 0;
        const DISABLED = 1 << 1;
    }
}

/// What a row displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowContent<'a> {
    /// Only the loading indicator.
    Loading,
    /// Primary label (empty when the descriptor has none) and optional secondary line.
    Label {
        name: &'a str,
        subname: Option<&'a str>,
    },
}

/// A row ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow<'a> {
    pub index: usize,
    pub content: RowContent<'a>,
    pub modifiers: ItemModifiers,
    pub color: Option<Color>,
    pub class_name: Option<&'a str>,
}

impl<'a> ActionRow<'a> {
    fn from_action(index: usize, action: &'a ActionSheetAction) -> Self {
        let content = if action.loading {
            RowContent::Loading
        } else {
            RowContent::Label {
                name: action.name.as_deref().unwrap_or_default(),
                subname: action.visible_subname(),
            }
        };

        let mut modifiers = ItemModifiers::empty();
        modifiers.set(ItemModifiers::LOADING, action.loading);
        modifiers.set(ItemModifiers::DISABLED, action.disabled);

        Self {
            index,
            content,
            modifiers,
            color: action.color,
            class_name: action.class_name.as_deref(),
        }
    }

    /// Lines this row occupies.
    pub fn height(&self) -> u16 {
        match self.content {
            RowContent::Label {
                subname: Some(_), ..
            } => 2,
            _ => 1,
        }
    }

    /// Style tags: the base tag, one per modifier, then the caller's tag.
    pub fn classes(&self) -> Vec<String> {
        let mut classes = vec![ITEM_CLASS.to_string()];
        if self.modifiers.contains(ItemModifiers::LOADING) {
            classes.push(format!("{ITEM_CLASS}--loading"));
        }
        if self.modifiers.contains(ItemModifiers::DISABLED) {
            classes.push(format!("{ITEM_CLASS}--disabled"));
        }
        if let Some(extra) = self.class_name {
            classes.push(extra.to_string());
        }
        classes
    }
}

/// Evaluate every descriptor into a row. An empty slice yields no rows.
pub fn evaluate(actions: &[ActionSheetAction]) -> Vec<ActionRow<'_>> {
    actions
        .iter()
        .enumerate()
        .map(|(index, action)| ActionRow::from_action(index, action))
        .collect()
}

/// Click on the row at `index`.
///
/// # Errors
///
/// Returns `SheetError` when a notification cannot be delivered. The callback
/// has already run at that point.
pub fn click_action<N: Notify + ?Sized>(
    props: &ActionSheetProps,
    index: usize,
    sink: &mut N,
) -> Result<Outcome, SheetError> {
    let Some(action) = props.actions.get(index) else {
        tracing::debug!(index, "Click on missing action row ignored");
        return Ok(Outcome::Ignored);
    };

    if !action.is_interactive() {
        tracing::trace!(
            index,
            disabled = action.disabled,
            loading = action.loading,
            "Click on inactive action row suppressed"
        );
        return Ok(Outcome::Suppressed);
    }

    if let Some(callback) = &action.callback {
        callback(action);
    }

    tracing::debug!(index, name = ?action.name, "Action selected");
    emit(
        sink,
        SheetEvent::Select {
            action: action.clone(),
            index,
        },
    )?;

    if props.close_on_click_action {
        emit(sink, SheetEvent::UpdateShow(false))?;
    }
    Ok(Outcome::Dispatched)
}
