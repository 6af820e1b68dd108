//! Hit regions, keyboard focus, and input-to-trigger mapping.
//!
//! Responsibilities:
//! - Hold the caller-owned `ActionSheetState`: regions written by the last render and the
//!   keyboard focus.
//! - Map crossterm mouse and key events to `Trigger`s.
//!
//! Does NOT handle:
//! - What a trigger does (see `dispatch` in the parent module).
//!
//! Invariants:
//! - Regions are rewritten on every render and empty while the sheet is hidden.
//! - Focus order is rows in sequence order, then the cancel button when present. Once the
//!   sheet has been rendered, targets clipped off screen are skipped and never activated.
//! - A left click outside the sheet area is an `OverlayClick`; inside the sheet but off every
//!   region it is nothing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::props::ActionSheetProps;

/// A clickable part of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    CloseIcon,
    Item(usize),
    Cancel,
}

/// Something the user did to the sheet or its overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Activate(Target),
    OverlayClick,
    Popstate,
}

/// Screen area of a target, as last rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub area: Rect,
    pub target: Target,
}

/// Interaction state owned by the caller and passed to every render.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActionSheetState {
    focus: Option<Target>,
    sheet_area: Option<Rect>,
    regions: Vec<HitRegion>,
}


impl ActionSheetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Option<Target> {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Option<Target>) {
        self.focus = focus;
    }

    /// Outer area of the sheet from the last render.
    pub fn sheet_area(&self) -> Option<Rect> {
        self.sheet_area
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Area of `target` from the last render.
    pub fn region_of(&self, target: Target) -> Option<Rect> {
        self.regions
            .iter()
            .find(|r| r.target == target)
            .map(|r| r.area)
    }

    /// Target under a terminal cell.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .find(|r| r.area.contains(pos))
            .map(|r| r.target)
    }

    /// Focusable targets in order, limited to what the last render drew.
    fn focus_order(&self, props: &ActionSheetProps) -> Vec<Target> {
        let mut order: Vec<Target> = (0..props.actions.len()).map(Target::Item).collect();
        if props.cancel_label().is_some() {
            order.push(Target::Cancel);
        }
        if self.sheet_area.is_some() {
            order.retain(|t| self.region_of(*t).is_some());
        }
        order
    }

    /// Focused target, if it can still be activated.
    fn active_focus(&self, props: &ActionSheetProps) -> Option<Target> {
        self.focus.filter(|f| self.focus_order(props).contains(f))
    }

    pub(crate) fn begin_render(&mut self, sheet_area: Option<Rect>) {
        self.sheet_area = sheet_area;
        self.regions.clear();
    }

    pub(crate) fn push_region(&mut self, area: Rect, target: Target) {
        if !area.is_empty() {
            self.regions.push(HitRegion { area, target });
        }
    }

    fn step_focus(&mut self, props: &ActionSheetProps, forward: bool, wrap: bool) {
        let order = self.focus_order(props);
        let (Some(first), Some(last)) = (order.first().copied(), order.last().copied()) else {
            self.focus = None;
            return;
        };
        let current = self
            .focus
            .and_then(|f| order.iter().position(|t| *t == f));
        self.focus = Some(match (current, forward) {
            (None, true) => first,
            (None, false) => last,
            (Some(i), true) if i + 1 < order.len() => order[i + 1],
            (Some(_), true) => {
                if wrap {
                    first
                } else {
                    last
                }
            }
            (Some(0), false) => {
                if wrap {
                    last
                } else {
                    first
                }
            }
            (Some(i), false) => order[i - 1],
        });
    }

    /// Move focus to the next target, stopping at the last.
    pub fn focus_next(&mut self, props: &ActionSheetProps) {
        self.step_focus(props, true, false);
    }

    /// Move focus to the previous target, stopping at the first.
    pub fn focus_prev(&mut self, props: &ActionSheetProps) {
        self.step_focus(props, false, false);
    }

    pub fn focus_first(&mut self, props: &ActionSheetProps) {
        self.focus = self.focus_order(props).first().copied();
    }

    pub fn focus_last(&mut self, props: &ActionSheetProps) {
        self.focus = self.focus_order(props).last().copied();
    }
}

/// Map a key press to a trigger, moving focus for navigation keys.
pub fn trigger_for_key(
    props: &ActionSheetProps,
    state: &mut ActionSheetState,
    key: KeyEvent,
) -> Option<Trigger> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(Trigger::Popstate),
        KeyCode::Enter | KeyCode::Char(' ') => state.active_focus(props).map(Trigger::Activate),
        KeyCode::Char('x') if props.has_close_icon() => {
            Some(Trigger::Activate(Target::CloseIcon))
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.focus_next(props);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.focus_prev(props);
            None
        }
        KeyCode::Tab => {
            state.step_focus(props, true, true);
            None
        }
        KeyCode::BackTab => {
            state.step_focus(props, false, true);
            None
        }
        KeyCode::Home => {
            state.focus_first(props);
            None
        }
        KeyCode::End => {
            state.focus_last(props);
            None
        }
        _ => None,
    }
}

/// Map a mouse event to a trigger using the regions of the last render.
///
/// Clicking a focusable target also moves focus to it.
pub fn trigger_for_mouse(state: &mut ActionSheetState, mouse: MouseEvent) -> Option<Trigger> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let sheet = state.sheet_area()?;

    if let Some(target) = state.target_at(mouse.column, mouse.row) {
        if target != Target::CloseIcon {
            state.set_focus(Some(target));
        }
        return Some(Trigger::Activate(target));
    }
    if sheet.contains(Position::new(mouse.column, mouse.row)) {
        None
    } else {
        Some(Trigger::OverlayClick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::action_sheet::ActionSheetAction;
    use crossterm::event::KeyModifiers;

    fn props(rows: usize) -> ActionSheetProps {
        ActionSheetProps::default()
            .show(true)
            .actions((0..rows).map(|i| ActionSheetAction::new(format!("{i}"))).collect())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_focus_walks_rows_then_cancel() {
        let props = props(2).cancel_text("Cancel");
        let mut state = ActionSheetState::new();

        state.focus_next(&props);
        assert_eq!(state.focus(), Some(Target::Item(0)));
        state.focus_next(&props);
        state.focus_next(&props);
        assert_eq!(state.focus(), Some(Target::Cancel));
        state.focus_next(&props);
        assert_eq!(state.focus(), Some(Target::Cancel));
        state.focus_prev(&props);
        assert_eq!(state.focus(), Some(Target::Item(1)));
    }

    #[test]
    fn test_tab_wraps() {
        let props = props(2);
        let mut state = ActionSheetState::new();
        state.set_focus(Some(Target::Item(1)));
        assert_eq!(trigger_for_key(&props, &mut state, press(KeyCode::Tab)), None);
        assert_eq!(state.focus(), Some(Target::Item(0)));
        trigger_for_key(&props, &mut state, press(KeyCode::BackTab));
        assert_eq!(state.focus(), Some(Target::Item(1)));
    }

    #[test]
    fn test_focus_with_nothing_focusable() {
        let props = props(0);
        let mut state = ActionSheetState::new();
        state.focus_next(&props);
        assert_eq!(state.focus(), None);
    }

    #[test]
    fn test_stale_focus_restarts() {
        let props = props(1);
        let mut state = ActionSheetState::new();
        state.set_focus(Some(Target::Item(7)));
        state.focus_next(&props);
        assert_eq!(state.focus(), Some(Target::Item(0)));
    }

    #[test]
    fn test_enter_activates_focus_only() {
        let props = props(1);
        let mut state = ActionSheetState::new();
        assert_eq!(trigger_for_key(&props, &mut state, press(KeyCode::Enter)), None);
        state.set_focus(Some(Target::Item(0)));
        assert_eq!(
            trigger_for_key(&props, &mut state, press(KeyCode::Enter)),
            Some(Trigger::Activate(Target::Item(0)))
        );
    }

    #[test]
    fn test_x_needs_close_icon() {
        let mut state = ActionSheetState::new();
        assert_eq!(
            trigger_for_key(&props(1), &mut state, press(KeyCode::Char('x'))),
            None
        );
        assert_eq!(
            trigger_for_key(&props(1).title("T"), &mut state, press(KeyCode::Char('x'))),
            Some(Trigger::Activate(Target::CloseIcon))
        );
    }

    #[test]
    fn test_esc_is_popstate() {
        let mut state = ActionSheetState::new();
        assert_eq!(
            trigger_for_key(&props(0), &mut state, press(KeyCode::Esc)),
            Some(Trigger::Popstate)
        );
    }

    #[test]
    fn test_mouse_mapping() {
        let mut state = ActionSheetState::new();
        assert_eq!(trigger_for_mouse(&mut state, click(1, 1)), None);

        state.begin_render(Some(Rect::new(0, 10, 20, 5)));
        state.push_region(Rect::new(1, 11, 18, 1), Target::Item(0));

        assert_eq!(
            trigger_for_mouse(&mut state, click(5, 11)),
            Some(Trigger::Activate(Target::Item(0)))
        );
        assert_eq!(state.focus(), Some(Target::Item(0)));
        assert_eq!(trigger_for_mouse(&mut state, click(5, 13)), None);
        assert_eq!(
            trigger_for_mouse(&mut state, click(5, 2)),
            Some(Trigger::OverlayClick)
        );
    }

    #[test]
    fn test_non_left_clicks_are_ignored() {
        let mut state = ActionSheetState::new();
        state.begin_render(Some(Rect::new(0, 10, 20, 5)));
        let mut event = click(5, 2);
        event.kind = MouseEventKind::Moved;
        assert_eq!(trigger_for_mouse(&mut state, event), None);
    }

    #[test]
    fn test_focus_skips_targets_clipped_by_last_render() {
        let props = props(3).cancel_text("Cancel");
        let mut state = ActionSheetState::new();
        state.begin_render(Some(Rect::new(0, 5, 20, 5)));
        state.push_region(Rect::new(1, 6, 18, 1), Target::Item(0));
        state.push_region(Rect::new(1, 7, 18, 1), Target::Item(1));

        for _ in 0..5 {
            state.focus_next(&props);
        }
        assert_eq!(state.focus(), Some(Target::Item(1)));
        state.focus_last(&props);
        assert_eq!(state.focus(), Some(Target::Item(1)));

        state.set_focus(Some(Target::Cancel));
        assert_eq!(trigger_for_key(&props, &mut state, press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_empty_regions_are_not_recorded() {
        let mut state = ActionSheetState::new();
        state.begin_render(Some(Rect::new(0, 0, 10, 10)));
        state.push_region(Rect::new(0, 0, 0, 1), Target::Cancel);
        assert!(state.regions().is_empty());
    }
}
