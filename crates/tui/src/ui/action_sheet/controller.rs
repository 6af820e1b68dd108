//! Visibility controller.
//!
//! Responsibilities:
//! - Translate the sheet's dismiss triggers into `UpdateShow` / `Cancel` notifications.
//!
//! Does NOT handle:
//! - Item clicks (see `evaluate`), which may request `UpdateShow(false)` on their own.
//! - Applying visibility: the caller owns `show` and applies `UpdateShow`.
//!
//! Invariants:
//! - Cancel paths emit `UpdateShow(false)` then `Cancel`, exactly once each.
//! - Overlay paths emit a single `UpdateShow(false)` and never `Cancel`, and only while a
//!   backdrop is drawn.
//! - A path whose affordance does not exist emits nothing.

use super::notify::{Notify, SheetError, SheetEvent, emit};
use super::props::ActionSheetProps;
use super::Outcome;

/// Dismiss triggers owned by the sheet and its overlay.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityController<'a> {
    props: &'a ActionSheetProps,
}

impl<'a> VisibilityController<'a> {
    pub fn new(props: &'a ActionSheetProps) -> Self {
        Self { props }
    }

    /// Forward a visibility request verbatim.
    pub fn update_show<N: Notify + ?Sized>(
        &self,
        show: bool,
        sink: &mut N,
    ) -> Result<(), SheetError> {
        emit(sink, SheetEvent::UpdateShow(show))
    }

    fn cancel<N: Notify + ?Sized>(&self, sink: &mut N) -> Result<Outcome, SheetError> {
        self.update_show(false, sink)?;
        emit(sink, SheetEvent::Cancel)?;
        Ok(Outcome::Dispatched)
    }

    /// Header close icon. Unreachable without a title or with `closeable = false`.
    pub fn close_icon_clicked<N: Notify + ?Sized>(
        &self,
        sink: &mut N,
    ) -> Result<Outcome, SheetError> {
        if !self.props.has_close_icon() {
            return Ok(Outcome::Ignored);
        }
        tracing::debug!("Action sheet close icon clicked");
        self.cancel(sink)
    }

    /// Cancel button. Unreachable without cancel text.
    pub fn cancel_clicked<N: Notify + ?Sized>(&self, sink: &mut N) -> Result<Outcome, SheetError> {
        if self.props.cancel_label().is_none() {
            return Ok(Outcome::Ignored);
        }
        tracing::debug!("Action sheet cancel button clicked");
        self.cancel(sink)
    }

    /// Click on the backdrop outside the sheet. Without a backdrop there is nothing to click.
    pub fn overlay_clicked<N: Notify + ?Sized>(
        &self,
        sink: &mut N,
    ) -> Result<Outcome, SheetError> {
        let overlay = &self.props.overlay;
        if !overlay.overlay || !overlay.close_on_click_overlay {
            return Ok(Outcome::Ignored);
        }
        tracing::debug!("Action sheet dismissed from overlay");
        self.update_show(false, sink)?;
        Ok(Outcome::Dispatched)
    }

    /// Back-navigation.
    pub fn popstate<N: Notify + ?Sized>(&self, sink: &mut N) -> Result<Outcome, SheetError> {
        if !self.props.close_on_popstate {
            return Ok(Outcome::Ignored);
        }
        tracing::debug!("Action sheet dismissed by back-navigation");
        self.update_show(false, sink)?;
        Ok(Outcome::Dispatched)
    }
}
