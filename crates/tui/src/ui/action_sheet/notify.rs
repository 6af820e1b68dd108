//! Outward notifications emitted by the sheet.
//!
//! The sheet never mutates caller state. Every effect it has on the outside
//! world is a `SheetEvent` pushed into a caller-supplied `Notify` sink, in the
//! order the triggering interaction defines.

use thiserror::Error;
use tokio::sync::mpsc::{Sender, UnboundedSender, error::TrySendError};

use super::action::ActionSheetAction;

/// A notification for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetEvent {
    /// A non-disabled, non-loading row was clicked.
    Select {
        action: ActionSheetAction,
        index: usize,
    },
    /// The close icon or the cancel button was clicked.
    Cancel,
    /// The sheet asks the caller to set its visibility flag.
    UpdateShow(bool),
}

/// Delivery failures for outward notifications.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SheetError {
    #[error("notification receiver was dropped")]
    ChannelClosed,

    #[error("notification channel is full")]
    ChannelFull,
}

/// Sink for outward notifications.
pub trait Notify {
    fn notify(&mut self, event: SheetEvent) -> Result<(), SheetError>;
}

/// Records notifications in order; never fails.
impl Notify for Vec<SheetEvent> {
    fn notify(&mut self, event: SheetEvent) -> Result<(), SheetError> {
        self.push(event);
        Ok(())
    }
}

/// Bounded channel delivery without waiting: dispatch is synchronous.
impl Notify for Sender<SheetEvent> {
    fn notify(&mut self, event: SheetEvent) -> Result<(), SheetError> {
        self.try_send(event).map_err(|e| match e {
            TrySendError::Full(_) => SheetError::ChannelFull,
            TrySendError::Closed(_) => SheetError::ChannelClosed,
        })
    }
}

impl Notify for UnboundedSender<SheetEvent> {
    fn notify(&mut self, event: SheetEvent) -> Result<(), SheetError> {
        self.send(event).map_err(|_| SheetError::ChannelClosed)
    }
}

/// Push `event`, logging a delivery failure before handing it back.
pub(crate) fn emit<N: Notify + ?Sized>(sink: &mut N, event: SheetEvent) -> Result<(), SheetError> {
    sink.notify(event).inspect_err(|e| {
        tracing::warn!(error = %e, "Failed to deliver sheet notification");
    })
}
