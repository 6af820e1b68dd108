//! Event handling for the TUI.

use crossterm::event::{KeyEvent, MouseEvent};

/// TUI events delivered to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

impl Event {
    /// Map a crossterm event. Key releases and unsupported events yield `None`.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(key)
                if key.kind == crossterm::event::KeyEventKind::Press =>
            {
                Some(Self::Input(key))
            }
            crossterm::event::Event::Mouse(mouse) => Some(Self::Mouse(mouse)),
            crossterm::event::Event::Resize(width, height) => Some(Self::Resize(width, height)),
            _ => None,
        }
    }

    /// Key and resize events must not be dropped under backpressure.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Resize(_, _))
    }
}
