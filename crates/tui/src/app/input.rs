//! Input routing for the demo app.
//!
//! Responsibilities:
//! - Forward keys and mouse events to the sheet while it is shown.
//! - Open the sheet and quit while it is closed.
//!
//! Does NOT handle:
//! - Applying sheet notifications (see `App::update`, fed by `App::drain`).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};

use super::App;
use crate::event::Event;
use crate::ui::action_sheet::{self, Outcome, SheetError};

impl App {
    /// Route one terminal event.
    ///
    /// Delivery failures are logged and dropped; the sheet stays as it was.
    pub fn handle_event(&mut self, event: Event) {
        let result = match event {
            Event::Input(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
                Ok(())
            }
            Event::Tick => {
                self.tick();
                Ok(())
            }
        };
        if let Err(error) = result {
            tracing::warn!(%error, "Sheet notification dropped");
            self.push_log(format!("error: {error}"));
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), SheetError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if self.props.show {
            let outcome =
                action_sheet::handle_key(&self.props, &mut self.sheet_state, key, &mut self.sheet_tx)?;
            if outcome == Outcome::Suppressed {
                self.push_log("inactive row");
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Char('o') => self.open_sheet(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event. Only the sheet reacts to the mouse.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<(), SheetError> {
        let outcome =
            action_sheet::handle_mouse(&self.props, &mut self.sheet_state, mouse, &mut self.sheet_tx)?;
        if outcome == Outcome::Suppressed {
            self.push_log("inactive row");
        }
        Ok(())
    }
}
