//! Test helpers for action sheet testing.
//!
//! Key and mouse event constructors plus a rendering harness over
//! `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use sheet_config::{ColorTheme, Theme};
use sheet_tui::ui::action_sheet::{ActionSheet, ActionSheetProps, ActionSheetState, Slots};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

pub fn end_key() -> KeyEvent {
    KeyEvent::new(KeyCode::End, KeyModifiers::NONE)
}

/// Left button press at a cell.
pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Convert a ratatui Buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buffer[(x, y)].symbol());
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Renders a sheet into a fixed-size terminal.
pub struct SheetHarness {
    pub terminal: Terminal<TestBackend>,
    pub state: ActionSheetState,
    pub theme: Theme,
}

impl SheetHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        Self {
            terminal,
            state: ActionSheetState::new(),
            theme: Theme::from_color_theme(ColorTheme::Default),
        }
    }

    /// Render and return the screen as text.
    pub fn render(&mut self, props: &ActionSheetProps) -> String {
        self.render_with(props, Slots::default())
    }

    pub fn render_with<'a>(&mut self, props: &'a ActionSheetProps, slots: Slots<'a>) -> String {
        let theme = self.theme;
        let state = &mut self.state;
        self.terminal
            .draw(|f| {
                f.render_stateful_widget(
                    ActionSheet::new(props, &theme).slots(slots),
                    f.area(),
                    state,
                )
            })
            .expect("draw");
        buffer_to_string(self.terminal.backend().buffer())
    }
}
