//! Drawing for the demo app: a help line, the event log, and the sheet on top.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::App;
use crate::ui::action_sheet::{ActionSheet, Slots};
use crate::ui::theme::ThemeExt;

const HELP_CLOSED: &str = "Space/o open sheet · q quit";
const HELP_OPEN: &str = "↑/↓ move · Enter select · x close · Esc back";

impl App {
    pub fn render(&mut self, f: &mut Frame) {
        let [help_area, log_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(f.area());

        let help = if self.props.show {
            HELP_OPEN
        } else {
            HELP_CLOSED
        };
        f.render_widget(Paragraph::new(help).style(self.theme.text_dim()), help_area);

        let items: Vec<ListItem> = self
            .log
            .iter()
            .rev()
            .map(|entry| ListItem::new(Line::from(entry.as_str())))
            .collect();
        let log = List::new(items).style(self.theme.text()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title("Events"),
        );
        f.render_widget(log, log_area);

        let hint_style = self.theme.text_dim();
        let slots = Slots::default().default_content(move || {
            Text::styled("Tab cycles focus", hint_style).centered()
        });
        f.render_stateful_widget(
            ActionSheet::new(&self.props, &self.theme)
                .spinner_frame(self.spinner_frame)
                .slots(slots),
            f.area(),
            &mut self.sheet_state,
        );
    }
}
