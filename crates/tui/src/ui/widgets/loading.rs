//! Loading indicator drawn in place of a row's labels.
//!
//! Stateless: the animation frame comes from the caller's tick counter.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::spinner_char;

/// A centered Braille spinner.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingIndicator {
    frame: u8,
    style: Style,
}

impl LoadingIndicator {
    pub fn new(frame: u8) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for LoadingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(spinner_char(self.frame).to_string())
            .style(self.style)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(widget: LoadingIndicator, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(widget, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_spinner_is_centered() {
        let content = draw(LoadingIndicator::new(0), 5);
        assert_eq!(content, "  ⠋  ");
    }

    #[test]
    fn test_frame_selects_glyph() {
        let content = draw(LoadingIndicator::new(3), 3);
        assert!(content.contains('⠸'));
    }

    #[test]
    fn test_style_is_applied() {
        let backend = TestBackend::new(3, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let style = Style::default().fg(ratatui::style::Color::Red);
        terminal
            .draw(|f| f.render_widget(LoadingIndicator::new(0).style(style), f.area()))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(1, 0)].fg, ratatui::style::Color::Red);
    }
}
