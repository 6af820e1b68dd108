//! Action sheet widget.
//!
//! Draws the composed sections inside the bottom overlay and records hit regions
//! in the caller's `ActionSheetState`. Nothing is drawn and no region exists while
//! `show` is false.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use sheet_config::Theme;

use super::compose::{Section, Slots, compose};
use super::evaluate::{ActionRow, ItemModifiers, RowContent};
use super::hit::{ActionSheetState, Target};
use super::props::ActionSheetProps;
use crate::ui::icon::icon_glyph;
use crate::ui::overlay::{OverlayLayout, render_backdrop, render_sheet_frame};
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::LoadingIndicator;

/// Render-time view of a sheet.
pub struct ActionSheet<'a> {
    props: &'a ActionSheetProps,
    slots: Slots<'a>,
    theme: Theme,
    spinner_frame: u8,
}

impl<'a> ActionSheet<'a> {
    pub fn new(props: &'a ActionSheetProps, theme: &Theme) -> Self {
        Self {
            props,
            slots: Slots::default(),
            theme: *theme,
            spinner_frame: 0,
        }
    }

    pub fn slots(mut self, slots: Slots<'a>) -> Self {
        self.slots = slots;
        self
    }

    /// Animation frame for loading rows.
    pub fn spinner_frame(mut self, frame: u8) -> Self {
        self.spinner_frame = frame;
        self
    }
}

/// Hands out full-width strips of the content area top to bottom, clipped at its bottom.
struct Cursor {
    area: Rect,
    y: u16,
}

impl Cursor {
    fn new(area: Rect) -> Self {
        Self { area, y: area.y }
    }

    fn take(&mut self, height: u16) -> Option<Rect> {
        let remaining = self.area.bottom().saturating_sub(self.y);
        let height = height.min(remaining);
        if height == 0 {
            return None;
        }
        let strip = Rect::new(self.area.x, self.y, self.area.width, height);
        self.y += height;
        Some(strip)
    }
}

impl<'a> ActionSheet<'a> {
    fn row_style(&self, row: &ActionRow<'_>, focused: bool) -> Style {
        let mut style = self.theme.text();
        if row.modifiers.contains(ItemModifiers::DISABLED) {
            style = style.patch(self.theme.disabled());
        }
        // The row's own color wins over the disabled tint.
        if let Some(color) = row.color {
            style = style.fg(color);
        }
        if focused {
            style = style.bg(self.theme.highlight_bg);
        }
        style
    }

    fn render_header(
        &self,
        strip: Rect,
        title: &str,
        close_icon: Option<&str>,
        buf: &mut Buffer,
        state: &mut ActionSheetState,
    ) {
        Paragraph::new(Line::styled(title.to_string(), self.theme.title()))
            .alignment(Alignment::Center)
            .render(strip, buf);

        let Some(name) = close_icon else {
            return;
        };
        let glyph = Line::styled(icon_glyph(name).to_string(), self.theme.text_dim());
        let width = (glyph.width() as u16).min(strip.width);
        let hit_width = width.saturating_add(2).min(strip.width);
        let hit = Rect {
            x: strip.right().saturating_sub(hit_width),
            width: hit_width,
            ..strip
        };
        let glyph_area = Rect {
            x: hit.x + (hit_width - width) / 2,
            width,
            ..strip
        };
        glyph.render(glyph_area, buf);
        state.push_region(hit, Target::CloseIcon);
    }

    fn render_row(
        &self,
        strip: Rect,
        row: &ActionRow<'_>,
        buf: &mut Buffer,
        state: &mut ActionSheetState,
    ) {
        let focused = state.focus() == Some(Target::Item(row.index));
        let style = self.row_style(row, focused);
        buf.set_style(strip, style);

        match row.content {
            RowContent::Loading => {
                LoadingIndicator::new(self.spinner_frame)
                    .style(style)
                    .render(strip, buf);
            }
            RowContent::Label { name, subname } => {
                let mut lines = vec![Line::from(name.to_string())];
                if let Some(subname) = subname {
                    lines.push(Line::styled(subname.to_string(), self.theme.text_dim()));
                }
                Paragraph::new(lines)
                    .style(style)
                    .alignment(Alignment::Center)
                    .render(strip, buf);
            }
        }
        state.push_region(strip, Target::Item(row.index));
    }

    fn render_cancel(
        &self,
        cursor: &mut Cursor,
        label: &str,
        buf: &mut Buffer,
        state: &mut ActionSheetState,
    ) {
        if let Some(gap) = cursor.take(1) {
            let rule = "─".repeat(gap.width as usize);
            Line::styled(rule, self.theme.border()).render(gap, buf);
        }
        let Some(strip) = cursor.take(1) else {
            return;
        };
        let style = if state.focus() == Some(Target::Cancel) {
            self.theme.highlight()
        } else {
            self.theme.text()
        };
        buf.set_style(strip, style);
        Paragraph::new(label.to_string())
            .style(style)
            .alignment(Alignment::Center)
            .render(strip, buf);
        state.push_region(strip, Target::Cancel);
    }
}

impl StatefulWidget for ActionSheet<'_> {
    type State = ActionSheetState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if !self.props.show {
            state.begin_render(None);
            return;
        }

        let sections = compose(self.props, &self.slots);
        let content_height = sections
            .iter()
            .fold(0u16, |acc, s| acc.saturating_add(s.height()));
        let layout = OverlayLayout::bottom(area, content_height, self.props.safe_area_inset_bottom);

        if self.props.overlay.overlay {
            let style = self
                .props
                .overlay
                .overlay_style
                .unwrap_or_else(|| self.theme.overlay());
            render_backdrop(area, buf, style);
        }
        render_sheet_frame(&layout, self.props.round, self.theme.border(), buf);
        buf.set_style(
            layout.content,
            Style::default().bg(self.theme.background),
        );
        state.begin_render(Some(layout.sheet));

        let mut cursor = Cursor::new(layout.content);
        for section in sections {
            match section {
                Section::Header { title, close_icon } => {
                    if let Some(strip) = cursor.take(1) {
                        self.render_header(strip, title, close_icon, buf, state);
                    }
                }
                Section::Description(text) => {
                    if let Some(strip) = cursor.take(text.height() as u16) {
                        Paragraph::new(text)
                            .style(self.theme.text_dim())
                            .alignment(Alignment::Center)
                            .render(strip, buf);
                    }
                }
                Section::Content { rows, extra } => {
                    for row in &rows {
                        if let Some(strip) = cursor.take(row.height()) {
                            self.render_row(strip, row, buf, state);
                        }
                    }
                    if let Some(text) = extra {
                        render_extra(&mut cursor, text, buf);
                    }
                }
                Section::Cancel { label } => self.render_cancel(&mut cursor, label, buf, state),
            }
        }
        tracing::trace!(
            sheet = ?layout.sheet,
            regions = state.regions().len(),
            "Action sheet rendered"
        );
    }
}

fn render_extra(cursor: &mut Cursor, text: Text<'_>, buf: &mut Buffer) {
    if let Some(strip) = cursor.take(text.height() as u16) {
        Paragraph::new(text).render(strip, buf);
    }
}
