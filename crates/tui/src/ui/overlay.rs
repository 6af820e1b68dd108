//! Bottom-anchored popup primitive hosting the sheet.
//!
//! Responsibilities:
//! - Compute the sheet and content areas for a given content height.
//! - Paint the backdrop and the sheet chrome (border, safe-area row).
//!
//! Does NOT handle:
//! - Input. Overlay clicks are detected by `action_sheet::hit` from the recorded sheet area.
//!
//! Invariants:
//! - The sheet spans the full frame width and touches the bottom edge.
//! - Sheet height is the content height plus chrome, clamped to
//!   `SHEET_MAX_HEIGHT_PERCENT` of the frame height.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Clear, Widget},
};
use sheet_config::constants::SHEET_MAX_HEIGHT_PERCENT;

/// Rows taken by the top border.
const TOP_CHROME: u16 = 1;

/// Resolved areas for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    /// Outer area of the sheet including its border.
    pub sheet: Rect,
    /// Area available for sections.
    pub content: Rect,
}

impl OverlayLayout {
    /// Place a sheet holding `content_height` lines at the bottom of `frame`.
    pub fn bottom(frame: Rect, content_height: u16, safe_area_inset_bottom: bool) -> Self {
        let inset = u16::from(safe_area_inset_bottom);
        let wanted = content_height
            .saturating_add(TOP_CHROME)
            .saturating_add(inset);
        let max = (u32::from(frame.height) * u32::from(SHEET_MAX_HEIGHT_PERCENT) / 100) as u16;
        let height = wanted.min(max.max(1)).min(frame.height);

        let sheet = Rect {
            x: frame.x,
            y: frame.bottom().saturating_sub(height),
            width: frame.width,
            height,
        };

        let inner = sheet_block(true, Style::default()).inner(sheet);
        let content = Rect {
            height: inner.height.saturating_sub(inset),
            ..inner
        };

        Self { sheet, content }
    }
}

/// Block drawn around the sheet. The bottom edge is open.
pub fn sheet_block<'a>(round: bool, style: Style) -> Block<'a> {
    let set = if round {
        border::ROUNDED
    } else {
        border::PLAIN
    };
    Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_set(set)
        .border_style(style)
}

/// Dim everything in `area` with `style`.
pub fn render_backdrop(area: Rect, buf: &mut Buffer, style: Style) {
    buf.set_style(area, style);
}

/// Clear the sheet area and draw its chrome.
pub fn render_sheet_frame(layout: &OverlayLayout, round: bool, style: Style, buf: &mut Buffer) {
    Clear.render(layout.sheet, buf);
    sheet_block(round, style).render(layout.sheet, buf);
}
