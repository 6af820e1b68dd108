//! Composition of the sheet's vertical sections.
//!
//! Order is fixed: header, description, content (rows then default slot), cancel.
//! Slots are evaluated here, lazily, once per composition.

use ratatui::text::Text;

use super::evaluate::{ActionRow, evaluate};
use super::props::ActionSheetProps;

/// Lazily produced content injected by the caller.
pub type SlotFn<'a> = Box<dyn Fn() -> Text<'a> + 'a>;

/// Caller-injected content.
#[derive(Default)]
pub struct Slots<'a> {
    /// Replaces the description text when present.
    pub description: Option<SlotFn<'a>>,
    /// Appended after the last action row.
    pub default: Option<SlotFn<'a>>,
}

impl<'a> Slots<'a> {
    pub fn description(mut self, slot: impl Fn() -> Text<'a> + 'a) -> Self {
        self.description = Some(Box::new(slot));
        self
    }

    pub fn default_content(mut self, slot: impl Fn() -> Text<'a> + 'a) -> Self {
        self.default = Some(Box::new(slot));
        self
    }
}

/// One vertical section of the sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<'a> {
    Header {
        title: &'a str,
        close_icon: Option<&'a str>,
    },
    Description(Text<'a>),
    Content {
        rows: Vec<ActionRow<'a>>,
        extra: Option<Text<'a>>,
    },
    Cancel {
        label: &'a str,
    },
}

impl Section<'_> {
    /// Lines the section occupies. Cancel includes its one-line gap.
    pub fn height(&self) -> u16 {
        match self {
            Section::Header { .. } => 1,
            Section::Description(text) => text.height() as u16,
            Section::Content { rows, extra } => {
                let rows: u16 = rows.iter().map(ActionRow::height).sum();
                rows + extra.as_ref().map_or(0, |t| t.height() as u16)
            }
            Section::Cancel { .. } => 2,
        }
    }
}

/// Compose the sections present for this configuration.
pub fn compose<'a>(props: &'a ActionSheetProps, slots: &Slots<'a>) -> Vec<Section<'a>> {
    let mut sections = Vec::with_capacity(4);

    if let Some(title) = props.header_title() {
        sections.push(Section::Header {
            title,
            close_icon: props.closeable.then_some(props.close_icon.as_str()),
        });
    }

    let description = match (&slots.description, props.description_text()) {
        (Some(slot), _) => Some(slot()),
        (None, Some(text)) => Some(Text::raw(text)),
        (None, None) => None,
    };
    if let Some(text) = description {
        sections.push(Section::Description(text));
    }

    sections.push(Section::Content {
        rows: evaluate(&props.actions),
        extra: slots.default.as_ref().map(|slot| slot()),
    });

    if let Some(label) = props.cancel_label() {
        sections.push(Section::Cancel { label });
    }

    sections
}
