//! Demo caller hosting the action sheet.
//!
//! The app owns everything the sheet must not: the `show` flag, the action
//! list, the event log, and the spinner tick. It applies `SheetEvent`s drained
//! from the notification channel before each draw.
//!
//! The module is organized into submodules:
//! - `input`: key, mouse, and event routing
//! - `render`: background screen and sheet drawing

mod input;
mod render;

use std::collections::VecDeque;

use ratatui::style::Color;
use sheet_config::{SheetDefaults, Theme};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::ui::action_sheet::{ActionSheetAction, ActionSheetProps, ActionSheetState, SheetEvent};

/// Name of the row that turns into a loading row when selected.
pub const REFRESH_ACTION: &str = "Refresh";

/// Ticks a refreshed row stays in the loading state.
pub const REFRESH_LOADING_TICKS: u8 = 12;

/// Entries kept in the on-screen event log.
pub const EVENT_LOG_CAPACITY: usize = 50;

/// Main application state.
pub struct App {
    pub props: ActionSheetProps,
    pub sheet_state: ActionSheetState,
    pub theme: Theme,
    pub spinner_frame: u8,
    pub log: VecDeque<String>,
    pub should_quit: bool,
    refresh_ticks: u8,
    sheet_tx: Sender<SheetEvent>,
}

/// Rows shown by the demo.
pub fn demo_actions() -> Vec<ActionSheetAction> {
    vec![
        ActionSheetAction::new("Share"),
        ActionSheetAction::new("Copy link").subname("Anyone with the link can view"),
        ActionSheetAction::new(REFRESH_ACTION).on_select(|action| {
            tracing::info!(name = ?action.name, "Refresh requested");
        }),
        ActionSheetAction::new("Delete").color(Color::Red),
        ActionSheetAction::new("Archive")
            .disabled(true)
            .class_name("archive"),
    ]
}

impl App {
    /// Create the app with sheet defaults and the sending half of the notification channel.
    pub fn new(defaults: &SheetDefaults, sheet_tx: Sender<SheetEvent>) -> Self {
        let props = ActionSheetProps::from_defaults(defaults)
            .title("Actions")
            .cancel_text("Cancel")
            .actions(demo_actions());
        Self {
            props,
            sheet_state: ActionSheetState::new(),
            theme: Theme::from_color_theme(defaults.theme),
            spinner_frame: 0,
            log: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
            should_quit: false,
            refresh_ticks: 0,
            sheet_tx,
        }
    }

    /// Override the sheet's text fields. `None` keeps the current value; empty clears it.
    pub fn with_labels(
        mut self,
        title: Option<String>,
        description: Option<String>,
        cancel_text: Option<String>,
    ) -> Self {
        if let Some(title) = title {
            self.props.title = Some(title).filter(|t| !t.is_empty());
        }
        if let Some(description) = description {
            self.props.description = Some(description).filter(|d| !d.is_empty());
        }
        if let Some(cancel_text) = cancel_text {
            self.props.cancel_text = Some(cancel_text).filter(|c| !c.is_empty());
        }
        self
    }

    pub(crate) fn push_log(&mut self, entry: impl Into<String>) {
        if self.log.len() == EVENT_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(entry.into());
    }

    fn set_refresh_loading(&mut self, loading: bool) {
        if let Some(row) = self
            .props
            .actions
            .iter_mut()
            .find(|a| a.name.as_deref() == Some(REFRESH_ACTION))
        {
            row.loading = loading;
        }
    }

    /// Apply one outward notification from the sheet.
    pub fn update(&mut self, event: SheetEvent) {
        tracing::debug!(?event, "Applying sheet event");
        match event {
            SheetEvent::UpdateShow(show) => {
                self.props.show = show;
                if !show {
                    self.sheet_state.set_focus(None);
                }
                self.push_log(format!("update:show {show}"));
            }
            SheetEvent::Select { action, index } => {
                let name = action.name.unwrap_or_default();
                self.push_log(format!("select #{index} {name}"));
                if name == REFRESH_ACTION {
                    self.set_refresh_loading(true);
                    self.refresh_ticks = REFRESH_LOADING_TICKS;
                }
            }
            SheetEvent::Cancel => self.push_log("cancel"),
        }
    }

    /// Apply every notification currently queued.
    pub fn drain(&mut self, rx: &mut Receiver<SheetEvent>) {
        while let Ok(event) = rx.try_recv() {
            self.update(event);
        }
    }

    /// Advance animations and the refresh countdown.
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        if self.refresh_ticks > 0 {
            self.refresh_ticks -= 1;
            if self.refresh_ticks == 0 {
                self.set_refresh_loading(false);
                self.push_log("refresh done");
            }
        }
    }

    /// Show the sheet with focus on the first row.
    pub fn open_sheet(&mut self) {
        self.props.show = true;
        self.sheet_state.focus_first(&self.props);
        self.push_log("open");
    }
}
