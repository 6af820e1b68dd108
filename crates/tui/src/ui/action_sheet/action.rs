//! Action descriptors: one selectable row of the sheet.
//!
//! Descriptors are caller-owned and immutable for the duration of a render.
//! The callback is shared (`Arc`) so that cloning a descriptor into an outward
//! `Select` notification keeps the caller's closure identity.

use std::fmt;
use std::sync::Arc;

use ratatui::style::Color;

/// Per-item callback invoked before the outward `Select` notification.
pub type ActionCallback = Arc<dyn Fn(&ActionSheetAction) + Send + Sync>;

/// A selectable row of the action sheet.
///
/// # Example
///
/// ```rust
/// use sheet_tui::ui::action_sheet::ActionSheetAction;
///
/// let archive = ActionSheetAction::new("Archive").subname("Hide from inbox");
/// assert_eq!(archive.name.as_deref(), Some("Archive"));
/// assert!(archive.is_interactive());
/// ```
#[derive(Clone, Default)]
pub struct ActionSheetAction {
    /// Primary label.
    pub name: Option<String>,
    /// Secondary label, shown on its own line when non-empty.
    pub subname: Option<String>,
    /// Foreground override for the whole row.
    pub color: Option<Color>,
    /// Replace the content with a loading indicator and ignore clicks.
    pub loading: bool,
    /// Ignore clicks.
    pub disabled: bool,
    /// Invoked with the descriptor before `Select` is emitted.
    pub callback: Option<ActionCallback>,
    /// Opaque style tag carried through to the row's class list.
    pub class_name: Option<String>,
}

impl ActionSheetAction {
    /// Create a descriptor with a primary label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the secondary label.
    pub fn subname(mut self, subname: impl Into<String>) -> Self {
        self.subname = Some(subname.into());
        self
    }

    /// Set the foreground color override.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the opaque style tag.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Attach a per-item callback.
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ActionSheetAction) + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    /// Whether a click on this row does anything at all.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// The subname, only when it is non-empty.
    pub fn visible_subname(&self) -> Option<&str> {
        self.subname.as_deref().filter(|s| !s.is_empty())
    }
}

impl fmt::Debug for ActionSheetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSheetAction")
            .field("name", &self.name)
            .field("subname", &self.subname)
            .field("color", &self.color)
            .field("loading", &self.loading)
            .field("disabled", &self.disabled)
            .field("callback", &self.callback.is_some())
            .field("class_name", &self.class_name)
            .finish()
    }
}

/// Descriptors compare by value; callbacks compare by identity.
impl PartialEq for ActionSheetAction {
    fn eq(&self, other: &Self) -> bool {
        let same_callback = match (&self.callback, &other.callback) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        same_callback
            && self.name == other.name
            && self.subname == other.subname
            && self.color == other.color
            && self.loading == other.loading
            && self.disabled == other.disabled
            && self.class_name == other.class_name
    }
}
