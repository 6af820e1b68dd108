//! Shared widgets used by the action sheet.

pub mod loading;

pub use loading::LoadingIndicator;
