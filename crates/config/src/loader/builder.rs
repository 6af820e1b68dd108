//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from `.env`, environment variables, a JSON config file, and direct
//!   builder methods.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing logic (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Precedence: builder overrides > environment variables > config file > defaults,
//!   independent of the order the builder methods are called in.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use super::env::read_env;
use super::error::ConfigError;
use super::file::{default_config_path, read_config_file};
use super::layer::SheetLayer;
use crate::types::{ColorTheme, SheetDefaults};

/// Configuration loader that builds `SheetDefaults` from file, env, and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    file: SheetLayer,
    env: SheetLayer,
    overrides: SheetLayer,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read the JSON config file, if one exists.
    ///
    /// Uses the path from `with_config_path` or the platform default.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        if let Some(layer) = read_config_file(&path)? {
            self.file = layer;
        }
        Ok(self)
    }

    /// Read configuration from `SHEET_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        self.env = read_env()?;
        Ok(self)
    }

    /// Override the color theme (e.g. from a CLI flag).
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.overrides.theme = Some(theme);
        self
    }

    /// Override auto-dismiss after a successful item click.
    pub fn with_close_on_click_action(mut self, value: bool) -> Self {
        self.overrides.close_on_click_action = Some(value);
        self
    }

    /// Override dismissal on back-navigation.
    pub fn with_close_on_popstate(mut self, value: bool) -> Self {
        self.overrides.close_on_popstate = Some(value);
        self
    }

    /// Override the header close icon name.
    pub fn with_close_icon(mut self, name: impl Into<String>) -> Self {
        self.overrides.close_icon = Some(name.into());
        self
    }

    /// Merge all layers over the defaults.
    pub fn build(self) -> SheetDefaults {
        let mut defaults = SheetDefaults::default();
        for layer in [&self.file, &self.env, &self.overrides] {
            layer.apply_to(&mut defaults);
        }
        tracing::debug!(?defaults, "Resolved sheet defaults");
        defaults
    }
}
