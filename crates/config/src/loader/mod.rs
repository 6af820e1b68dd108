//! Configuration loader for `.env`, environment variables, and the config file.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;
mod layer;

pub use builder::ConfigLoader;
pub use env::{
    ENV_CLOSE_ICON, ENV_CLOSE_ON_CLICK_ACTION, ENV_CLOSE_ON_CLICK_OVERLAY, ENV_CLOSE_ON_POPSTATE,
    ENV_CLOSEABLE, ENV_OVERLAY, ENV_ROUND, ENV_SAFE_AREA_INSET_BOTTOM, ENV_THEME, env_var_or_none,
};
pub use error::ConfigError;
pub use file::default_config_path;
pub use layer::SheetLayer;
