//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SHEET_*` environment variables into a `SheetLayer`.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading from config files (see file.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid boolean or theme values return ConfigError::InvalidValue.

use super::error::ConfigError;
use super::layer::SheetLayer;
use crate::types::ColorTheme;

pub const ENV_THEME: &str = "SHEET_THEME";
pub const ENV_ROUND: &str = "SHEET_ROUND";
pub const ENV_CLOSEABLE: &str = "SHEET_CLOSEABLE";
pub const ENV_CLOSE_ICON: &str = "SHEET_CLOSE_ICON";
pub const ENV_SAFE_AREA_INSET_BOTTOM: &str = "SHEET_SAFE_AREA_INSET_BOTTOM";
pub const ENV_CLOSE_ON_POPSTATE: &str = "SHEET_CLOSE_ON_POPSTATE";
pub const ENV_CLOSE_ON_CLICK_ACTION: &str = "SHEET_CLOSE_ON_CLICK_ACTION";
pub const ENV_CLOSE_ON_CLICK_OVERLAY: &str = "SHEET_CLOSE_ON_CLICK_OVERLAY";
pub const ENV_OVERLAY: &str = "SHEET_OVERLAY";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean the way shells and `.env` files usually spell it.
fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

fn bool_var(var: &str) -> Result<Option<bool>, ConfigError> {
    env_var_or_none(var)
        .map(|value| parse_bool(var, &value))
        .transpose()
}

/// Build a layer from the current process environment.
pub fn read_env() -> Result<SheetLayer, ConfigError> {
    let theme = env_var_or_none(ENV_THEME)
        .map(|value| {
            value
                .parse::<ColorTheme>()
                .map_err(|message| ConfigError::InvalidValue {
                    var: ENV_THEME.to_string(),
                    message,
                })
        })
        .transpose()?;

    Ok(SheetLayer {
        round: bool_var(ENV_ROUND)?,
        closeable: bool_var(ENV_CLOSEABLE)?,
        close_icon: env_var_or_none(ENV_CLOSE_ICON),
        safe_area_inset_bottom: bool_var(ENV_SAFE_AREA_INSET_BOTTOM)?,
        close_on_popstate: bool_var(ENV_CLOSE_ON_POPSTATE)?,
        close_on_click_action: bool_var(ENV_CLOSE_ON_CLICK_ACTION)?,
        close_on_click_overlay: bool_var(ENV_CLOSE_ON_CLICK_OVERLAY)?,
        overlay: bool_var(ENV_OVERLAY)?,
        theme,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_spellings() {
        for yes in ["1", "true", "TRUE", "yes", "on"] {
            assert!(parse_bool("X", yes).unwrap(), "{yes}");
        }
        for no in ["0", "false", "No", "off"] {
            assert!(!parse_bool("X", no).unwrap(), "{no}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let err = parse_bool("SHEET_ROUND", "maybe").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref var, .. } if var == "SHEET_ROUND"
        ));
    }
}
