//! Config file loading.
//!
//! Responsibilities:
//! - Resolve the default config file path with `directories`.
//! - Read and parse the JSON config file into a `SheetLayer`.
//!
//! Does NOT handle:
//! - Environment variables (see env.rs).
//! - Writing the file back; the TUI never persists sheet settings.
//!
//! Invariants:
//! - A missing file is not an error and yields `None`.
//! - Unknown keys are ignored so older binaries accept newer files.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::layer::SheetLayer;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/sheet-tui/config.json`
/// - macOS: `~/Library/Application Support/sheet-tui/config.json`
/// - Windows: `%AppData%\sheet-tui\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", CONFIG_DIR_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for this user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read a config file, returning `Ok(None)` when it does not exist.
pub fn read_config_file(path: &Path) -> Result<Option<SheetLayer>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let layer = serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(Some(layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorTheme;
    use std::io::Write;

    #[test]
    fn test_default_config_path_ends_with_file_name() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
            assert!(path.to_string_lossy().contains(CONFIG_DIR_NAME));
        }
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_config_file(&dir.path().join("nope.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_reads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"theme": "light", "close_on_popstate": true, "extra": 1}}"#).unwrap();

        let layer = read_config_file(file.path()).unwrap().unwrap();
        assert_eq!(layer.theme, Some(ColorTheme::Light));
        assert_eq!(layer.close_on_popstate, Some(true));
        assert_eq!(layer.round, None);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = read_config_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
    }
}
