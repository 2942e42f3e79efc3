//! Explorer settings.
//!
//! Settings come from a JSON file and are then overridden by command-line
//! flags. The file is optional: when the default location has no file, the
//! built-in defaults apply. A file named explicitly with `--config` must exist
//! and parse.

use crate::error::{BikeshareError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_MAX_LISTED_VALUES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerSettings {
    /// Directory containing `chicago.csv`, `new_york_city.csv` and `washington.csv`
    pub data_dir: PathBuf,
    /// Rows shown per page by the raw-data viewer
    pub page_size: usize,
    /// Longest value-count listing printed before the remainder is summarised
    pub max_listed_values: usize,
    /// Print how long each report section took
    pub show_timings: bool,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
            max_listed_values: DEFAULT_MAX_LISTED_VALUES,
            show_timings: true,
        }
    }
}

/// Values supplied on the command line; `None` keeps the file's value.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub data_dir: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub show_timings: Option<bool>,
}

impl ExplorerSettings {
    #[must_use]
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(dir) = overrides.data_dir {
            self.data_dir = dir;
        }
        if let Some(size) = overrides.page_size {
            self.page_size = size;
        }
        if let Some(show) = overrides.show_timings {
            self.show_timings = show;
        }
        self
    }

    /// # Errors
    ///
    /// Rejects a zero page size, which would make the pager spin forever.
    pub fn validate(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(BikeshareError::Config(
                "page_size must be at least 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// `<config dir>/bikeshare/config.json`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bikeshare").join("config.json"))
}

/// Loads settings from `explicit`, or from [`default_config_path`] if none was
/// given.
///
/// # Errors
///
/// Fails if the explicit file is missing, or if any settings file that does
/// exist cannot be parsed.
pub fn load_settings(explicit: Option<&Path>) -> Result<ExplorerSettings> {
    if let Some(path) = explicit {
        return load_settings_from(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => load_settings_from(&path),
        _ => {
            tracing::debug!("No settings file found, using defaults");
            Ok(ExplorerSettings::default())
        }
    }
}

/// # Errors
///
/// Fails if the file cannot be read or is not valid settings JSON.
pub fn load_settings_from(path: &Path) -> Result<ExplorerSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings: ExplorerSettings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    tracing::info!(path = %path.display(), "Loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write as _;

    #[test]
    fn defaults_match_the_classic_viewer() {
        let settings = ExplorerSettings::default();
        assert_eq!(settings.page_size, 5);
        assert_eq!(settings.data_dir, PathBuf::from("."));
        assert!(settings.show_timings);
    }

    #[test]
    fn partial_file_keeps_other_defaults() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "data_dir": "/srv/bikeshare", "page_size": 10 }}"#)?;

        let settings = load_settings(Some(file.path()))?;
        assert_eq!(settings.data_dir, PathBuf::from("/srv/bikeshare"));
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.max_listed_values, DEFAULT_MAX_LISTED_VALUES);
        Ok(())
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = load_settings(Some(Path::new("/nonexistent/bikeshare.json")));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_file_is_a_config_error() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "page_size = 5")?;
        let result = load_settings_from(file.path());
        assert!(matches!(result, Err(BikeshareError::Config(_))));
        Ok(())
    }

    #[test]
    fn overrides_win_over_file_values() {
        let settings = ExplorerSettings::default().with_overrides(SettingsOverrides {
            data_dir: Some(PathBuf::from("data")),
            page_size: None,
            show_timings: Some(false),
        });
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
        assert!(!settings.show_timings);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let settings = ExplorerSettings {
            page_size: 0,
            ..ExplorerSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
