//! Error handling for the bikeshare explorer.
//!
//! Library code returns [`Result`], whose error is the [`BikeshareError`]
//! enum. `From` conversions let `?` lift I/O, Polars and JSON failures into
//! it, and [`ResultExt`] attaches a human-readable context message:
//!
//! ```no_run
//! use bikeshare::error::ResultExt as _;
//!
//! fn read_settings(path: &str) -> bikeshare::error::Result<String> {
//!     std::fs::read_to_string(path).context("Failed to read settings")
//! }
//! ```
//!
//! The binary wraps these in `anyhow` at the top level.

use std::fmt;

/// Main error type for explorer operations.
#[derive(Debug)]
pub enum BikeshareError {
    /// I/O errors (console, files)
    Io(std::io::Error),

    /// Dataframe errors: CSV parsing, missing required columns, bad casts
    DataProcessing(String),

    /// Settings file could not be read or parsed
    Config(String),

    /// Data file not found or invalid path
    InvalidPath(String),

    /// Input stream closed while a prompt was waiting for an answer
    Aborted,

    /// Generic error with context
    Other(String),
}

impl fmt::Display for BikeshareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::Aborted => write!(f, "Input closed before a selection was made"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for BikeshareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

// Console reads and writes, and settings files.
impl From<std::io::Error> for BikeshareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

// Logging setup and other `anyhow` helpers.
impl From<anyhow::Error> for BikeshareError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

/// A malformed `config.json` is a settings problem, not a data problem.
impl From<serde_json::Error> for BikeshareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("settings JSON: {err}"))
    }
}

/// Anything the CSV scan, timestamp parsing or a report query raises.
impl From<polars::error::PolarsError> for BikeshareError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result of loading trips, computing reports or talking to the console.
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// Prefixes an error with what the explorer was doing, e.g. which city file
/// failed to load.
///
/// Aborted prompts, data errors and settings errors keep their variant so
/// callers can still tell them apart.
pub trait ResultExt<T> {
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], building the message only on failure.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<BikeshareError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| wrap(msg.into(), e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| wrap(f(), e.into()))
    }
}

// Keeps the variant where the caller will want to match on it (EOF, bad data);
// everything else collapses into `Other`.
fn wrap(msg: String, err: BikeshareError) -> BikeshareError {
    match err {
        BikeshareError::Aborted => BikeshareError::Aborted,
        BikeshareError::DataProcessing(inner) => {
            BikeshareError::DataProcessing(format!("{msg}: {inner}"))
        }
        BikeshareError::Config(inner) => BikeshareError::Config(format!("{msg}: {inner}")),
        other => BikeshareError::Other(format!("{msg}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BikeshareError::DataProcessing("column not found".to_owned());
        assert_eq!(err.to_string(), "Data processing error: column not found");
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "chicago.csv",
        ));

        let result: Result<()> = result.context("Failed to open trip data");
        let err = result.expect_err("context keeps the error");
        assert!(err.to_string().contains("Failed to open trip data"));
        assert!(err.to_string().contains("chicago.csv"));
    }

    #[test]
    fn test_context_preserves_aborted() {
        let result: Result<()> = Err(BikeshareError::Aborted);
        let result = result.with_context(|| "Reading city".to_owned());
        assert!(matches!(result, Err(BikeshareError::Aborted)));
    }

    #[test]
    fn test_polars_error_is_data_processing() {
        let err: BikeshareError =
            polars::error::PolarsError::ColumnNotFound("Gender".into()).into();
        assert!(matches!(err, BikeshareError::DataProcessing(_)));
    }

    #[test]
    fn test_bad_settings_json_is_config_error() {
        let err: BikeshareError = serde_json::from_str::<serde_json::Value>("{ page_size: }")
            .map_err(BikeshareError::from)
            .expect_err("invalid JSON");
        assert!(matches!(err, BikeshareError::Config(ref msg) if msg.starts_with("settings JSON")));
    }
}
