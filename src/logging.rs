//! Logging for the bikeshare explorer.
//!
//! The console belongs to the interactive prompts, so diagnostics go mostly to
//! rotating files in the app data directory. Only warnings and errors reach
//! the terminal, on stderr.
//!
//! ## Usage
//!
//! ```no_run
//! // Initialize once at startup
//! bikeshare::logging::init(None).expect("Failed to initialize logging");
//!
//! tracing::info!("Explorer started");
//! ```

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Gets the log directory: `override_dir` if given, otherwise the platform
/// data directory.
///
/// Returns:
/// - Windows: `%APPDATA%/bikeshare/logs`
/// - macOS: `~/Library/Application Support/bikeshare/logs`
/// - Linux: `~/.local/share/bikeshare/logs`
pub fn get_log_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let log_dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::data_dir()
            .context("Failed to determine data directory")?
            .join("bikeshare")
            .join("logs"),
    };

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Initializes file and console logging. Returns the log directory in use.
///
/// Creates two daily-rotated log files, keeping 10 of each:
/// - `bikeshare.log`: everything `RUST_LOG` allows (default `info`)
/// - `error.log`: warnings and errors only
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the file
/// appenders fail.
pub fn init(override_dir: Option<&Path>) -> Result<PathBuf> {
    let log_dir = get_log_dir(override_dir)?;

    let all_logs_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(10)
        .filename_prefix("bikeshare")
        .filename_suffix("log")
        .build(&log_dir)
        .context("Failed to create all-logs file appender")?;

    let error_logs_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(10)
        .filename_prefix("error")
        .filename_suffix("log")
        .build(&log_dir)
        .context("Failed to create error-logs file appender")?;

    // Default to INFO, allow override with RUST_LOG
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(EnvFilter::new("warn"));

    let all_logs_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false)
        .with_writer(all_logs_appender);

    let error_logs_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false)
        .with_writer(error_logs_appender)
        .with_filter(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(all_logs_layer)
        .with(error_logs_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized, log directory: {:?}", log_dir);

    Ok(log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_log_dir_override_is_created() -> Result<()> {
        let base = tempfile::tempdir()?;
        let wanted = base.path().join("nested").join("logs");
        let log_dir = get_log_dir(Some(&wanted))?;
        assert_eq!(log_dir, wanted);
        assert!(log_dir.is_dir());
        Ok(())
    }
}
