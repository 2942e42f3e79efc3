use anyhow::{Context as _, Result};
use bikeshare::config::{ExplorerSettings, SettingsOverrides, load_settings};
use bikeshare::error::BikeshareError;
use bikeshare::session::Explorer;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version,
    about = "Explore US bikeshare trip data from the console"
)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, env = "BIKESHARE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Rows shown per page in the raw-data viewer
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// Path to a JSON settings file. Defaults to <config dir>/bikeshare/config.json
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not print how long each statistics section took
    #[arg(long)]
    pub no_timings: bool,

    /// Write log files here instead of the platform data directory
    #[arg(long, env = "BIKESHARE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            data_dir: self.data_dir.clone(),
            page_size: self.page_size.map(usize::from),
            show_timings: self.no_timings.then_some(false),
        }
    }

    pub fn settings(&self) -> Result<ExplorerSettings> {
        let settings = load_settings(self.config.as_deref())
            .context("Failed to load settings")?
            .with_overrides(self.overrides())
            .validate()?;
        Ok(settings)
    }
}

/// Runs the interactive explorer on the process's stdin and stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    tracing::info!(data_dir = %settings.data_dir.display(), "Starting explorer");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut explorer = Explorer::new(stdin.lock(), stdout.lock(), settings);

    match explorer.run() {
        Ok(_) => Ok(()),
        Err(BikeshareError::Aborted) => {
            tracing::info!("Input closed, exiting");
            Ok(())
        }
        Err(err) => Err(err).context("Exploration failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "bikeshare",
            "--data-dir",
            "/data",
            "--page-size",
            "10",
            "--no-timings",
        ])
        .expect("valid arguments");
        let overrides = cli.overrides();
        assert_eq!(overrides.data_dir, Some(PathBuf::from("/data")));
        assert_eq!(overrides.page_size, Some(10));
        assert_eq!(overrides.show_timings, Some(false));
    }

    #[test]
    fn zero_page_size_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["bikeshare", "--page-size", "0"]).is_err());
    }

    #[test]
    fn timings_flag_absent_keeps_file_value() {
        let cli = Cli::try_parse_from(["bikeshare"]).expect("no arguments is valid");
        assert_eq!(cli.overrides().show_timings, None);
    }
}
