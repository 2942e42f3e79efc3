//! # Bikeshare Explorer Entry Point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Initialize logging (tracing, rolling files)
//!   ├─> Load settings (JSON file + CLI overrides)
//!   └─> Run the interactive explorer on stdin/stdout
//! ```

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use anyhow::{Context as _, Result};
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    bikeshare::logging::init(cli.log_dir.as_deref()).context("Failed to initialize logging")?;

    cli::run(&cli)
}
