//! The interactive loop: choose filters, load, report, page, repeat.

pub mod pager;
pub mod prompt;

pub use pager::{RawDataPager, display_raw_data};
pub use prompt::{Choice, confirm, get_filters, prompt_choice};

use crate::config::ExplorerSettings;
use crate::error::Result;
use crate::reports;
use crate::trips::{Filters, load_trips};
use std::io::{BufRead, Write};

pub const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.\n";

/// One console session over an input and output stream.
///
/// Generic over the streams so tests can script stdin with a `Cursor` and
/// capture stdout in a `Vec<u8>`.
pub struct Explorer<R, W> {
    input: R,
    output: W,
    settings: ExplorerSettings,
}

impl<R: BufRead, W: Write> Explorer<R, W> {
    pub fn new(input: R, output: W, settings: ExplorerSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Runs explorations until the user declines to restart. Returns how many
    /// runs completed.
    ///
    /// # Errors
    ///
    /// Propagates load and report failures, and
    /// [`BikeshareError::Aborted`](crate::error::BikeshareError::Aborted) if
    /// input ends during a prompt.
    pub fn run(&mut self) -> Result<usize> {
        let mut runs = 0;
        loop {
            self.run_once()?;
            runs += 1;
            if !confirm(&mut self.input, &mut self.output, RESTART_QUESTION)? {
                break;
            }
        }
        tracing::info!(runs, "Session finished");
        Ok(runs)
    }

    /// One pass: prompt, load, print every report, then offer raw rows.
    ///
    /// # Errors
    ///
    /// See [`Explorer::run`].
    pub fn run_once(&mut self) -> Result<Filters> {
        let filters = get_filters(&mut self.input, &mut self.output)?;
        tracing::info!(%filters, "Starting exploration run");

        let df = load_trips(&self.settings.data_dir, &filters)?;
        if df.height() == 0 {
            writeln!(self.output, "\nNo trips match {filters}.")?;
        }

        reports::run_all(&df, &self.settings, &mut self.output)?;
        display_raw_data(&df, self.settings.page_size, &mut self.input, &mut self.output)?;
        self.output.flush()?;
        Ok(filters)
    }

    /// Hands back the output stream, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}
