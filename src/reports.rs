//! The four statistics sections printed after each load.
//!
//! Each section computes a typed report from the filtered trip table and then
//! renders it. [`run_all`] prints them in the classic order: travel times,
//! stations, trip durations, users.

pub mod duration;
pub mod frequency;
pub mod stations;
pub mod time;
pub mod users;

pub use duration::DurationReport;
pub use frequency::{Frequent, ValueCount};
pub use stations::StationReport;
pub use time::TimeReport;
pub use users::{BirthYearStats, UserReport};

use crate::config::ExplorerSettings;
use crate::error::Result;
use polars::prelude::DataFrame;
use std::io::{self, Write};
use std::time::Instant;

pub const RULE_WIDTH: usize = 40;

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Computes and prints every report section for `df`.
///
/// # Errors
///
/// Fails if a required column is missing or the output cannot be written.
pub fn run_all<W: Write>(df: &DataFrame, settings: &ExplorerSettings, out: &mut W) -> Result<()> {
    let limit = settings.max_listed_values;
    let timed = settings.show_timings;

    section(out, timed, "Calculating The Most Frequent Times of Travel...", |out| {
        Ok(TimeReport::compute(df)?.render(out)?)
    })?;
    section(out, timed, "Calculating The Most Popular Stations and Trip...", |out| {
        Ok(StationReport::compute(df)?.render(out)?)
    })?;
    section(out, timed, "Calculating Trip Duration...", |out| {
        Ok(DurationReport::compute(df)?.render(out, limit)?)
    })?;
    section(out, timed, "Calculating User Stats...", |out| {
        Ok(UserReport::compute(df)?.render(out, limit)?)
    })?;

    tracing::debug!(rows = df.height(), "Rendered all report sections");
    Ok(())
}

fn section<W, F>(out: &mut W, show_timing: bool, heading: &str, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<()>,
{
    writeln!(out, "\n{heading}\n")?;
    let started = Instant::now();
    body(out)?;
    if show_timing {
        writeln!(out, "\nThis took {:.4} seconds.", started.elapsed().as_secs_f64())?;
    }
    writeln!(out, "{}", rule())?;
    Ok(())
}

/// Prints a titled value-count listing, at most `limit` entries long.
pub(crate) fn write_counts<W: Write>(
    out: &mut W,
    title: &str,
    counts: &[ValueCount],
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "\n{title}:")?;
    if counts.is_empty() {
        return writeln!(out, "  (no data)");
    }
    for entry in counts.iter().take(limit) {
        writeln!(out, "  {}: {}", entry.value, entry.count)?;
    }
    if counts.len() > limit {
        writeln!(out, "  … and {} more", counts.len() - limit)?;
    }
    Ok(())
}
