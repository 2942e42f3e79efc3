use super::frequency::{ValueCount, value_counts};
use super::write_counts;
use crate::error::Result;
use crate::trips::TRIP_DURATION;
use crate::utils::{fmt_opt, fmt_seconds};
use polars::prelude::*;
use std::io::{self, Write};

/// Trip duration aggregates, all in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationReport {
    /// How many trips lasted exactly each duration, most common first.
    pub counts: Vec<ValueCount>,
    pub total: f64,
    /// `None` when no trip has a duration.
    pub mean: Option<f64>,
}

impl DurationReport {
    /// # Errors
    ///
    /// Fails when `Trip Duration` is missing or not numeric.
    pub fn compute(df: &DataFrame) -> Result<Self> {
        let durations = df
            .column(TRIP_DURATION)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;

        Ok(Self {
            counts: value_counts(df, TRIP_DURATION)?,
            total: durations.sum::<f64>()?,
            mean: durations.mean(),
        })
    }

    pub fn render<W: Write>(&self, out: &mut W, limit: usize) -> io::Result<()> {
        writeln!(
            out,
            "Total Travel Time: {:.2} seconds ({})",
            self.total,
            fmt_seconds(self.total)
        )?;
        write_counts(out, "Trip Duration Counts (seconds)", &self.counts, limit)?;
        writeln!(
            out,
            "\nAverage Travel Time: {} seconds ({})",
            fmt_opt(self.mean),
            self.mean.map_or_else(|| "—".to_owned(), fmt_seconds)
        )
    }
}
