use super::frequency::{Frequent, most_common_pair, most_common_str};
use crate::error::Result;
use crate::trips::{END_STATION, START_STATION};
use polars::prelude::DataFrame;
use std::io::{self, Write};

/// Most popular start station, end station and start/end combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationReport {
    pub start: Option<Frequent<String>>,
    pub end: Option<Frequent<String>>,
    pub trip: Option<Frequent<(String, String)>>,
}

impl StationReport {
    /// # Errors
    ///
    /// Fails when either station column is missing.
    pub fn compute(df: &DataFrame) -> Result<Self> {
        Ok(Self {
            start: most_common_str(df, START_STATION)?,
            end: most_common_str(df, END_STATION)?,
            trip: most_common_pair(df, START_STATION, END_STATION)?,
        })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.start {
            Some(top) => writeln!(out, "Most Common Start Station: {} ({} trips)", top.key, top.count)?,
            None => writeln!(out, "Most Common Start Station: —")?,
        }
        match &self.end {
            Some(top) => writeln!(out, "Most Common End Station: {} ({} trips)", top.key, top.count)?,
            None => writeln!(out, "Most Common End Station: —")?,
        }
        match &self.trip {
            Some(Frequent { key: (from, to), count }) => writeln!(
                out,
                "Most Common Trip: {from} -> {to} ({count} trips)"
            ),
            None => writeln!(out, "Most Common Trip: —"),
        }
    }
}
