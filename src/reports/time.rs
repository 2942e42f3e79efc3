use super::frequency::{most_common_int, most_common_str};
use crate::error::Result;
use crate::trips::filters::month_from_number;
use crate::trips::{DAY_OF_WEEK, HOUR, MONTH};
use chrono::Month;
use polars::prelude::DataFrame;
use std::io::{self, Write};

/// Most frequent month, weekday and start hour. Every field is `None` for an
/// empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReport {
    pub month: Option<Month>,
    pub day: Option<String>,
    pub hour: Option<u32>,
}

impl TimeReport {
    /// # Errors
    ///
    /// Fails when the derived time columns are missing.
    pub fn compute(df: &DataFrame) -> Result<Self> {
        let month = most_common_int(df, MONTH)?
            .and_then(|top| u32::try_from(top.key).ok())
            .and_then(month_from_number);
        let day = most_common_str(df, DAY_OF_WEEK)?.map(|top| top.key);
        let hour = most_common_int(df, HOUR)?.and_then(|top| u32::try_from(top.key).ok());

        Ok(Self { month, day, hour })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let month = self.month.map_or("—", |m| m.name());
        let day = self.day.as_deref().unwrap_or("—");
        let hour = self
            .hour
            .map_or_else(|| "—".to_owned(), |h| h.to_string());

        writeln!(out, "Most Frequent Month: {month}")?;
        writeln!(out, "Most Frequent Day: {day}")?;
        writeln!(out, "Most Frequent Hour: {hour}")
    }
}
