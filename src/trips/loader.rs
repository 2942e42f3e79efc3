use super::filters::{Filters, Selection, weekday_name};
use super::{DAY_OF_WEEK, END_TIME, HOUR, MONTH, START_TIME};
use crate::error::{BikeshareError, Result, ResultExt as _};
use chrono::{Month, Weekday};
use polars::prelude::*;
use std::path::Path;

/// Loads the trip table for `filters.city` from `data_dir` and narrows it to
/// the selected month and weekday.
///
/// # Errors
///
/// Returns [`BikeshareError::InvalidPath`] when the city's CSV is missing, and
/// a data-processing error when the file cannot be parsed or lacks a
/// `Start Time` column.
pub fn load_trips(data_dir: &Path, filters: &Filters) -> Result<DataFrame> {
    let path = data_dir.join(filters.city.file_name());
    if !path.is_file() {
        return Err(BikeshareError::InvalidPath(format!(
            "no trip data for {} at {}",
            filters.city,
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), "Scanning trip CSV");
    let lf = LazyCsvReader::new(&path)
        .with_infer_schema_length(Some(10000))
        .with_has_header(true)
        .with_try_parse_dates(true)
        .finish()
        .with_context(|| format!("Failed to scan {}", path.display()))?;

    let raw = lf
        .collect()
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let trips = parse_timestamps(raw)?;
    let df = apply_filters(derive_time_columns(trips.lazy())?, filters.month, filters.day)
        .collect()
        .with_context(|| format!("Failed to filter {}", path.display()))?;

    tracing::info!(
        city = filters.city.name(),
        filters = %filters,
        rows = df.height(),
        "Loaded trip data"
    );
    Ok(df)
}

/// Timestamp layouts tried, in order, on text `Start Time`/`End Time` cells.
pub const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%m/%d/%Y %H:%M:%S", "%m/%d/%Y %H:%M"];

/// Makes sure `Start Time` (and `End Time`, when present) are datetimes.
///
/// The CSV reader usually parses them already. Text columns are parsed with
/// [`TIMESTAMP_FORMATS`] into millisecond datetimes.
///
/// # Errors
///
/// Fails when `Start Time` is missing, or when a non-empty cell matches none
/// of the known layouts.
pub fn parse_timestamps(df: DataFrame) -> Result<DataFrame> {
    if df.column(START_TIME).is_err() {
        return Err(BikeshareError::DataProcessing(format!(
            "missing required column `{START_TIME}`"
        )));
    }

    let text_columns: Vec<(&str, usize)> = [START_TIME, END_TIME]
        .into_iter()
        .filter_map(|name| {
            let column = df.column(name).ok()?;
            (column.dtype() == &DataType::String).then_some((name, column.null_count()))
        })
        .collect();
    if text_columns.is_empty() {
        return Ok(df);
    }

    let exprs: Vec<Expr> = text_columns
        .iter()
        .map(|(name, _)| timestamp_expr(name))
        .collect();
    let parsed = df.lazy().with_columns(exprs).collect()?;

    for (name, nulls_before) in text_columns {
        let nulls_after = parsed.column(name)?.null_count();
        if nulls_after > nulls_before {
            return Err(BikeshareError::DataProcessing(format!(
                "{} of {} `{name}` values are not timestamps",
                nulls_after - nulls_before,
                parsed.height()
            )));
        }
    }
    tracing::debug!("Parsed text timestamps");
    Ok(parsed)
}

// First layout that parses wins; unmatched cells stay null.
fn timestamp_expr(name: &str) -> Expr {
    TIMESTAMP_FORMATS
        .iter()
        .map(|format| {
            col(name).str().to_datetime(
                Some(TimeUnit::Milliseconds),
                None,
                StrptimeOptions {
                    format: Some((*format).into()),
                    strict: false,
                    exact: true,
                    cache: true,
                },
                lit("raise"),
            )
        })
        .reduce(|parsed, fallback| parsed.fill_null(fallback))
        .unwrap_or_else(|| col(name))
        .alias(name)
}

/// Adds the `month` (1-12), `day_of_week` ("Monday".."Sunday") and `hour`
/// (0-23) columns derived from `Start Time`.
///
/// # Errors
///
/// Fails when the frame has no `Start Time` column.
pub fn derive_time_columns(mut lf: LazyFrame) -> Result<LazyFrame> {
    let schema = lf.collect_schema()?;
    match schema.get(START_TIME) {
        Some(DataType::Datetime(..) | DataType::Date) => {}
        Some(dtype) => {
            return Err(BikeshareError::DataProcessing(format!(
                "`{START_TIME}` is {dtype}, expected a datetime"
            )));
        }
        None => {
            return Err(BikeshareError::DataProcessing(format!(
                "missing required column `{START_TIME}`"
            )));
        }
    }

    Ok(lf.with_columns([
        col(START_TIME).dt().month().alias(MONTH),
        weekday_name_expr(),
        col(START_TIME).dt().hour().alias(HOUR),
    ]))
}

// Polars numbers weekdays ISO-style, Monday = 1.
fn weekday_name_expr() -> Expr {
    let weekday = col(START_TIME).dt().weekday();
    let is = |day: Weekday| weekday.clone().eq(lit(day.number_from_monday()));

    when(is(Weekday::Mon))
        .then(lit(weekday_name(Weekday::Mon)))
        .when(is(Weekday::Tue))
        .then(lit(weekday_name(Weekday::Tue)))
        .when(is(Weekday::Wed))
        .then(lit(weekday_name(Weekday::Wed)))
        .when(is(Weekday::Thu))
        .then(lit(weekday_name(Weekday::Thu)))
        .when(is(Weekday::Fri))
        .then(lit(weekday_name(Weekday::Fri)))
        .when(is(Weekday::Sat))
        .then(lit(weekday_name(Weekday::Sat)))
        .when(is(Weekday::Sun))
        .then(lit(weekday_name(Weekday::Sun)))
        .otherwise(lit(NULL))
        .alias(DAY_OF_WEEK)
}

/// Restricts a frame with derived time columns to the selected month and day.
/// `Selection::All` leaves the frame untouched.
pub fn apply_filters(
    lf: LazyFrame,
    month: Selection<Month>,
    day: Selection<Weekday>,
) -> LazyFrame {
    let lf = match month {
        Selection::All => lf,
        Selection::Only(month) => lf.filter(col(MONTH).eq(lit(month.number_from_month()))),
    };
    match day {
        Selection::All => lf,
        Selection::Only(day) => lf.filter(col(DAY_OF_WEEK).eq(lit(weekday_name(day)))),
    }
}
