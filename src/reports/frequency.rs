//! Counting primitives shared by the reports.
//!
//! Everything here is a Polars group-by with a `len()` aggregation. Null keys
//! are dropped before grouping. Results are sorted by count (descending) and
//! then by key (ascending), so ties resolve to the smallest key.

use crate::error::Result;
use polars::prelude::*;

const COUNTS: &str = "counts";

/// The most frequent key and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequent<K> {
    pub key: K,
    pub count: u32,
}

/// One row of a value-count table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub count: u32,
}

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

fn grouped_counts(df: &DataFrame, columns: &[&str]) -> LazyFrame {
    let keys: Vec<Expr> = columns.iter().map(|name| col(*name)).collect();

    let mut lf = df.clone().lazy();
    if let Some(all_present) = columns
        .iter()
        .map(|name| col(*name).is_not_null())
        .reduce(|acc, next| acc.and(next))
    {
        lf = lf.filter(all_present);
    }

    let sort_by: Vec<Expr> = std::iter::once(col(COUNTS)).chain(keys.clone()).collect();
    let descending: Vec<bool> = std::iter::once(true)
        .chain(columns.iter().map(|_| false))
        .collect();

    lf.group_by(keys)
        .agg([len().alias(COUNTS)])
        .sort_by_exprs(
            sort_by,
            SortMultipleOptions::default().with_order_descending_multi(descending),
        )
}

fn most_common_row(df: &DataFrame, columns: &[&str]) -> Result<Option<DataFrame>> {
    let top = grouped_counts(df, columns).limit(1).collect()?;
    Ok((top.height() > 0).then_some(top))
}

fn count_at(df: &DataFrame, row: usize) -> Result<u32> {
    Ok(df.column(COUNTS)?.get(row)?.try_extract::<u32>()?)
}

/// Renders a cell for display; strings come out unquoted.
pub fn any_value_to_string(value: &AnyValue<'_>) -> String {
    match value.get_str() {
        Some(s) => s.to_owned(),
        None => value.to_string(),
    }
}

/// Most frequent value of a text column.
///
/// # Errors
///
/// Fails when `column` does not exist.
pub fn most_common_str(df: &DataFrame, column: &str) -> Result<Option<Frequent<String>>> {
    let Some(top) = most_common_row(df, &[column])? else {
        return Ok(None);
    };
    let key = any_value_to_string(&top.column(column)?.get(0)?);
    Ok(Some(Frequent {
        key,
        count: count_at(&top, 0)?,
    }))
}

/// Most frequent value of a numeric column, read back as an integer.
///
/// # Errors
///
/// Fails when `column` does not exist or is not numeric.
pub fn most_common_int(df: &DataFrame, column: &str) -> Result<Option<Frequent<i64>>> {
    let Some(top) = most_common_row(df, &[column])? else {
        return Ok(None);
    };
    let key = top.column(column)?.get(0)?.try_extract::<i64>()?;
    Ok(Some(Frequent {
        key,
        count: count_at(&top, 0)?,
    }))
}

/// Most frequent combination of two text columns.
///
/// # Errors
///
/// Fails when either column does not exist.
pub fn most_common_pair(
    df: &DataFrame,
    first: &str,
    second: &str,
) -> Result<Option<Frequent<(String, String)>>> {
    let Some(top) = most_common_row(df, &[first, second])? else {
        return Ok(None);
    };
    let a = any_value_to_string(&top.column(first)?.get(0)?);
    let b = any_value_to_string(&top.column(second)?.get(0)?);
    Ok(Some(Frequent {
        key: (a, b),
        count: count_at(&top, 0)?,
    }))
}

/// Counts of every distinct non-null value in `column`, most frequent first.
///
/// # Errors
///
/// Fails when `column` does not exist.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<Vec<ValueCount>> {
    let counted = grouped_counts(df, &[column]).collect()?;
    let values = counted.column(column)?;

    (0..counted.height())
        .map(|row| -> Result<ValueCount> {
            Ok(ValueCount {
                value: any_value_to_string(&values.get(row)?),
                count: count_at(&counted, row)?,
            })
        })
        .collect()
}
