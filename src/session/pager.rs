use super::prompt::confirm;
use crate::error::Result;
use crate::reports::frequency::any_value_to_string;
use polars::prelude::DataFrame;
use std::io::{BufRead, Write};

/// Walks a trip table a fixed number of rows at a time.
#[derive(Debug, Clone)]
pub struct RawDataPager {
    offset: usize,
    page_size: usize,
}

impl RawDataPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_exhausted(&self, df: &DataFrame) -> bool {
        self.offset >= df.height()
    }

    /// Next `page_size` rows, or fewer at the end of the table. `None` once
    /// every row has been returned.
    pub fn next_page(&mut self, df: &DataFrame) -> Option<DataFrame> {
        if self.is_exhausted(df) {
            return None;
        }
        let start = i64::try_from(self.offset).ok()?;
        let page = df.slice(start, self.page_size);
        self.offset += page.height();
        Some(page)
    }
}

/// Offers the raw rows of `df`, one page per "yes". Any other answer stops.
///
/// Returns the number of rows shown.
///
/// # Errors
///
/// Fails if the console cannot be read or written.
pub fn display_raw_data<R, W>(
    df: &DataFrame,
    page_size: usize,
    input: &mut R,
    output: &mut W,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    if df.height() == 0 {
        writeln!(output, "\nNo trips to display.")?;
        return Ok(0);
    }

    let mut pager = RawDataPager::new(page_size);
    let first = format!(
        "\nWould you like to view the first {page_size} rows of individual trip data? Enter yes or no\n"
    );
    let next = format!("Do you wish to see the next {page_size} rows?: Enter yes or no.\n");

    let mut question = first.as_str();
    while confirm(input, output, question)? {
        let Some(page) = pager.next_page(df) else {
            break;
        };
        write_rows(output, &page, pager.offset() - page.height())?;

        if pager.is_exhausted(df) {
            writeln!(output, "No more rows to display.")?;
            break;
        }
        question = next.as_str();
    }

    tracing::debug!(rows_shown = pager.offset(), total = df.height(), "Raw data viewer closed");
    Ok(pager.offset())
}

/// Prints every row of `page` as a block of `column: value` lines, numbered
/// from `first_row`. Every column is shown however wide the table is.
///
/// # Errors
///
/// Fails if the output cannot be written or a cell cannot be read.
pub fn write_rows<W: Write>(output: &mut W, page: &DataFrame, first_row: usize) -> Result<()> {
    let columns = page.get_columns();
    let width = columns.iter().map(|c| c.name().chars().count()).max().unwrap_or(0);

    for row in 0..page.height() {
        writeln!(output, "\n[Row {}]", first_row + row)?;
        for column in columns {
            let value = any_value_to_string(&column.get(row)?);
            writeln!(output, "  {:<width$}  {value}", format!("{}:", column.name()), width = width + 1)?;
        }
    }
    Ok(())
}
