use super::frequency::{ValueCount, has_column, most_common_int, value_counts};
use super::write_counts;
use crate::error::Result;
use crate::trips::{BIRTH_YEAR, GENDER, USER_TYPE};
use polars::prelude::*;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: Option<i64>,
    pub most_recent: Option<i64>,
    pub most_common: Option<i64>,
}

/// User demographics. Gender and birth year are `None` when the city's log
/// does not record them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReport {
    pub user_types: Vec<ValueCount>,
    pub genders: Option<Vec<ValueCount>>,
    pub birth_years: Option<BirthYearStats>,
}

impl UserReport {
    /// # Errors
    ///
    /// Fails when `User Type` is missing, or `Birth Year` exists but is not
    /// numeric.
    pub fn compute(df: &DataFrame) -> Result<Self> {
        let user_types = value_counts(df, USER_TYPE)?;

        let genders = if has_column(df, GENDER) {
            Some(value_counts(df, GENDER)?)
        } else {
            tracing::debug!("No {GENDER} column in trip data");
            None
        };

        let birth_years = if has_column(df, BIRTH_YEAR) {
            Some(birth_year_stats(df)?)
        } else {
            tracing::debug!("No {BIRTH_YEAR} column in trip data");
            None
        };

        Ok(Self {
            user_types,
            genders,
            birth_years,
        })
    }

    pub fn render<W: Write>(&self, out: &mut W, limit: usize) -> io::Result<()> {
        write_counts(out, "Count of User Types", &self.user_types, limit)?;

        match &self.genders {
            Some(genders) => write_counts(out, "Count of Genders", genders, limit)?,
            None => writeln!(out, "\nGender Data Unavailable")?,
        }

        match &self.birth_years {
            Some(years) => {
                writeln!(out, "\nEarliest Birth Year: {}", year(years.earliest))?;
                writeln!(out, "Most Recent Birth Year: {}", year(years.most_recent))?;
                writeln!(out, "Most Common Birth Year: {}", year(years.most_common))
            }
            None => writeln!(out, "\nBirth Year Data Unavailable"),
        }
    }
}

// Birth years arrive as floats because missing values force a float column.
fn birth_year_stats(df: &DataFrame) -> Result<BirthYearStats> {
    let years = df
        .column(BIRTH_YEAR)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;

    Ok(BirthYearStats {
        earliest: years.min::<f64>()?.map(|y| y.round() as i64),
        most_recent: years.max::<f64>()?.map(|y| y.round() as i64),
        most_common: most_common_int(df, BIRTH_YEAR)?.map(|top| top.key),
    })
}

fn year(value: Option<i64>) -> String {
    value.map_or_else(|| "—".to_owned(), |y| y.to_string())
}
