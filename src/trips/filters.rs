//! City, month and weekday selections.
//!
//! Every selection is parsed from free text, trimmed and matched
//! case-insensitively against a fixed vocabulary. Months and weekdays reuse
//! [`chrono::Month`] and [`chrono::Weekday`] for their numbering.

use chrono::{Month, Weekday};
use std::fmt;

/// One of the three cities with a trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [Self; 3] = [Self::Chicago, Self::NewYorkCity, Self::Washington];

    /// Lowercase name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        }
    }

    /// CSV file holding this city's trips, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let wanted = normalise(input);
        Self::ALL.into_iter().find(|city| city.name() == wanted)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Either no restriction, or a single value to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn as_only(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Title-case weekday name, matching the derived `day_of_week` column.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Month for a 1-based month number, as produced by the `month` column.
pub fn month_from_number(number: u32) -> Option<Month> {
    let index = usize::try_from(number.checked_sub(1)?).ok()?;
    MONTHS.get(index).copied()
}

pub fn parse_month(input: &str) -> Option<Selection<Month>> {
    let wanted = normalise(input);
    if wanted == "all" {
        return Some(Selection::All);
    }
    MONTHS
        .into_iter()
        .find(|month| month.name().eq_ignore_ascii_case(&wanted))
        .map(Selection::Only)
}

pub fn parse_day(input: &str) -> Option<Selection<Weekday>> {
    let wanted = normalise(input);
    if wanted == "all" {
        return Some(Selection::All);
    }
    WEEKDAYS
        .into_iter()
        .find(|day| weekday_name(*day).eq_ignore_ascii_case(&wanted))
        .map(Selection::Only)
}

fn normalise(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A complete set of choices for one exploration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: Selection<Month>,
    pub day: Selection<Weekday>,
}

impl Filters {
    pub fn new(city: City) -> Self {
        Self {
            city,
            month: Selection::All,
            day: Selection::All,
        }
    }

    pub fn with_month(mut self, month: Selection<Month>) -> Self {
        self.month = month;
        self
    }

    pub fn with_day(mut self, day: Selection<Weekday>) -> Self {
        self.day = day;
        self
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month.as_only().map_or("all months", |m| m.name());
        let day = self.day.as_only().map_or("all days", |d| weekday_name(*d));
        write!(f, "{} ({month}, {day})", self.city)
    }
}
