//! Trip table loading and filtering.
//!
//! A trip table is a Polars `DataFrame` with one row per rental. The source
//! CSV columns are named by the constants below; [`loader`] adds the derived
//! `month`, `day_of_week` and `hour` columns.

pub mod filters;
pub mod loader;

pub use filters::{City, Filters, Selection};
pub use loader::{apply_filters, derive_time_columns, load_trips, parse_timestamps};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
/// Optional: not every city records it.
pub const GENDER: &str = "Gender";
/// Optional: not every city records it.
pub const BIRTH_YEAR: &str = "Birth Year";

// Derived on load.
pub const MONTH: &str = "month";
pub const DAY_OF_WEEK: &str = "day_of_week";
pub const HOUR: &str = "hour";
