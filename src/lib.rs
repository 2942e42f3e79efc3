//! # Bikeshare - Interactive Trip Statistics
//!
//! Explore US bikeshare trip logs from the console. Pick a city, optionally
//! narrow to one month and one weekday, and the explorer prints:
//!
//! - the most frequent month, weekday and start hour
//! - the most popular start station, end station and trip
//! - total, average and per-value trip durations
//! - user type counts, plus gender and birth-year statistics where recorded
//!
//! and then pages through the raw rows five at a time.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bikeshare::reports::TimeReport;
//! use bikeshare::trips::{City, Filters, load_trips};
//!
//! # fn example() -> bikeshare::error::Result<()> {
//! let df = load_trips(std::path::Path::new("data"), &Filters::new(City::Chicago))?;
//! let report = TimeReport::compute(&df)?;
//! println!("Busiest hour: {:?}", report.hour);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`trips`]: CSV loading, derived time columns and month/day filters
//! - [`reports`]: The four statistics sections
//! - [`session`]: Prompts, the raw-data pager and the outer loop
//! - [`config`]: Settings file and command-line overrides
//! - [`logging`]: `tracing` subscriber with rolling log files
//! - [`error`]: Error types and handling utilities
//!
//! All counting and aggregation is delegated to Polars: group-by counts for
//! modes, `mean`/`sum`/`min`/`max` on the duration and birth-year columns.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod logging;
pub mod reports;
pub mod session;
pub mod trips;
pub mod utils;
