//! Integration tests for the full explorer workflow
//!
//! These tests run complete console sessions against the fixture trip logs in
//! `testdata/` and check the printed statistics.

use anyhow::Result;
use bikeshare::config::ExplorerSettings;
use bikeshare::error::BikeshareError;
use bikeshare::session::Explorer;
use bikeshare::trips::{City, Filters, Selection, load_trips};
use chrono::{Month, Weekday};
use std::io::Cursor;
use std::path::PathBuf;

fn testdata() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn settings() -> ExplorerSettings {
    ExplorerSettings {
        data_dir: testdata(),
        show_timings: false,
        ..ExplorerSettings::default()
    }
}

fn session(script: &str) -> (bikeshare::error::Result<usize>, String) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut explorer = Explorer::new(input, Vec::new(), settings());
    let result = explorer.run();
    let transcript = String::from_utf8_lossy(&explorer.into_output()).into_owned();
    (result, transcript)
}

#[test]
fn test_load_without_filters_keeps_every_row() -> Result<()> {
    let df = load_trips(&testdata(), &Filters::new(City::Chicago))?;
    assert_eq!(df.height(), 8);
    for derived in ["month", "day_of_week", "hour"] {
        assert!(df.get_column_index(derived).is_some(), "missing {derived}");
    }
    Ok(())
}

#[test]
fn test_month_filter() -> Result<()> {
    let june = Filters::new(City::Chicago).with_month(Selection::Only(Month::June));
    assert_eq!(load_trips(&testdata(), &june)?.height(), 5);

    let march = Filters::new(City::Chicago).with_month(Selection::Only(Month::March));
    assert_eq!(load_trips(&testdata(), &march)?.height(), 1);
    Ok(())
}

#[test]
fn test_day_filter() -> Result<()> {
    let mondays = Filters::new(City::Chicago).with_day(Selection::Only(Weekday::Mon));
    let df = load_trips(&testdata(), &mondays)?;
    assert_eq!(df.height(), 5);

    let days = df.column("day_of_week")?.as_materialized_series().clone();
    assert!(days.str()?.into_iter().all(|d| d == Some("Monday")));
    Ok(())
}

#[test]
fn test_month_and_day_filters_combine() -> Result<()> {
    let filters = Filters::new(City::Chicago)
        .with_month(Selection::Only(Month::June))
        .with_day(Selection::Only(Weekday::Mon));
    assert_eq!(load_trips(&testdata(), &filters)?.height(), 3);
    Ok(())
}

#[test]
fn test_washington_has_no_demographics() -> Result<()> {
    let df = load_trips(&testdata(), &Filters::new(City::Washington))?;
    assert_eq!(df.height(), 5);
    assert!(df.get_column_index("Gender").is_none());
    Ok(())
}

#[test]
fn test_timestamps_left_as_text_are_parsed() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("chicago.csv"),
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
         6/23/2017 15:09,6/23/2017 15:20,660,Canal St,Lake St,Subscriber\n\
         3/14/2017 08:01,3/14/2017 08:30,1740,Lake St,Canal St,Customer\n",
    )?;

    let all = load_trips(dir.path(), &Filters::new(City::Chicago))?;
    assert_eq!(all.height(), 2);
    assert_eq!(all.column("Start Time")?.null_count(), 0);
    assert_eq!(all.column("hour")?.null_count(), 0);

    let june = Filters::new(City::Chicago)
        .with_month(Selection::Only(Month::June))
        .with_day(Selection::Only(Weekday::Fri));
    assert_eq!(load_trips(dir.path(), &june)?.height(), 1);
    Ok(())
}

#[test]
fn test_missing_data_dir_is_invalid_path() {
    let result = load_trips(
        &testdata().join("does_not_exist"),
        &Filters::new(City::Chicago),
    );
    assert!(matches!(result, Err(BikeshareError::InvalidPath(_))));
}

#[test]
fn test_chicago_session() {
    let (result, transcript) = session("Chicago\nall\nall\nno\nno\n");

    assert_eq!(result.ok(), Some(1));
    assert!(transcript.contains("Most Frequent Month: June"));
    assert!(transcript.contains("Most Frequent Day: Monday"));
    assert!(transcript.contains("Most Frequent Hour: 17"));
    assert!(transcript.contains("Most Common Start Station: Canal St & Adams St (4 trips)"));
    assert!(transcript.contains("Most Common End Station: Clinton St & Madison St (3 trips)"));
    assert!(
        transcript.contains("Most Common Trip: Canal St & Adams St -> Clinton St & Madison St (3 trips)")
    );
    assert!(transcript.contains("Total Travel Time: 5426.00 seconds"));
    assert!(transcript.contains("Average Travel Time: 678.25 seconds"));
    assert!(transcript.contains("Subscriber: 6"));
    assert!(transcript.contains("Customer: 2"));
    assert!(transcript.contains("Male: 4"));
    assert!(transcript.contains("Female: 2"));
    assert!(transcript.contains("Earliest Birth Year: 1975"));
    assert!(transcript.contains("Most Recent Birth Year: 1992"));
    assert!(transcript.contains("Most Common Birth Year: 1987"));
}

#[test]
fn test_washington_session_reports_unavailable_demographics() {
    let (result, transcript) = session("washington\nall\nall\nno\nno\n");

    assert_eq!(result.ok(), Some(1));
    assert!(transcript.contains("Gender Data Unavailable"));
    assert!(transcript.contains("Birth Year Data Unavailable"));
    assert!(transcript.contains("Most Frequent Month: March"));
    // Monday and Saturday tie on two trips each.
    assert!(transcript.contains("Most Frequent Day: Monday"));
}

#[test]
fn test_invalid_answers_are_asked_again() {
    let (result, transcript) =
        session("boston\nnew york city\njuly1\nfebruary\nfunday\nwednesday\nno\nno\n");

    assert_eq!(result.ok(), Some(1));
    assert_eq!(transcript.matches("Check spelling, try again").count(), 3);
    assert!(transcript.contains("Most Frequent Month: February"));
    assert!(transcript.contains("Most Frequent Day: Wednesday"));
}

#[test]
fn test_pager_inside_session() {
    let (result, transcript) = session("chicago\nall\nall\nyes\nyes\nno\n");

    assert_eq!(result.ok(), Some(1));
    assert_eq!(transcript.matches("Do you wish to see the next 5 rows").count(), 1);
    assert!(transcript.contains("No more rows to display."));
}

#[test]
fn test_restart_runs_again() {
    let script = "chicago\njune\nall\nno\nyes\nnew york city\nall\nsaturday\nno\nNO\n";
    let (result, transcript) = session(script);

    assert_eq!(result.ok(), Some(2));
    assert_eq!(
        transcript
            .matches("Hello! Let's explore some US bikeshare data!")
            .count(),
        2
    );
    assert!(transcript.contains("Most Common Start Station: Central Park S & 6 Ave (2 trips)"));
}

#[test]
fn test_filter_with_no_matches_still_reports() {
    let (result, transcript) = session("washington\ndecember\nall\nno\n");

    assert_eq!(result.ok(), Some(1));
    assert!(transcript.contains("No trips match Washington (December, all days)."));
    assert!(transcript.contains("Most Frequent Month: —"));
    assert!(transcript.contains("No trips to display."));
}

#[test]
fn test_closed_input_aborts() {
    let (result, _) = session("chicago\n");
    assert!(matches!(result, Err(BikeshareError::Aborted)));
}
