//! Console prompts.
//!
//! Each prompt writes its question, reads one line and validates it. Invalid
//! answers print a generic retry message and ask again, indefinitely. End of
//! input is the only way out of a prompt without a valid answer.

use crate::error::{BikeshareError, Result};
use crate::reports::rule;
use crate::trips::filters::{City, Filters, Selection, parse_day, parse_month};
use chrono::{Month, Weekday};
use std::io::{BufRead, Write};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const RETRY_MESSAGE: &str = "Check spelling, try again";

/// A value picked from a fixed vocabulary at a prompt.
pub trait Choice: Sized {
    const QUESTION: &'static str;

    fn parse_choice(input: &str) -> Option<Self>;
}

impl Choice for City {
    const QUESTION: &'static str = "Choose City- Chicago, New York City or Washington: ";

    fn parse_choice(input: &str) -> Option<Self> {
        Self::parse(input)
    }
}

impl Choice for Selection<Month> {
    const QUESTION: &'static str = "Choose Month- all, or january, february, march, april, may, june, \
         july, august, september, october, november, december: ";

    fn parse_choice(input: &str) -> Option<Self> {
        parse_month(input)
    }
}

impl Choice for Selection<Weekday> {
    const QUESTION: &'static str =
        "Choose Day- all, monday, tuesday, wednesday, thursday, friday, saturday, sunday: ";

    fn parse_choice(input: &str) -> Option<Self> {
        parse_day(input)
    }
}

/// Writes `question` and reads one line. Returns `None` at end of input.
///
/// # Errors
///
/// Fails if the console cannot be read or written.
pub fn read_answer<R, W>(input: &mut R, output: &mut W, question: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Asks for a `T` until the answer is in its vocabulary.
///
/// # Errors
///
/// Returns [`BikeshareError::Aborted`] if input ends before a valid answer.
pub fn prompt_choice<T, R, W>(input: &mut R, output: &mut W) -> Result<T>
where
    T: Choice,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(answer) = read_answer(input, output, T::QUESTION)? else {
            return Err(BikeshareError::Aborted);
        };
        if let Some(choice) = T::parse_choice(&answer) {
            return Ok(choice);
        }
        tracing::debug!(answer = answer.trim(), "Rejected selection");
        writeln!(output, "{RETRY_MESSAGE}")?;
    }
}

/// Greets the user and collects city, month and day, in that order.
///
/// # Errors
///
/// Returns [`BikeshareError::Aborted`] if input ends mid-way.
pub fn get_filters<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Filters> {
    writeln!(output, "{GREETING}")?;

    let city: City = prompt_choice(input, output)?;
    let month: Selection<Month> = prompt_choice(input, output)?;
    let day: Selection<Weekday> = prompt_choice(input, output)?;

    writeln!(output, "{}", rule())?;
    Ok(Filters::new(city).with_month(month).with_day(day))
}

/// Yes/no question. Only `yes` (any case) counts as agreement; end of input
/// counts as no.
///
/// # Errors
///
/// Fails if the console cannot be read or written.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    let answer = read_answer(input, output, question)?;
    Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("yes")))
}
