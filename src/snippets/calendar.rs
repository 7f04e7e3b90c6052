//! Calendar queries
//!
//! Two groups: reading fields off a date, and walking to the edges of a
//! month. The boundary entries use first-of-next-month minus one day, which
//! handles leap years without a lookup table.

use chrono::{Datelike, Months, NaiveDate};

use super::SnippetResult;
use crate::catalog::{Entry, ExampleGroup};

pub(super) fn fields() -> ExampleGroup {
    ExampleGroup::new(
        "Inspecting calendar fields",
        vec![
            Entry::new(WEEKDAY_SRC, weekday),
            Entry::new(DAY_OF_YEAR_SRC, day_of_year),
            Entry::new(LEAP_YEAR_SRC, leap_year),
            Entry::new(ISO_WEEK_SRC, iso_week),
        ],
    )
}

pub(super) fn boundaries() -> ExampleGroup {
    ExampleGroup::new(
        "Month boundaries",
        vec![
            Entry::new(MONTH_START_SRC, month_start),
            Entry::new(MONTH_END_SRC, month_end),
            Entry::new(LEAP_FEBRUARY_SRC, leap_february),
        ],
    )
}

const WEEKDAY_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
date.weekday().to_string()"#;

#[rustfmt::skip]
fn weekday() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    Ok(date.weekday().to_string())
}

const DAY_OF_YEAR_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
format!("day {} of {}", date.ordinal(), date.year())"#;

#[rustfmt::skip]
fn day_of_year() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    Ok(format!("day {} of {}", date.ordinal(), date.year()))
}

const LEAP_YEAR_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2024, 2, 1)
    .ok_or("not a real calendar day")?;
format!("{}", date.leap_year())"#;

#[rustfmt::skip]
fn leap_year() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2024, 2, 1)
        .ok_or("not a real calendar day")?;
    Ok(format!("{}", date.leap_year()))
}

const ISO_WEEK_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
format!("ISO week {}", date.iso_week().week())"#;

#[rustfmt::skip]
fn iso_week() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    Ok(format!("ISO week {}", date.iso_week().week()))
}

const MONTH_START_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
let first = date.with_day(1)
    .ok_or("no such day in this month")?;
first.to_string()"#;

#[rustfmt::skip]
fn month_start() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    let first = date.with_day(1)
        .ok_or("no such day in this month")?;
    Ok(first.to_string())
}

const MONTH_END_SRC: &str = r#"let first = NaiveDate::from_ymd_opt(2023, 2, 1)
    .ok_or("not a real calendar day")?;
let last = (first + Months::new(1)).pred_opt()
    .ok_or("fell outside the supported year range")?;
last.to_string()"#;

#[rustfmt::skip]
fn month_end() -> SnippetResult {
    let first = NaiveDate::from_ymd_opt(2023, 2, 1)
        .ok_or("not a real calendar day")?;
    let last = (first + Months::new(1)).pred_opt()
        .ok_or("fell outside the supported year range")?;
    Ok(last.to_string())
}

const LEAP_FEBRUARY_SRC: &str = r#"let first = NaiveDate::from_ymd_opt(2024, 2, 1)
    .ok_or("not a real calendar day")?;
let last = (first + Months::new(1)).pred_opt()
    .ok_or("fell outside the supported year range")?;
format!("February 2024 has {} days", last.day())"#;

#[rustfmt::skip]
fn leap_february() -> SnippetResult {
    let first = NaiveDate::from_ymd_opt(2024, 2, 1)
        .ok_or("not a real calendar day")?;
    let last = (first + Months::new(1)).pred_opt()
        .ok_or("fell outside the supported year range")?;
    Ok(format!("February 2024 has {} days", last.day()))
}
