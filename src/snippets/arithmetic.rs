//! Calendar and clock arithmetic
//!
//! Three groups: adding spans, subtracting spans, and measuring the
//! distance between two moments. Month arithmetic clamps to the end of
//! shorter months, which the subtraction group demonstrates.

use chrono::{Days, Months, NaiveDate, NaiveTime, TimeDelta};

use super::SnippetResult;
use crate::catalog::{Entry, ExampleGroup};

pub(super) fn adding() -> ExampleGroup {
    ExampleGroup::new(
        "Adding spans of time",
        vec![
            Entry::new(ADD_MONTH_DAYS_SRC, add_month_days),
            Entry::new(ADD_TO_TIME_SRC, add_to_time),
            Entry::new(ADD_TO_DATETIME_SRC, add_to_datetime),
        ],
    )
}

pub(super) fn subtracting() -> ExampleGroup {
    ExampleGroup::new(
        "Subtracting spans of time",
        vec![
            Entry::new(BACK_TEN_DAYS_SRC, back_ten_days),
            Entry::new(BACK_TWO_MONTHS_SRC, back_two_months),
            Entry::new(CLAMP_MONTH_END_SRC, clamp_month_end),
        ],
    )
}

pub(super) fn distances() -> ExampleGroup {
    ExampleGroup::new(
        "Distances between moments",
        vec![
            Entry::new(DATE_SPAN_SRC, date_span),
            Entry::new(SPAN_IN_DAYS_SRC, span_in_days),
            Entry::new(TIME_SPAN_SRC, time_span),
            Entry::new(DATETIME_SPAN_SRC, datetime_span),
        ],
    )
}

const ADD_MONTH_DAYS_SRC: &str = r#"let start = NaiveDate::from_ymd_opt(2023, 1, 15)
    .ok_or("not a real calendar day")?;
let due = start + Months::new(1) + Days::new(5);
due.to_string()"#;

#[rustfmt::skip]
fn add_month_days() -> SnippetResult {
    let start = NaiveDate::from_ymd_opt(2023, 1, 15)
        .ok_or("not a real calendar day")?;
    let due = start + Months::new(1) + Days::new(5);
    Ok(due.to_string())
}

const ADD_TO_TIME_SRC: &str = r#"let start = NaiveTime::from_hms_opt(14, 30, 0)
    .ok_or("not a time of day")?;
let later = start + TimeDelta::hours(2) + TimeDelta::minutes(30);
later.to_string()"#;

#[rustfmt::skip]
fn add_to_time() -> SnippetResult {
    let start = NaiveTime::from_hms_opt(14, 30, 0)
        .ok_or("not a time of day")?;
    let later = start + TimeDelta::hours(2) + TimeDelta::minutes(30);
    Ok(later.to_string())
}

const ADD_TO_DATETIME_SRC: &str = r#"let start = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?
    .and_hms_opt(14, 30, 0)
    .ok_or("not a time of day")?;
let shifted = start + TimeDelta::days(3);
shifted.to_string()"#;

#[rustfmt::skip]
fn add_to_datetime() -> SnippetResult {
    let start = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?
        .and_hms_opt(14, 30, 0)
        .ok_or("not a time of day")?;
    let shifted = start + TimeDelta::days(3);
    Ok(shifted.to_string())
}

const BACK_TEN_DAYS_SRC: &str = r#"let start = NaiveDate::from_ymd_opt(2023, 1, 15)
    .ok_or("not a real calendar day")?;
let earlier = start - Days::new(10);
earlier.to_string()"#;

#[rustfmt::skip]
fn back_ten_days() -> SnippetResult {
    let start = NaiveDate::from_ymd_opt(2023, 1, 15)
        .ok_or("not a real calendar day")?;
    let earlier = start - Days::new(10);
    Ok(earlier.to_string())
}

const BACK_TWO_MONTHS_SRC: &str = r#"let start = NaiveDate::from_ymd_opt(2023, 1, 15)
    .ok_or("not a real calendar day")?;
let earlier = start.checked_sub_months(Months::new(2))
    .ok_or("fell outside the supported year range")?;
earlier.to_string()"#;

#[rustfmt::skip]
fn back_two_months() -> SnippetResult {
    let start = NaiveDate::from_ymd_opt(2023, 1, 15)
        .ok_or("not a real calendar day")?;
    let earlier = start.checked_sub_months(Months::new(2))
        .ok_or("fell outside the supported year range")?;
    Ok(earlier.to_string())
}

const CLAMP_MONTH_END_SRC: &str = r#"let month_end = NaiveDate::from_ymd_opt(2023, 3, 31)
    .ok_or("not a real calendar day")?;
let clamped = month_end.checked_sub_months(Months::new(1))
    .ok_or("fell outside the supported year range")?;
clamped.to_string()"#;

#[rustfmt::skip]
fn clamp_month_end() -> SnippetResult {
    let month_end = NaiveDate::from_ymd_opt(2023, 3, 31)
        .ok_or("not a real calendar day")?;
    let clamped = month_end.checked_sub_months(Months::new(1))
        .ok_or("fell outside the supported year range")?;
    Ok(clamped.to_string())
}

const DATE_SPAN_SRC: &str = r#"let launch = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
let review = NaiveDate::from_ymd_opt(2024, 1, 7)
    .ok_or("not a real calendar day")?;
let span = review.signed_duration_since(launch);
span.to_string()"#;

#[rustfmt::skip]
fn date_span() -> SnippetResult {
    let launch = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    let review = NaiveDate::from_ymd_opt(2024, 1, 7)
        .ok_or("not a real calendar day")?;
    let span = review.signed_duration_since(launch);
    Ok(span.to_string())
}

const SPAN_IN_DAYS_SRC: &str = r#"let launch = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
let review = NaiveDate::from_ymd_opt(2024, 1, 7)
    .ok_or("not a real calendar day")?;
let span = review.signed_duration_since(launch);
format!("{} days", span.num_days())"#;

#[rustfmt::skip]
fn span_in_days() -> SnippetResult {
    let launch = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    let review = NaiveDate::from_ymd_opt(2024, 1, 7)
        .ok_or("not a real calendar day")?;
    let span = review.signed_duration_since(launch);
    Ok(format!("{} days", span.num_days()))
}

const TIME_SPAN_SRC: &str = r#"let doors_open = NaiveTime::from_hms_opt(14, 30, 0)
    .ok_or("not a time of day")?;
let doors_close = NaiveTime::from_hms_opt(17, 0, 0)
    .ok_or("not a time of day")?;
let open_for = doors_close.signed_duration_since(doors_open);
open_for.to_string()"#;

#[rustfmt::skip]
fn time_span() -> SnippetResult {
    let doors_open = NaiveTime::from_hms_opt(14, 30, 0)
        .ok_or("not a time of day")?;
    let doors_close = NaiveTime::from_hms_opt(17, 0, 0)
        .ok_or("not a time of day")?;
    let open_for = doors_close.signed_duration_since(doors_open);
    Ok(open_for.to_string())
}

const DATETIME_SPAN_SRC: &str = r#"let start = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?
    .and_hms_opt(14, 30, 0)
    .ok_or("not a time of day")?;
let finish = NaiveDate::from_ymd_opt(2023, 10, 30)
    .ok_or("not a real calendar day")?
    .and_hms_opt(18, 35, 0)
    .ok_or("not a time of day")?;
finish.signed_duration_since(start).to_string()"#;

#[rustfmt::skip]
fn datetime_span() -> SnippetResult {
    let start = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?
        .and_hms_opt(14, 30, 0)
        .ok_or("not a time of day")?;
    let finish = NaiveDate::from_ymd_opt(2023, 10, 30)
        .ok_or("not a real calendar day")?
        .and_hms_opt(18, 35, 0)
        .ok_or("not a time of day")?;
    Ok(finish.signed_duration_since(start).to_string())
}
