//! Reading the clock
//!
//! These entries show wall-clock values, so their outputs differ between
//! runs. Tests pin down the shape of each output rather than its text.

use chrono::{Local, SecondsFormat, Utc};

use super::SnippetResult;
use crate::catalog::{Entry, ExampleGroup};

pub(super) fn group() -> ExampleGroup {
    ExampleGroup::new(
        "Reading the current date and time",
        vec![
            Entry::new(TODAY_SRC, today),
            Entry::new(LOCAL_TIME_SRC, local_time),
            Entry::new(LOCAL_DATETIME_SRC, local_datetime),
            Entry::new(UTC_RFC3339_SRC, utc_rfc3339),
        ],
    )
}

const TODAY_SRC: &str = r#"let today = Utc::now().date_naive();
today.to_string()"#;

#[rustfmt::skip]
fn today() -> SnippetResult {
    let today = Utc::now().date_naive();
    Ok(today.to_string())
}

const LOCAL_TIME_SRC: &str = r#"let time = Local::now().time();
time.format("%H:%M:%S").to_string()"#;

#[rustfmt::skip]
fn local_time() -> SnippetResult {
    let time = Local::now().time();
    Ok(time.format("%H:%M:%S").to_string())
}

const LOCAL_DATETIME_SRC: &str = r#"let now = Local::now().naive_local();
now.format("%Y-%m-%d %H:%M:%S").to_string()"#;

#[rustfmt::skip]
fn local_datetime() -> SnippetResult {
    let now = Local::now().naive_local();
    Ok(now.format("%Y-%m-%d %H:%M:%S").to_string())
}

const UTC_RFC3339_SRC: &str = r#"let now = Utc::now();
now.to_rfc3339_opts(SecondsFormat::Secs, true)"#;

#[rustfmt::skip]
fn utc_rfc3339() -> SnippetResult {
    let now = Utc::now();
    Ok(now.to_rfc3339_opts(SecondsFormat::Secs, true))
}
