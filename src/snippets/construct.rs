//! Building dates and times from parts and from text

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::SnippetResult;
use crate::catalog::{Entry, ExampleGroup};

pub(super) fn group() -> ExampleGroup {
    ExampleGroup::new(
        "Constructing dates and times",
        vec![
            Entry::new(FROM_YMD_SRC, from_ymd),
            Entry::new(FROM_HMS_SRC, from_hms),
            Entry::new(COMBINE_SRC, combine),
            Entry::new(PARSE_CUSTOM_SRC, parse_custom),
        ],
    )
}

const FROM_YMD_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
date.to_string()"#;

#[rustfmt::skip]
fn from_ymd() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    Ok(date.to_string())
}

const FROM_HMS_SRC: &str = r#"let time = NaiveTime::from_hms_opt(14, 30, 0)
    .ok_or("not a time of day")?;
time.to_string()"#;

#[rustfmt::skip]
fn from_hms() -> SnippetResult {
    let time = NaiveTime::from_hms_opt(14, 30, 0)
        .ok_or("not a time of day")?;
    Ok(time.to_string())
}

const COMBINE_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
let meeting = date.and_hms_opt(14, 30, 0)
    .ok_or("not a time of day")?;
meeting.to_string()"#;

#[rustfmt::skip]
fn combine() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    let meeting = date.and_hms_opt(14, 30, 0)
        .ok_or("not a time of day")?;
    Ok(meeting.to_string())
}

const PARSE_CUSTOM_SRC: &str = r#"let opening = NaiveDateTime::parse_from_str(
    "2023-12-24 18:30", "%Y-%m-%d %H:%M")?;
opening.to_string()"#;

#[rustfmt::skip]
fn parse_custom() -> SnippetResult {
    let opening = NaiveDateTime::parse_from_str(
        "2023-12-24 18:30", "%Y-%m-%d %H:%M")?;
    Ok(opening.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd() {
        assert_eq!(from_ymd().unwrap(), "2023-10-26");
    }

    #[test]
    fn test_from_hms() {
        assert_eq!(from_hms().unwrap(), "14:30:00");
    }

    #[test]
    fn test_combine() {
        assert_eq!(combine().unwrap(), "2023-10-26 14:30:00");
    }

    #[test]
    fn test_parse_custom() {
        assert_eq!(parse_custom().unwrap(), "2023-12-24 18:30:00");
    }
}
