//! Ordering and equality of dates

use chrono::NaiveDate;

use super::SnippetResult;
use crate::catalog::{Entry, ExampleGroup};

pub(super) fn group() -> ExampleGroup {
    ExampleGroup::new(
        "Comparing dates",
        vec![
            Entry::new(BEFORE_SRC, before),
            Entry::new(ORDERING_SRC, ordering),
            Entry::new(LATEST_SRC, latest),
            Entry::new(SAME_DAY_SRC, same_day),
        ],
    )
}

const BEFORE_SRC: &str = r#"let launch = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
let review = NaiveDate::from_ymd_opt(2024, 1, 7)
    .ok_or("not a real calendar day")?;
format!("{}", launch < review)"#;

#[rustfmt::skip]
fn before() -> SnippetResult {
    let launch = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    let review = NaiveDate::from_ymd_opt(2024, 1, 7)
        .ok_or("not a real calendar day")?;
    Ok(format!("{}", launch < review))
}

const ORDERING_SRC: &str = r#"let launch = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
let review = NaiveDate::from_ymd_opt(2024, 1, 7)
    .ok_or("not a real calendar day")?;
format!("{:?}", launch.cmp(&review))"#;

#[rustfmt::skip]
fn ordering() -> SnippetResult {
    let launch = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    let review = NaiveDate::from_ymd_opt(2024, 1, 7)
        .ok_or("not a real calendar day")?;
    Ok(format!("{:?}", launch.cmp(&review)))
}

const LATEST_SRC: &str = r#"let launch = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
let review = NaiveDate::from_ymd_opt(2024, 1, 7)
    .ok_or("not a real calendar day")?;
launch.max(review).to_string()"#;

#[rustfmt::skip]
fn latest() -> SnippetResult {
    let launch = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    let review = NaiveDate::from_ymd_opt(2024, 1, 7)
        .ok_or("not a real calendar day")?;
    Ok(launch.max(review).to_string())
}

const SAME_DAY_SRC: &str = r#"let parsed: NaiveDate = "2023-10-26".parse()?;
let built = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
format!("{}", parsed == built)"#;

#[rustfmt::skip]
fn same_day() -> SnippetResult {
    let parsed: NaiveDate = "2023-10-26".parse()?;
    let built = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    Ok(format!("{}", parsed == built))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before() {
        assert_eq!(before().unwrap(), "true");
    }

    #[test]
    fn test_ordering() {
        assert_eq!(ordering().unwrap(), "Less");
    }

    #[test]
    fn test_latest() {
        assert_eq!(latest().unwrap(), "2024-01-07");
    }

    #[test]
    fn test_same_day() {
        assert_eq!(same_day().unwrap(), "true");
    }
}
