//! Rejecting impossible dates
//!
//! Every entry in this group fails on purpose. The page renders each
//! failure in the result column, which is the behavior being demonstrated.

use chrono::NaiveDate;

use super::SnippetResult;
use crate::catalog::{Entry, ExampleGroup};

pub(super) fn group() -> ExampleGroup {
    ExampleGroup::new(
        "When dates are invalid",
        vec![
            Entry::new(IMPOSSIBLE_DAY_SRC, impossible_day),
            Entry::new(GARBLED_TEXT_SRC, garbled_text),
            Entry::new(OUT_OF_RANGE_SRC, out_of_range),
        ],
    )
}

const IMPOSSIBLE_DAY_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2023, 2, 30)
    .ok_or("2023-02-30 is not a real calendar day")?;
date.to_string()"#;

#[rustfmt::skip]
fn impossible_day() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2023, 2, 30)
        .ok_or("2023-02-30 is not a real calendar day")?;
    Ok(date.to_string())
}

const GARBLED_TEXT_SRC: &str = r#"let date: NaiveDate = "not-a-date".parse()?;
date.to_string()"#;

#[rustfmt::skip]
fn garbled_text() -> SnippetResult {
    let date: NaiveDate = "not-a-date".parse()?;
    Ok(date.to_string())
}

const OUT_OF_RANGE_SRC: &str = r#"let date = NaiveDate::parse_from_str("2023-13-40", "%Y-%m-%d")?;
date.to_string()"#;

#[rustfmt::skip]
fn out_of_range() -> SnippetResult {
    let date = NaiveDate::parse_from_str("2023-13-40", "%Y-%m-%d")?;
    Ok(date.to_string())
}
