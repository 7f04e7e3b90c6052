//! Durations as values in their own right
//!
//! Spans combine and scale before they ever touch a date or time. chrono
//! renders them in ISO 8601 form, reduced to days and seconds.

use chrono::TimeDelta;

use super::SnippetResult;
use crate::catalog::{Entry, ExampleGroup};

pub(super) fn group() -> ExampleGroup {
    ExampleGroup::new(
        "Working with durations",
        vec![
            Entry::new(FROM_UNITS_SRC, from_units),
            Entry::new(TOTAL_DURATION_SRC, total_duration),
            Entry::new(HALVED_SRC, halved),
        ],
    )
}

const FROM_UNITS_SRC: &str = r#"let span = TimeDelta::days(3) + TimeDelta::hours(4) + TimeDelta::minutes(5);
span.to_string()"#;

#[rustfmt::skip]
fn from_units() -> SnippetResult {
    let span = TimeDelta::days(3) + TimeDelta::hours(4) + TimeDelta::minutes(5);
    Ok(span.to_string())
}

const TOTAL_DURATION_SRC: &str = r#"let briefing = TimeDelta::hours(2) + TimeDelta::minutes(30);
let workshop = TimeDelta::hours(1) + TimeDelta::minutes(45);
(briefing + workshop).to_string()"#;

#[rustfmt::skip]
fn total_duration() -> SnippetResult {
    let briefing = TimeDelta::hours(2) + TimeDelta::minutes(30);
    let workshop = TimeDelta::hours(1) + TimeDelta::minutes(45);
    Ok((briefing + workshop).to_string())
}

const HALVED_SRC: &str = r#"let rehearsal = TimeDelta::hours(5) + TimeDelta::minutes(30);
(rehearsal / 2).to_string()"#;

#[rustfmt::skip]
fn halved() -> SnippetResult {
    let rehearsal = TimeDelta::hours(5) + TimeDelta::minutes(30);
    Ok((rehearsal / 2).to_string())
}
