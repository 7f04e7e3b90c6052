//! Rendering dates for people and protocols
//!
//! The localized entries use chrono's bundled locale data, so their outputs
//! are stable regardless of the host's locale settings.

use chrono::{Locale, NaiveDate};

use super::SnippetResult;
use crate::catalog::{Entry, ExampleGroup};

pub(super) fn group() -> ExampleGroup {
    ExampleGroup::new(
        "Formatting for humans and machines",
        vec![
            Entry::new(LONG_FORM_SRC, long_form),
            Entry::new(FRENCH_SRC, french),
            Entry::new(JAPANESE_SRC, japanese),
            Entry::new(RFC2822_SRC, rfc2822),
        ],
    )
}

const LONG_FORM_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
date.format("%A, %B %-d, %Y").to_string()"#;

#[rustfmt::skip]
fn long_form() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    Ok(date.format("%A, %B %-d, %Y").to_string())
}

const FRENCH_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
date.format_localized("%A %e %B %Y", Locale::fr_FR).to_string()"#;

#[rustfmt::skip]
fn french() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    Ok(date.format_localized("%A %e %B %Y", Locale::fr_FR).to_string())
}

const JAPANESE_SRC: &str = r#"let date = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?;
date.format_localized("%Y年%m月%d日 (%A)", Locale::ja_JP).to_string()"#;

#[rustfmt::skip]
fn japanese() -> SnippetResult {
    let date = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?;
    Ok(date.format_localized("%Y年%m月%d日 (%A)", Locale::ja_JP).to_string())
}

const RFC2822_SRC: &str = r#"let posted = NaiveDate::from_ymd_opt(2023, 10, 26)
    .ok_or("not a real calendar day")?
    .and_hms_opt(14, 30, 0)
    .ok_or("not a time of day")?;
posted.and_utc().to_rfc2822()"#;

#[rustfmt::skip]
fn rfc2822() -> SnippetResult {
    let posted = NaiveDate::from_ymd_opt(2023, 10, 26)
        .ok_or("not a real calendar day")?
        .and_hms_opt(14, 30, 0)
        .ok_or("not a time of day")?;
    Ok(posted.and_utc().to_rfc2822())
}
