//! Moving instants between UTC offsets

use chrono::{DateTime, FixedOffset, TimeZone};

use super::SnippetResult;
use crate::catalog::{Entry, ExampleGroup};

pub(super) fn group() -> ExampleGroup {
    ExampleGroup::new(
        "Converting between time zones",
        vec![
            Entry::new(UTC_TO_TOKYO_SRC, utc_to_tokyo),
            Entry::new(TOKYO_TO_LIMA_SRC, tokyo_to_lima),
            Entry::new(FROM_TIMESTAMP_SRC, from_timestamp),
        ],
    )
}

const UTC_TO_TOKYO_SRC: &str = r#"let utc = DateTime::parse_from_rfc3339("2023-10-26T14:30:00Z")?;
let tokyo = FixedOffset::east_opt(9 * 3600)
    .ok_or("offset out of range")?;
utc.with_timezone(&tokyo).to_rfc3339()"#;

#[rustfmt::skip]
fn utc_to_tokyo() -> SnippetResult {
    let utc = DateTime::parse_from_rfc3339("2023-10-26T14:30:00Z")?;
    let tokyo = FixedOffset::east_opt(9 * 3600)
        .ok_or("offset out of range")?;
    Ok(utc.with_timezone(&tokyo).to_rfc3339())
}

const TOKYO_TO_LIMA_SRC: &str = r#"let tokyo = FixedOffset::east_opt(9 * 3600)
    .ok_or("offset out of range")?;
let lima = FixedOffset::west_opt(5 * 3600)
    .ok_or("offset out of range")?;
let meeting = tokyo.with_ymd_and_hms(2023, 10, 26, 9, 0, 0)
    .single()
    .ok_or("ambiguous or impossible local time")?;
meeting.with_timezone(&lima).to_rfc3339()"#;

#[rustfmt::skip]
fn tokyo_to_lima() -> SnippetResult {
    let tokyo = FixedOffset::east_opt(9 * 3600)
        .ok_or("offset out of range")?;
    let lima = FixedOffset::west_opt(5 * 3600)
        .ok_or("offset out of range")?;
    let meeting = tokyo.with_ymd_and_hms(2023, 10, 26, 9, 0, 0)
        .single()
        .ok_or("ambiguous or impossible local time")?;
    Ok(meeting.with_timezone(&lima).to_rfc3339())
}

const FROM_TIMESTAMP_SRC: &str = r#"let moment = DateTime::from_timestamp(1_700_000_000, 0)
    .ok_or("timestamp out of range")?;
moment.to_rfc3339()"#;

#[rustfmt::skip]
fn from_timestamp() -> SnippetResult {
    let moment = DateTime::from_timestamp(1_700_000_000, 0)
        .ok_or("timestamp out of range")?;
    Ok(moment.to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_to_tokyo() {
        assert_eq!(utc_to_tokyo().unwrap(), "2023-10-26T23:30:00+09:00");
    }

    #[test]
    fn test_tokyo_to_lima() {
        // A morning meeting in Tokyo lands on the previous evening in Lima
        assert_eq!(tokyo_to_lima().unwrap(), "2023-10-25T19:00:00-05:00");
    }

    #[test]
    fn test_from_timestamp() {
        assert_eq!(from_timestamp().unwrap(), "2023-11-14T22:13:20+00:00");
    }
}
