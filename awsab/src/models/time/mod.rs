use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use humantime::parse_duration;

use crate::error::{Error, Result};

/// Date-times carrying their own offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y/%m/%d %H:%M:%S %z",
];

/// Zone names accepted after an otherwise naive date-time, all meaning UTC.
const UTC_SUFFIXES: &[&str] = &[" UTC", " GMT", " Z", "Z"];

/// Date-times without an offset, read in the host time zone.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%b %d %Y %H:%M:%S",
    "%b %d %Y %H:%M",
    "%b %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
];

/// A point in time as the user gave it: epoch seconds or free-form text.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValue {
    Epoch(i64),
    Text(String),
}

impl TimeValue {
    /// Normalizes into epoch seconds.
    pub fn to_epoch(&self) -> Result<i64> {
        match self {
            TimeValue::Epoch(n) => Ok(*n),
            TimeValue::Text(s) => parse(s.trim(), Local::now())
                .ok_or_else(|| Error::InvalidDatetime(s.to_string())),
        }
    }
}

impl From<i64> for TimeValue {
    fn from(n: i64) -> Self {
        TimeValue::Epoch(n)
    }
}

impl From<&str> for TimeValue {
    fn from(s: &str) -> Self {
        TimeValue::Text(s.to_owned())
    }
}

impl From<String> for TimeValue {
    fn from(s: String) -> Self {
        TimeValue::Text(s)
    }
}

fn parse(s: &str, now: DateTime<Local>) -> Option<i64> {
    if s.is_empty() {
        return None;
    }

    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }

    if s == "now" {
        return Some(now.timestamp());
    }

    if let Ok(d) = parse_duration(s) {
        let d = chrono::Duration::from_std(d).ok()?;
        return now.checked_sub_signed(d).map(|t| t.timestamp());
    }

    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(d.timestamp());
    }

    if let Ok(d) = DateTime::parse_from_rfc2822(s) {
        return Some(d.timestamp());
    }

    if let Some(d) = OFFSET_FORMATS
        .iter()
        .find_map(|f| DateTime::parse_from_str(s, f).ok())
    {
        return Some(d.timestamp());
    }

    if let Some(d) = UTC_SUFFIXES
        .iter()
        .filter_map(|suffix| s.strip_suffix(*suffix))
        .find_map(|rest| naive(rest.trim_end()))
    {
        return Some(Utc.from_utc_datetime(&d).timestamp());
    }

    naive(s).and_then(|d| local_timestamp(&d))
}

/// Month names match in full or abbreviated form; a bare date is midnight.
fn naive(s: &str) -> Option<NaiveDateTime> {
    LOCAL_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

// DST folds pick the earlier instant, gaps don't resolve.
fn local_timestamp(d: &NaiveDateTime) -> Option<i64> {
    Local.from_local_datetime(d).earliest().map(|t| t.timestamp())
}
