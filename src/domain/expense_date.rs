//! Expense date value object.
//!
//! Dates are stored as `YYYY-MM-DD` text. Input may also be an ISO-8601
//! date-time, in which case only its date component is kept.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::config::MSG_DATE_FORMAT;
use crate::errors::{AppError, AppResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-times without an offset are taken at face value.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Date-times with a numeric offset; converted to UTC before the date is taken.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// How strictly incoming dates are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatePolicy {
    /// The date must exist on the calendar. Offset date-times are
    /// converted to UTC before the date is taken.
    #[default]
    Strict,
    /// Only the textual shape is checked, so `2024-02-30` is accepted.
    /// Date-times keep their literal date prefix.
    Lenient,
}

impl FromStr for DatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(DatePolicy::Strict),
            "lenient" => Ok(DatePolicy::Lenient),
            other => Err(format!("unknown date policy '{}'", other)),
        }
    }
}

impl fmt::Display for DatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatePolicy::Strict => write!(f, "strict"),
            DatePolicy::Lenient => write!(f, "lenient"),
        }
    }
}

/// Date in canonical `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ExpenseDate(String);

impl ExpenseDate {
    /// Validate and normalize a client-supplied date.
    ///
    /// # Errors
    /// Returns a validation error if the input is neither a date nor a
    /// date-time acceptable under `policy`.
    pub fn parse(input: &str, policy: DatePolicy) -> AppResult<Self> {
        let input = input.trim();
        let normalized = match policy {
            DatePolicy::Strict => parse_strict(input).map(|d| d.format(DATE_FORMAT).to_string()),
            DatePolicy::Lenient => parse_lenient(input).map(str::to_string),
        };

        normalized
            .map(Self)
            .ok_or_else(|| AppError::validation(MSG_DATE_FORMAT))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_strict(input: &str) -> Option<NaiveDate> {
    let (date, time) = split_date_time(input)?;
    let Some(time) = time else {
        return NaiveDate::parse_from_str(date, DATE_FORMAT).ok();
    };

    // Only the calendar can still fail here; the clock was range-checked.
    if let Some(naive) = input.strip_suffix('Z') {
        return parse_naive(naive);
    }
    if has_offset(time) {
        return OFFSET_DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(input, fmt).ok())
            .map(|dt| dt.with_timezone(&Utc).date_naive());
    }
    parse_naive(input)
}

fn parse_naive(input: &str) -> Option<NaiveDate> {
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.date())
}

fn parse_lenient(input: &str) -> Option<&str> {
    split_date_time(input).map(|(date, _)| date)
}

/// Split `YYYY-MM-DD[THH:MM...]` into its date and optional time.
///
/// Both policies accept exactly this shape: an uppercase `T` separator and
/// a clock that exists on a 24-hour day.
fn split_date_time(input: &str) -> Option<(&str, Option<&str>)> {
    if !has_date_prefix(input) {
        return None;
    }
    let (date, rest) = input.split_at(10);
    if rest.is_empty() {
        return Some((date, None));
    }
    let time = rest.strip_prefix('T')?;
    is_time_of_day(time).then_some((date, Some(time)))
}

/// `DDDD-DD-DD` at the start of the string.
fn has_date_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
}

/// Ends in `±HH:MM`.
fn has_offset(s: &str) -> bool {
    s.len() > 6 && matches!(s.as_bytes()[s.len() - 6], b'+' | b'-')
}

/// `HH:MM[:SS[.fff]]` followed by an optional `Z` or `±HH:MM`.
fn is_time_of_day(s: &str) -> bool {
    let clock = if let Some(clock) = s.strip_suffix('Z') {
        clock
    } else if has_offset(s) {
        let (clock, offset) = s.split_at(s.len() - 6);
        match offset[1..].split_once(':') {
            Some((h, m)) if in_range(h, 24) && in_range(m, 60) => clock,
            _ => return false,
        }
    } else {
        s
    };

    let (main, fraction) = match clock.split_once('.') {
        Some((main, fraction)) => (main, Some(fraction)),
        None => (clock, None),
    };
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }

    let parts: Vec<&str> = main.split(':').collect();
    match parts.as_slice() {
        [h, m] if fraction.is_none() => in_range(h, 24) && in_range(m, 60),
        [h, m, sec] => in_range(h, 24) && in_range(m, 60) && in_range(sec, 60),
        _ => false,
    }
}

/// Exactly two ASCII digits whose value is below `limit`.
fn in_range(s: &str, limit: u8) -> bool {
    s.len() == 2
        && s.bytes().all(|b| b.is_ascii_digit())
        && s.parse::<u8>().is_ok_and(|v| v < limit)
}
