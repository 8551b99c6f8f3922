//! Date and time parsing for user input and the datafile

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};

use super::error::{Result, TaskError};

/// Format used when showing dates to the user, e.g. `25 Dec 2024, 1800`.
pub const DISPLAY_FORMAT: &str = "%d %b %Y, %H%M";

/// Format written to the datafile.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Older datafiles were written without seconds.
const CANONICAL_FORMAT_NO_SECONDS: &str = "%Y-%m-%dT%H:%M";

const USER_FORMAT_HINT: &str = "DD(/-)MM(/-)YYYY[ HH(:-)MM]";

const DATE_PATTERN: &str = r"(0?[1-9]|[12][0-9]|3[01])[/-](0?[1-9]|1[0-2])[/-](\d{4})";

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{DATE_PATTERN}$")).unwrap());

// Groups 4/5 hold the `HHMM` form, 6/7 the `H?H(:|-)MM` form.
static DATE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{DATE_PATTERN} (?:([01][0-9]|2[0-3])([0-5][0-9])|([01]?[0-9]|2[0-3])[-:]([0-5][0-9]))$"
    ))
    .unwrap()
});

/// Check whether `text` is a bare date such as `25/12/2024` or `5-1-2024`.
pub fn is_valid_date(text: &str) -> bool {
    DATE_RE.is_match(text)
}

/// Check whether `text` is a date followed by a 24-hour time, such as
/// `25/12/2024 1800` or `25-12-2024 18:00`.
pub fn is_valid_date_time(text: &str) -> bool {
    DATE_TIME_RE.is_match(text)
}

/// Parse user-entered date/time text.
///
/// A date without a time resolves to midnight. Dates that match the pattern
/// but do not exist on the calendar (`31/02/2024`) are rejected.
pub fn parse(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();

    if let Some(caps) = DATE_TIME_RE.captures(text) {
        let hour = caps.get(4).or_else(|| caps.get(6));
        let minute = caps.get(5).or_else(|| caps.get(7));
        let (hour, minute) = match (hour, minute) {
            (Some(h), Some(m)) => (number(h.as_str(), text)?, number(m.as_str(), text)?),
            _ => return Err(unrecognised(text)),
        };
        return date_from(&caps, text)?
            .and_hms_opt(hour, minute, 0)
            .ok_or_else(|| unrecognised(text));
    }

    if let Some(caps) = DATE_RE.captures(text) {
        return date_from(&caps, text)?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| unrecognised(text));
    }

    Err(unrecognised(text))
}

/// Parse the canonical datafile form `YYYY-MM-DDTHH:MM:SS`.
pub fn from_canonical_string(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, CANONICAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, CANONICAL_FORMAT_NO_SECONDS))
        .map_err(|_| {
            TaskError::parse(format!(
                "Stored date \"{text}\" is corrupted. Datafile dates must be written as \
                 YYYY-MM-DDTHH:MM:SS"
            ))
        })
}

/// Render an instant in the canonical datafile form.
pub fn to_canonical_string(instant: &NaiveDateTime) -> String {
    instant.format(CANONICAL_FORMAT).to_string()
}

/// Render an instant for display, e.g. `25 Dec 2024, 1800`.
pub fn to_display_string(instant: &NaiveDateTime) -> String {
    instant.format(DISPLAY_FORMAT).to_string()
}

fn date_from(caps: &Captures<'_>, text: &str) -> Result<NaiveDate> {
    let day = number(&caps[1], text)?;
    let month = number(&caps[2], text)?;
    let year = caps[3].parse::<i32>().map_err(|_| unrecognised(text))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        TaskError::parse(format!(
            "\"{text}\" is not a real calendar date. Check the day and month."
        ))
    })
}

fn number(digits: &str, text: &str) -> Result<u32> {
    digits.parse().map_err(|_| unrecognised(text))
}

fn unrecognised(text: &str) -> TaskError {
    TaskError::parse(format!(
        "I cannot understand the date \"{text}\".\n\
         Dates are given as {USER_FORMAT_HINT}, where (...) lists the accepted \
         separators and [...] is optional."
    ))
}
