//! Calendar date parsing for values exchanged with the API and the desktop client.
//!
//! ## Summary
//! The client sends dates either as ISO dates, as ISO timestamps, or in the
//! day-first display form it shows to users (`dd-mm-yyyy`, optionally with a
//! `HH:MM` time). Recurrence works on whole days, so every accepted form is
//! reduced to a `NaiveDate`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{CoreError, CoreResult};

/// Day-first form shown to users.
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", DISPLAY_DATE_FORMAT];

const DATETIME_FORMATS: &[&str] = &[
    "%d-%m-%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S+00:00",
    "%Y-%m-%dT%H:%M:%SZ",
];

/// ## Summary
/// Parses a calendar date from any of the accepted wire forms.
///
/// Accepted, after trimming: `YYYY-MM-DD`, `dd-mm-yyyy`, `dd-mm-yyyy HH:MM`,
/// `YYYY-MM-DDTHH:MM:SS+00:00`, `YYYY-MM-DDTHH:MM:SSZ` and any RFC 3339
/// timestamp. Timestamps keep the date in their own offset.
///
/// ## Errors
/// Returns `CoreError::ParseError` for empty input or any other shape.
pub fn parse_calendar_date(value: &str) -> CoreResult<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::ParseError("empty date".to_string()));
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
    {
        return Ok(date);
    }

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Ok(datetime.date());
    }

    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.date_naive())
        .map_err(|err| {
            tracing::trace!(value, error = %err, "Unrecognized date format");
            CoreError::ParseError(format!(
                "invalid date '{value}', expected dd-mm-yyyy [hh:mm] or an ISO 8601 date"
            ))
        })
}

/// ## Summary
/// Formats a date the way the desktop client displays it (`dd-mm-yyyy`).
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
