use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised while building a [`TimeEntry`] from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("Invalid time format '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("Invalid date format '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("End time must not be earlier than start time")]
    EndBeforeStart,
}

/// One recorded work interval.
///
/// Field names and string forms match the log's stored JSON shape: `date`
/// is `YYYY-MM-DD`, `start`/`end` are `HH:MM`, and `hours` is the derived
/// interval length kept with two decimals. The string fields are the wire
/// format; arithmetic goes through [`TimeEntry::date_value`] and
/// [`TimeEntry::hours_value`], which parse on demand. Aggregation treats a
/// parse failure as a skipped entry rather than an abort, so a single
/// malformed record imported from elsewhere cannot blank out a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub date: String,
    pub start: String,
    pub end: String,
    pub hours: String,
    #[serde(default)]
    pub memo: String,
}

impl TimeEntry {
    /// Builds a validated entry, deriving `hours` from the interval.
    ///
    /// Overnight spans are not supported: `end` must not precede `start`
    /// within the same day.
    pub fn new(date: &str, start: &str, end: &str, memo: &str) -> Result<Self, EntryError> {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| EntryError::InvalidDate(date.to_string()))?;
        let hours = compute_hours(start, end)?;

        Ok(Self {
            date: date.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            hours: format!("{:.2}", hours),
            memo: memo.trim().to_string(),
        })
    }

    /// Calendar date of the entry, `None` when the stored string is malformed.
    pub fn date_value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Worked hours as a number, `None` when the stored string is malformed.
    pub fn hours_value(&self) -> Option<f64> {
        self.hours.trim().parse::<f64>().ok().filter(|h| h.is_finite())
    }
}

/// Parses an `HH:MM` wall-clock time.
pub fn parse_time(time: &str) -> Result<NaiveTime, EntryError> {
    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| EntryError::InvalidTime(time.to_string()))
}

/// Derives worked hours from a same-day interval.
pub fn compute_hours(start: &str, end: &str) -> Result<f64, EntryError> {
    let start = parse_time(start)?;
    let end = parse_time(end)?;

    let minutes = (end - start).num_minutes();
    if minutes < 0 {
        return Err(EntryError::EndBeforeStart);
    }
    Ok(minutes as f64 / 60.0)
}
