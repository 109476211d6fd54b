use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First weekday of the 7-day aggregation window.
///
/// Both conventions appear in the wild; Sunday is the product default.
/// The chosen convention anchors weekly totals and the leftmost calendar
/// column, so it must be applied consistently to both.
#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Returns the first day of the 7-day window containing `date`.
    ///
    /// Pure civil-calendar arithmetic: the date is never routed through a
    /// timestamp, so there is no epoch or timezone drift at day boundaries.
    pub fn week_start_of(&self, date: NaiveDate) -> NaiveDate {
        let offset = match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        };
        date - Duration::days(offset as i64)
    }

    /// Weekday column labels in grid order, for calendar headers.
    pub fn labels(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"],
            WeekStart::Monday => ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"],
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
