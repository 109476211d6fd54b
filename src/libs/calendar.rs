use crate::libs::entry::TimeEntry;
use crate::libs::messages::Message;
use crate::libs::summary::{weekly_totals_of, AggregateHours};
use crate::libs::week::WeekStart;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};

/// Caller-owned (year, month) position of the calendar view.
///
/// Months follow the chrono convention, 1 through 12. The cursor itself is
/// plain value state; the only transition is [`MonthCursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(msg_error_anyhow!(Message::InvalidMonth(month)));
        }
        Ok(Self { year, month })
    }

    /// Cursor for the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Moves the cursor by `delta` months, carrying years on overflow.
    ///
    /// Multi-month and multi-year jumps normalize in one step: the cursor is
    /// flattened to a month count, shifted, and split back with euclidean
    /// division so negative deltas wrap below January correctly.
    pub fn advance(self, delta: i32) -> Self {
        let months = self.year * 12 + (self.month as i32 - 1) + delta;
        Self {
            year: months.div_euclid(12),
            month: (months.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.advance(1).first_day()?.pred_opt()
    }
}

/// One grid position: a single calendar day and its total hours.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day: u32,
    pub month: u32,
    pub in_month: bool,
    pub hours: f64,
}

/// Seven day-cells plus the hour total of the week they form.
///
/// The grid is aligned to the configured week start, so a row always covers
/// exactly one aggregation week and `week_start` equals the first cell's
/// date. The total includes overflow-day entries.
#[derive(Debug, Clone)]
pub struct WeekRow {
    pub week_start: NaiveDate,
    pub cells: Vec<CalendarCell>,
    pub total: f64,
}

/// The ordered week-rows needed to render one month.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    pub rows: Vec<WeekRow>,
}

impl MonthGrid {
    /// Builds the grid for `cursor`, annotating each day with its total
    /// hours from `entries`.
    ///
    /// The walk starts at the week-start on or before the 1st, emitting
    /// leading overflow cells tagged with the previous month, then the
    /// in-month days 1..=last, then trailing overflow cells until the final
    /// row holds seven. A month that begins on the week-start day gets no
    /// leading cells, and one whose last day completes a row gets no
    /// trailing all-overflow row.
    pub fn build(cursor: MonthCursor, entries: &[TimeEntry], week_start: WeekStart) -> Result<Self> {
        let first = cursor.first_day().ok_or_else(|| msg_error_anyhow!(Message::InvalidMonth(cursor.month)))?;
        let last = cursor.last_day().ok_or_else(|| msg_error_anyhow!(Message::InvalidMonth(cursor.month)))?;

        let daily = entries.daily_totals();
        let weekly = weekly_totals_of(&daily, week_start);

        let mut rows = Vec::new();
        let mut cells: Vec<CalendarCell> = Vec::with_capacity(7);
        let mut date = week_start.week_start_of(first);

        loop {
            cells.push(CalendarCell {
                date,
                day: date.day(),
                month: date.month(),
                in_month: date.year() == cursor.year && date.month() == cursor.month,
                hours: daily.get(&date).copied().unwrap_or(0.0),
            });

            if cells.len() == 7 {
                let row_start = cells[0].date;
                rows.push(WeekRow {
                    week_start: row_start,
                    cells: std::mem::take(&mut cells),
                    total: weekly.get(&row_start).copied().unwrap_or(0.0),
                });
                if date >= last {
                    break;
                }
            }
            date = date + Duration::days(1);
        }

        Ok(Self { cursor, rows })
    }

    /// Cumulative grand total after each week-row.
    ///
    /// Computed on demand; the rows themselves carry only plain week
    /// subtotals.
    pub fn running_totals(&self) -> Vec<f64> {
        let mut acc = 0.0;
        self.rows
            .iter()
            .map(|row| {
                acc += row.total;
                acc
            })
            .collect()
    }
}
