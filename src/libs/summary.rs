use crate::libs::entry::TimeEntry;
use crate::libs::week::WeekStart;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Total worked hours keyed by calendar date.
pub type DailyTotals = HashMap<NaiveDate, f64>;

/// Total worked hours keyed by week-start date.
pub type WeeklyTotals = HashMap<NaiveDate, f64>;

/// Total worked hours keyed by (year, month).
pub type MonthlyTotals = HashMap<(i32, u32), f64>;

/// Reduces an entry list into hour totals.
///
/// Every aggregation re-scans the full slice; results are pure functions of
/// the input multiset, independent of entry order. Entries whose date or
/// hours fail to parse are skipped and contribute nothing.
pub trait AggregateHours {
    fn daily_totals(&self) -> DailyTotals;
    fn weekly_totals(&self, week_start: WeekStart) -> WeeklyTotals;
    fn monthly_totals(&self) -> MonthlyTotals;
}

impl AggregateHours for [TimeEntry] {
    fn daily_totals(&self) -> DailyTotals {
        let mut totals = DailyTotals::new();
        for entry in self {
            if let (Some(date), Some(hours)) = (entry.date_value(), entry.hours_value()) {
                *totals.entry(date).or_insert(0.0) += hours;
            }
        }
        totals
    }

    fn weekly_totals(&self, week_start: WeekStart) -> WeeklyTotals {
        weekly_totals_of(&self.daily_totals(), week_start)
    }

    fn monthly_totals(&self) -> MonthlyTotals {
        let mut totals = MonthlyTotals::new();
        for (date, hours) in self.daily_totals() {
            *totals.entry((date.year(), date.month())).or_insert(0.0) += hours;
        }
        totals
    }
}

/// Re-keys daily totals by the first day of their week.
///
/// Days without entries are absent from the input and contribute zero to
/// their week regardless, so only populated dates need to be folded in.
/// Invariant: the summed values equal the summed daily totals.
pub fn weekly_totals_of(daily: &DailyTotals, week_start: WeekStart) -> WeeklyTotals {
    let mut totals = WeeklyTotals::new();
    for (date, hours) in daily {
        *totals.entry(week_start.week_start_of(*date)).or_insert(0.0) += hours;
    }
    totals
}
