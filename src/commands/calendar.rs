use crate::libs::{
    calendar::{MonthCursor, MonthGrid},
    config::Config,
    entry_log::EntryLog,
    messages::Message,
    view::View,
};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    #[arg(short, long, value_name = "YYYY-MM", help = "Month to show, defaults to the current month")]
    date: Option<String>,
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true, help = "Shift the shown month by this many months")]
    offset: i32,
    #[arg(short, long, help = "Show the cumulative month total per week row")]
    total: bool,
}

pub fn cmd(args: CalendarArgs) -> Result<()> {
    let config = Config::read()?;
    let log = EntryLog::new()?;

    let cursor = parse_cursor(args.date.as_deref())?.advance(args.offset);
    let grid = MonthGrid::build(cursor, &log.entries, config.week_start)?;

    // --total forces the running column on; the config default covers the rest.
    let running = (args.total || config.running_total).then(|| grid.running_totals());

    if let Some(first) = cursor.first_day() {
        println!("\nTimesheet for {}", first.format("%B, %Y"));
    }
    View::calendar(&grid, config.week_start, running.as_deref())
}

/// Parses `YYYY-MM` into a month cursor; `None` means the current month.
fn parse_cursor(date: Option<&str>) -> Result<MonthCursor> {
    match date {
        None => Ok(MonthCursor::of(Local::now().date_naive())),
        Some(ym) => {
            let first = NaiveDate::parse_from_str(&format!("{}-01", ym), "%Y-%m-%d")
                .map_err(|_| msg_error_anyhow!(Message::InvalidDate(ym.to_string())))?;
            MonthCursor::new(first.year(), first.month())
        }
    }
}
