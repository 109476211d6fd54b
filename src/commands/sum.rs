use crate::libs::{config::Config, entry_log::EntryLog, messages::Message, summary::AggregateHours, view::View};
use crate::msg_info;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let log = EntryLog::new()?;

    if log.entries.is_empty() {
        msg_info!(Message::LogEmpty);
        return Ok(());
    }

    println!("\nWorked hours by month");
    View::monthly(&log.entries.monthly_totals())?;

    println!("\nWorked hours by week (week starts on {})", config.week_start);
    View::weekly(&log.entries.weekly_totals(config.week_start))?;

    Ok(())
}
