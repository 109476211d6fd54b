use crate::libs::{entry::TimeEntry, entry_log::EntryLog, messages::Message};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct RecordArgs {
    #[arg(short, long, help = "Start time (HH:MM)")]
    start: String,
    #[arg(short, long, help = "End time (HH:MM)")]
    end: String,
    #[arg(short, long, help = "Date (YYYY-MM-DD), defaults to today")]
    date: Option<String>,
    #[arg(short, long, help = "Free-text memo", default_value = "")]
    memo: String,
    #[arg(long, value_name = "INDEX", help = "Overwrite the entry at this log index instead of appending")]
    edit: Option<usize>,
}

pub fn cmd(args: RecordArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    let entry = TimeEntry::new(&date, &args.start, &args.end, &args.memo)?;

    let mut log = EntryLog::new()?;
    match args.edit {
        Some(index) => {
            if !log.update(index, entry) {
                msg_bail_anyhow!(Message::EntryNotFound(index));
            }
            log.save()?;
            msg_success!(Message::EntryUpdated(index));
        }
        None => {
            log.insert(entry);
            log.save()?;
            msg_success!(Message::EntryRecorded(date));
        }
    }

    Ok(())
}
