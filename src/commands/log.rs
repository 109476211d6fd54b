use crate::libs::{entry_log::EntryLog, messages::Message, view::View};
use crate::msg_info;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let log = EntryLog::new()?;

    if log.entries.is_empty() {
        msg_info!(Message::LogEmpty);
        return Ok(());
    }

    View::entries(&log.entries)
}
