use crate::libs::{entry_log::EntryLog, messages::Message, view::View};
use crate::{msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(help = "Log index of the entry to delete")]
    index: usize,
    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut log = EntryLog::new()?;

    let entry = log
        .entries
        .get(args.index)
        .ok_or_else(|| msg_error_anyhow!(Message::EntryNotFound(args.index)))?;

    if !args.yes {
        let summary = format!("{} {}-{} {}", entry.date, entry.start, entry.end, entry.memo);
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEntry(summary).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    log.remove(args.index);
    log.save()?;
    msg_success!(Message::EntryDeleted(args.index));

    if !log.entries.is_empty() {
        View::entries(&log.entries)?;
    }

    Ok(())
}
