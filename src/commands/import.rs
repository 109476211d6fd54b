use crate::libs::{entry::TimeEntry, entry_log::EntryLog, messages::Message};
use crate::{msg_error_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    #[arg(help = "JSON file holding an array of entries")]
    file: PathBuf,
    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)?;

    // The whole file must parse before the stored log is touched.
    let imported: Vec<TimeEntry> =
        serde_json::from_str(&content).map_err(|e| msg_error_anyhow!(Message::ImportInvalidFormat(e.to_string())))?;

    let mut log = EntryLog::new()?;

    if !args.yes && !log.entries.is_empty() {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmImportReplace(imported.len(), log.entries.len()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    // Records with unparsable dates or hours are kept verbatim but skipped
    // by every aggregation, so they only get a warning here.
    let malformed = imported
        .iter()
        .filter(|entry| entry.date_value().is_none() || entry.hours_value().is_none())
        .count();
    if malformed > 0 {
        msg_warning!(Message::ImportMalformedEntries(malformed));
    }

    let count = imported.len();
    log.replace(imported);
    log.save()?;

    msg_success!(Message::ImportSucceeded(count));
    Ok(())
}
