use crate::libs::{
    entry_log::EntryLog,
    export::{ExportFormat, Exporter},
    messages::Message,
};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "json", help = "Output format")]
    format: ExportFormat,
    #[arg(short, long, help = "Output file path, defaults to a timestamped name")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let log = EntryLog::new()?;

    if log.entries.is_empty() {
        msg_info!(Message::LogEmpty);
        return Ok(());
    }

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(&log.entries)?;

    msg_success!(Message::DataExported(path.display().to_string()));
    Ok(())
}
