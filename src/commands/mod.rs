pub mod calendar;
pub mod delete;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod record;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Record a work interval", arg_required_else_help = true)]
    Record(record::RecordArgs),
    #[command(about = "Show the entry log")]
    Log,
    #[command(about = "Delete an entry", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show monthly and weekly hour totals")]
    Sum,
    #[command(about = "Show the month calendar with worked hours")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Export the entry log")]
    Export(export::ExportArgs),
    #[command(about = "Import an entry log", arg_required_else_help = true)]
    Import(import::ImportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Record(args) => record::cmd(args),
            Commands::Log => log::cmd(),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Sum => sum::cmd(),
            Commands::Calendar(args) => calendar::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
        }
    }
}
