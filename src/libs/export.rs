//! Entry log export for backup and external analysis.
//!
//! JSON export writes the log as a pretty-printed array in the exact shape
//! the log is stored in, so an exported file round-trips through `import`
//! unchanged. CSV export flattens the same records for spreadsheet use.

use crate::libs::entry::TimeEntry;
use anyhow::Result;
use chrono::Local;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON array, the same shape as the stored log.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

/// Writes the entry log to a file in the configured format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path a timestamped default
    /// name is generated, e.g. `kintai_export_20250115_143022.json`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("kintai_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Writes `entries` and returns the output path.
    pub fn export(&self, entries: &[TimeEntry]) -> Result<&Path> {
        match self.format {
            ExportFormat::Json => {
                let file = File::create(&self.output_path)?;
                serde_json::to_writer_pretty(&file, entries)?;
            }
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&self.output_path)?;
                for entry in entries {
                    writer.serialize(entry)?;
                }
                writer.flush()?;
            }
        }

        Ok(&self.output_path)
    }
}
