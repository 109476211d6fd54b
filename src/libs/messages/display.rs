use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntryRecorded(date) => format!("Work interval recorded for {}", date),
            Message::EntryUpdated(index) => format!("Entry #{} updated", index),
            Message::EntryDeleted(index) => format!("Entry #{} deleted", index),
            Message::EntryNotFound(index) => format!("No entry with index {}", index),
            Message::ConfirmDeleteEntry(entry) => format!("Delete this entry?\n  {}", entry),
            Message::LogEmpty => "No entries recorded yet".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptWeekStart => "First day of the week".to_string(),
            Message::PromptRunningTotal => "Show the cumulative month total in the calendar view".to_string(),

            // === IMPORT / EXPORT MESSAGES ===
            Message::ImportSucceeded(count) => format!("Imported {} entries", count),
            Message::ImportInvalidFormat(reason) => format!("Invalid import file: {}", reason),
            Message::ImportMalformedEntries(count) => {
                format!("{} imported entries have malformed dates or hours and will be ignored by summaries", count)
            }
            Message::ConfirmImportReplace(incoming, existing) => {
                format!("Replace {} existing entries with {} imported ones?", existing, incoming)
            }
            Message::DataExported(path) => format!("Data exported to {}", path),

            // === VALIDATION MESSAGES ===
            Message::InvalidMonth(month) => format!("Month {} is out of range, expected 1-12", month),
            Message::InvalidDate(date) => format!("Invalid date '{}', expected YYYY-MM-DD", date),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
