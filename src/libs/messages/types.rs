#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryRecorded(String),      // date
    EntryUpdated(usize),        // index
    EntryDeleted(usize),        // index
    EntryNotFound(usize),       // index
    ConfirmDeleteEntry(String), // rendered entry
    LogEmpty,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptWeekStart,
    PromptRunningTotal,

    // === IMPORT / EXPORT MESSAGES ===
    ImportSucceeded(usize),          // entry count
    ImportInvalidFormat(String),     // reason
    ImportMalformedEntries(usize),   // count
    ConfirmImportReplace(usize, usize), // incoming, existing
    DataExported(String),            // path

    // === VALIDATION MESSAGES ===
    InvalidMonth(u32),
    InvalidDate(String),

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
