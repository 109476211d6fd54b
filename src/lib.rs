//! # Kintai - Work Hours Logging
//!
//! A command-line timesheet utility for recording work intervals,
//! summarizing worked hours, and rendering a month-grid calendar.
//!
//! ## Features
//!
//! - **Interval Recording**: Record work intervals with date, start, end, and memo
//! - **Hours Derivation**: Worked hours computed from the interval, never entered by hand
//! - **Summaries**: Daily, weekly, and monthly hour totals
//! - **Calendar View**: Month grid with per-day hours and per-week subtotals
//! - **Data Export**: Export the log to JSON and CSV formats
//! - **Configurable Week Start**: Sunday- or Monday-anchored weeks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kintai::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
