pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod entry_log;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod summary;
pub mod view;
pub mod week;
