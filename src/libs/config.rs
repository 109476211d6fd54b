//! Application configuration management.
//!
//! Settings live in a JSON file in the platform data directory, next to the
//! entry log. A missing or unreadable file is not an error: the application
//! runs on defaults until `kintai init` writes a config.
//!
//! Two settings exist today:
//!
//! - **`week_start`**: which weekday anchors weekly aggregation and the
//!   leftmost calendar column. Sunday by default.
//! - **`running_total`**: whether the calendar view shows the cumulative
//!   month total after each week-row in addition to the week subtotal.
//!
//! `Config::init` runs the interactive setup wizard used by the `init`
//! command; reads and writes go through [`Config::read`] and
//! [`Config::save`].

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::week::WeekStart;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    /// First weekday of the aggregation week and calendar grid.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Show the cumulative running total in the calendar view by default.
    #[serde(default)]
    pub running_total: bool,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Persists the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults so
    /// re-running `init` only changes what the user touches.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();

        let week_start_options = [WeekStart::Sunday, WeekStart::Monday];
        let preselected = week_start_options.iter().position(|ws| *ws == config.week_start).unwrap_or(0);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWeekStart.to_string())
            .items(&week_start_options)
            .default(preselected)
            .interact()?;

        let running_total = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRunningTotal.to_string())
            .default(config.running_total)
            .interact()?;

        Ok(Config {
            week_start: week_start_options[selection],
            running_total,
        })
    }
}
