//! Snapshot of the operator-controlled settings table.
//!
//! The settings table lives in the retail store and is re-read between
//! batches, so an operator can stop the loop or change the batch size
//! and pause without restarting the process. Values are stored untyped;
//! this module is where they get coerced.

use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Whether reference data and base entities must be created.
pub const FIRST_LOAD: &str = "first_load";
/// Whether the generator keeps running batches. The key is spelled as it
/// appears in the settings table.
pub const CONTINUOUS_LOADING: &str = "continous_loading";
/// Number of orders attempted per batch.
pub const BATCH_SIZE: &str = "batch_size";
/// Seconds to sleep between batches.
pub const PAUSE_SECONDS: &str = "pause_seconds";

/// One `(name, value)` row of the settings table.
pub type SettingRow = (String, String);

/// Errors raised when a required setting cannot be coerced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The setting is not present in the table.
    #[error("Setting '{0}' is missing")]
    Missing(String),

    /// The setting is present but is not a non-negative integer.
    #[error("Setting '{name}' has invalid value '{value}'")]
    Invalid { name: String, value: String },
}

/// Immutable view of the settings table at the time it was read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    /// Build a snapshot from raw rows. A name that appears twice keeps
    /// its last value.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = SettingRow>,
    {
        Self {
            values: rows.into_iter().collect(),
        }
    }

    /// Raw value of a setting.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn first_load(&self) -> bool {
        self.flag(FIRST_LOAD)
    }

    pub fn continuous_loading(&self) -> bool {
        self.flag(CONTINUOUS_LOADING)
    }

    /// Number of iterations per batch.
    pub fn batch_size(&self) -> Result<u64, SettingsError> {
        self.count(BATCH_SIZE)
    }

    /// Pause between batches.
    pub fn pause(&self) -> Result<Duration, SettingsError> {
        self.count(PAUSE_SECONDS).map(Duration::from_secs)
    }

    /// A flag is set only when its value is the integer 1.
    fn flag(&self, name: &str) -> bool {
        self.get(name)
            .and_then(|value| value.trim().parse::<i64>().ok())
            == Some(1)
    }

    fn count(&self, name: &str) -> Result<u64, SettingsError> {
        let value = self
            .get(name)
            .ok_or_else(|| SettingsError::Missing(name.to_string()))?;
        value
            .trim()
            .parse::<u64>()
            .map_err(|_| SettingsError::Invalid {
                name: name.to_string(),
                value: value.to_string(),
            })
    }
}

impl FromIterator<SettingRow> for Settings {
    fn from_iter<T: IntoIterator<Item = SettingRow>>(iter: T) -> Self {
        Self::from_rows(iter)
    }
}
