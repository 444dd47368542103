//! Engine configuration.
//!
//! The only knob is the maximum horizon: the last date generation may reach
//! when a rule carries no end date. It is always passed in explicitly so the
//! evaluator and generator never embed a fixed cutoff.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{RepeatError, Result};

/// Fallback horizon used by [`EngineConfig::default`].
pub const DEFAULT_MAX_HORIZON: NaiveDate = match NaiveDate::from_ymd_opt(2025, 10, 30) {
    Some(date) => date,
    None => panic!("invalid default horizon"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Inclusive upper bound for rules without an end date.
    #[serde(default = "default_max_horizon", deserialize_with = "horizon_from_str")]
    pub max_horizon: NaiveDate,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_horizon: DEFAULT_MAX_HORIZON,
        }
    }
}

impl EngineConfig {
    pub fn with_max_horizon(mut self, max_horizon: NaiveDate) -> Self {
        self.max_horizon = max_horizon;
        self
    }

    /// Parse configuration from TOML text.
    ///
    /// ```toml
    /// max_horizon = "2026-12-31"
    /// ```
    ///
    /// # Errors
    /// Returns `RepeatError::Config` if the TOML is malformed or the horizon
    /// is not a valid `YYYY-MM-DD` date.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| RepeatError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `RepeatError::Config` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .map_err(|e| RepeatError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&s)
    }
}

fn default_max_horizon() -> NaiveDate {
    DEFAULT_MAX_HORIZON
}

fn horizon_from_str<'de, D>(d: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(d)?;
    crate::calendar::parse_date(&raw).map_err(serde::de::Error::custom)
}
