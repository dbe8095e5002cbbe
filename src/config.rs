//! Demo settings read from an optional `solid.toml`.
//!
//! Every field has a default, so an empty file (or no file at all) runs the
//! demos with the values the exercises were written against.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SolidError};
use crate::interface_segregation::solution::{Record, SEED_RECORDS};

pub const DEFAULT_CONFIG_FILE: &str = "solid.toml";
pub const DEFAULT_LOG_PATH: &str = "out/production/resources/logs/today.log";
pub const DEFAULT_HOURS_REPORTED: u32 = 40;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Hours used by the payroll demos.
    pub hours_reported: u32,
    /// Target of the file logger in the dependency inversion demo.
    pub log_path: PathBuf,
    /// Records the data source starts with.
    pub seed_records: Vec<Record>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            hours_reported: DEFAULT_HOURS_REPORTED,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            seed_records: SEED_RECORDS.clone(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|err| SolidError::config(path, err.message()))
    }

    /// Like [`DemoConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(SolidError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }
}
