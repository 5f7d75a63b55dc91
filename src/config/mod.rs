pub mod models;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, EmphasisConfigItem, FileLoggingConfigItem, LogDirConfigItem,
};
use crate::core::types::EmphasisStyle;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    Emphasis,
    FileLoggingEnabled,
    LogDir,
}

/// On-disk shape. Every item is optional and falls back to its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub emphasis: EmphasisConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
    #[serde(default)]
    pub log_dir: LogDirConfigItem,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    data: ConfigFile,
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self { data })
    }

    pub fn emphasis_style(&self) -> EmphasisStyle {
        *self.data.emphasis.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }
    pub fn log_dir(&self) -> &Path {
        self.data.log_dir.get_value()
    }

    /// One `KEY = value (description)` line per setting, in key order.
    pub fn summary(&self) -> Vec<String> {
        ConfigKey::iter()
            .map(|key| {
                let (value, description) = match key {
                    ConfigKey::Emphasis => (
                        self.data.emphasis.get_value().to_string(),
                        self.data.emphasis.description(),
                    ),
                    ConfigKey::FileLoggingEnabled => (
                        self.data.file_logging_enabled.get_value().to_string(),
                        self.data.file_logging_enabled.description(),
                    ),
                    ConfigKey::LogDir => (
                        self.data.log_dir.get_value().display().to_string(),
                        self.data.log_dir.description(),
                    ),
                };
                if description.is_empty() {
                    format!("{key} = {value}")
                } else {
                    format!("{key} = {value} ({description})")
                }
            })
            .collect()
    }
}
