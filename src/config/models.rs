use crate::core::types::{Bool, EmphasisStyle};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmphasisConfigItem {
    pub value: EmphasisStyle,
    #[serde(default)]
    pub description: String,
}

impl Default for EmphasisConfigItem {
    fn default() -> Self {
        Self {
            value: EmphasisStyle::Auto,
            description: "How today's date is highlighted (auto, ansi, plain).".into(),
        }
    }
}

impl ConfigItem<EmphasisStyle> for EmphasisConfigItem {
    fn get_value(&self) -> &EmphasisStyle {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    #[serde(default)]
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(false),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogDirConfigItem {
    pub value: PathBuf,
    #[serde(default)]
    pub description: String,
}

impl Default for LogDirConfigItem {
    fn default() -> Self {
        Self {
            value: PathBuf::from("logs"),
            description: "Directory for session log files.".into(),
        }
    }
}

impl ConfigItem<PathBuf> for LogDirConfigItem {
    fn get_value(&self) -> &PathBuf {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
