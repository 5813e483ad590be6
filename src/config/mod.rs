pub mod models;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, EscapedOutputConfigItem, FileLoggingConfigItem, PlatformConfigItem,
};
use crate::core::types::{Platform, PlatformSetting};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

pub const DEFAULT_CONFIG_PATH: &str = "tty-cursor.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    Platform,
    FileLoggingEnabled,
    EscapedOutput,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub platform: PlatformConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
    #[serde(default)]
    pub escaped_output: EscapedOutputConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
}

impl Config {
    /// Load `path`, or fall back to defaults (remembering `path` for later
    /// saves) when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                data: ConfigFile::default(),
            })
        }
    }

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
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn platform_setting(&self) -> PlatformSetting {
        *self.data.platform.get_value()
    }

    pub fn platform(&self) -> Platform {
        self.platform_setting().resolve()
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn escaped_output(&self) -> bool {
        self.data.escaped_output.get_value().0
    }

    pub fn rows(&self) -> ConfigRows {
        let rows = ConfigKey::iter()
            .map(|key| {
                let (description, value) = match key {
                    ConfigKey::Platform => (
                        self.data.platform.description(),
                        self.data.platform.get_value().to_string(),
                    ),
                    ConfigKey::FileLoggingEnabled => (
                        self.data.file_logging_enabled.description(),
                        self.data.file_logging_enabled.get_value().to_string(),
                    ),
                    ConfigKey::EscapedOutput => (
                        self.data.escaped_output.description(),
                        self.data.escaped_output.get_value().to_string(),
                    ),
                };
                (key.to_string(), description.to_string(), value)
            })
            .collect();
        ConfigRows(rows)
    }

    /// Validate and persist a new value. Returns `(old, new)` display values.
    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<(String, String)> {
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str.trim(),
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<(String, String)> {
        let old = self.value_of(key);
        match key {
            ConfigKey::Platform => self.data.platform.set_value(new_value)?,
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.set_value(new_value)?,
            ConfigKey::EscapedOutput => self.data.escaped_output.set_value(new_value)?,
        }
        self.save()?;
        Ok((old, self.value_of(key)))
    }

    fn value_of(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Platform => self.data.platform.get_value().to_string(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.get_value().to_string(),
            ConfigKey::EscapedOutput => self.data.escaped_output.get_value().to_string(),
        }
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
