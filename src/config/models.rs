use crate::core::types::{Bool, PlatformSetting};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfigItem {
    pub value: PlatformSetting,
    pub description: String,
}

impl Default for PlatformConfigItem {
    fn default() -> Self {
        Self {
            value: PlatformSetting::Auto,
            description: "Save/restore convention (auto, windows, ansi).".into(),
        }
    }
}

impl ConfigItem<PlatformSetting> for PlatformConfigItem {
    fn get_value(&self) -> &PlatformSetting {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = PlatformSetting::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
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
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscapedOutputConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for EscapedOutputConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(false),
            description: "Print sequences in readable \\e[ form.".into(),
        }
    }
}

impl ConfigItem<Bool> for EscapedOutputConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
