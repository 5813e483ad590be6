use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Which way `clear_lines` steps between cleared lines.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unsupported direction: '{}'. Valid directions: {}",
                s.trim(),
                valid_csv::<Direction>()
            ))
        })
    }
}

/// Terminal convention used for saving and restoring the cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Platform {
    /// Windows console: `CSI s` / `CSI u`.
    Windows,
    /// DEC/ANSI terminals: `ESC 7` / `ESC 8`.
    Ansi,
}

impl Platform {
    /// Convention of the platform this binary was built for.
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Ansi
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PlatformSetting {
    #[default]
    Auto,
    Windows,
    Ansi,
}

impl PlatformSetting {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unsupported platform: '{}'. Valid platforms: {}",
                s.trim(),
                valid_csv::<PlatformSetting>()
            ))
        })
    }

    pub fn resolve(&self) -> Platform {
        match self {
            PlatformSetting::Auto => Platform::detect(),
            PlatformSetting::Windows => Platform::Windows,
            PlatformSetting::Ansi => Platform::Ansi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
