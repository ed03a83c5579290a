use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a record, ordered from least to most severe.
///
/// `NotSet` sorts below every real severity. As a handler level it means
/// "no threshold of its own"; the registry's default applies instead.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    NotSet = 0,
    Debug = 1,
    Info = 2,
    #[serde(alias = "WARN")]
    Warning = 3,
    Error = 4,
    #[serde(alias = "CRITICAL")]
    Fatal = 5,
}

/// Returned when a string does not name a level.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid log level: {0}")]
pub struct ParseLevelError(pub String);

impl LogLevel {
    /// Upper-case label used in formatted output.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::NotSet => "NOTSET",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    pub const fn is_set(self) -> bool {
        !matches!(self, LogLevel::NotSet)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NOTSET" => Ok(Self::NotSet),
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "FATAL" | "CRITICAL" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ParseLevelError;

    fn try_from(value: u8) -> Result<Self, ParseLevelError> {
        match value {
            0 => Ok(Self::NotSet),
            1 => Ok(Self::Debug),
            2 => Ok(Self::Info),
            3 => Ok(Self::Warning),
            4 => Ok(Self::Error),
            5 => Ok(Self::Fatal),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}
