//! Serialisable handler definitions.
//!
//! [`HandlerConfig`] mirrors the builders as plain data, tagged by `kind`,
//! so registries can load handler definitions from configuration files.
//!
//! ```json
//! {"kind": "file", "path": "/var/log/router.log", "level": "WARNING"}
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    FileHandlerBuilder, HandlerBuildError, HandlerBuilderTrait, HandlerKind,
    StreamHandlerBuilder, StreamTarget,
};
use crate::{handler::LogHandler, level::LogLevel};

fn default_format_messages() -> bool {
    true
}

/// Declarative description of one handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HandlerConfig {
    Stream {
        #[serde(default)]
        target: StreamTarget,
        #[serde(default = "default_format_messages")]
        format_messages: bool,
        #[serde(default)]
        level: LogLevel,
    },
    File {
        path: PathBuf,
        #[serde(default = "default_format_messages")]
        format_messages: bool,
        #[serde(default)]
        level: LogLevel,
    },
}

impl HandlerConfig {
    /// Parse a single handler definition from JSON.
    pub fn from_json(input: &str) -> Result<Self, HandlerBuildError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn kind(&self) -> HandlerKind {
        match self {
            HandlerConfig::Stream { .. } => HandlerKind::Stream,
            HandlerConfig::File { .. } => HandlerKind::File,
        }
    }

    /// Build the described handler.
    pub fn build(&self) -> Result<Box<dyn LogHandler>, HandlerBuildError> {
        match self {
            HandlerConfig::Stream {
                target,
                format_messages,
                level,
            } => StreamHandlerBuilder::new(*target)
                .with_format_messages(*format_messages)
                .with_level(*level)
                .build(),
            HandlerConfig::File {
                path,
                format_messages,
                level,
            } => FileHandlerBuilder::new(path.clone())
                .with_format_messages(*format_messages)
                .with_level(*level)
                .build(),
        }
    }
}
