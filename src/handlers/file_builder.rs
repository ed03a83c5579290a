//! Builder for [`FileHandler`].
//!
//! Provides a fluent API for configuring a file based logging handler.
//! The file is only opened by `build`, so a builder can be validated and
//! stored before the path exists.

use std::path::{Path, PathBuf};

use super::{HandlerBuildError, HandlerBuilderTrait, HandlerKind, common::CommonBuilder};
use crate::{
    file_handler::{FileHandler, FileSink},
    formatter::RecordFormatter,
    level::LogLevel,
};

/// Builder for constructing [`FileHandler`] instances.
#[derive(Clone, Debug)]
pub struct FileHandlerBuilder {
    path: PathBuf,
    common: CommonBuilder,
}

impl FileHandlerBuilder {
    /// Create a builder targeting the specified file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            common: CommonBuilder::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set the initial handler level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.common.level = level;
        self
    }

    /// Choose between formatted lines and raw messages.
    pub fn with_format_messages(mut self, format_messages: bool) -> Self {
        self.common.format_messages = format_messages;
        self
    }

    /// Set the formatter used for formatted lines.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: RecordFormatter + 'static,
    {
        self.common.set_formatter(formatter);
        self
    }

    fn validate(&self) -> Result<(), HandlerBuildError> {
        if self.path.as_os_str().is_empty() {
            return Err(HandlerBuildError::InvalidConfig(
                "path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl HandlerBuilderTrait for FileHandlerBuilder {
    type Handler = FileHandler;

    fn kind(&self) -> HandlerKind {
        HandlerKind::File
    }

    fn build_inner(&self) -> Result<FileHandler, HandlerBuildError> {
        self.validate()?;
        let sink = FileSink::open(&self.path)?;
        Ok(self.common.finish(sink))
    }
}
