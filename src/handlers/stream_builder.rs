//! Builder for [`StreamHandler`](crate::StreamHandler).
//!
//! Allows configuration of stream based handlers writing to `stdout` or
//! `stderr`. `stderr` is the default target.

use std::io;

use serde::{Deserialize, Serialize};

use super::{HandlerBuildError, HandlerBuilderTrait, HandlerKind, common::CommonBuilder};
use crate::{
    formatter::RecordFormatter,
    handler::{Handler, HandlerError, LogHandler},
    level::LogLevel,
    log_record::Record,
    stream_handler::StreamSink,
};

/// Standard stream targeted by a [`StreamHandlerBuilder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamTarget {
    Stdout,
    #[default]
    Stderr,
}

/// Builder for constructing [`StreamHandler`](crate::StreamHandler) instances.
#[derive(Clone, Debug)]
pub struct StreamHandlerBuilder {
    target: StreamTarget,
    common: CommonBuilder,
}

impl StreamHandlerBuilder {
    pub fn new(target: StreamTarget) -> Self {
        Self {
            target,
            common: CommonBuilder::default(),
        }
    }

    /// Create a builder targeting `stdout`.
    pub fn stdout() -> Self {
        Self::new(StreamTarget::Stdout)
    }

    /// Create a builder targeting `stderr`.
    pub fn stderr() -> Self {
        Self::new(StreamTarget::Stderr)
    }

    pub fn target(&self) -> StreamTarget {
        self.target
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
}

impl Default for StreamHandlerBuilder {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Handler produced by [`StreamHandlerBuilder`].
///
/// The target is only known at runtime, so both standard streams are
/// carried as one concrete type.
pub enum StandardStreamHandler {
    Stdout(Handler<StreamSink<io::Stdout>>),
    Stderr(Handler<StreamSink<io::Stderr>>),
}

impl StandardStreamHandler {
    fn inner(&self) -> &dyn LogHandler {
        match self {
            Self::Stdout(handler) => handler as &dyn LogHandler,
            Self::Stderr(handler) => handler as &dyn LogHandler,
        }
    }
}

impl LogHandler for StandardStreamHandler {
    fn handle(&self, record: &Record) -> Result<(), HandlerError> {
        self.inner().handle(record)
    }

    fn level(&self) -> LogLevel {
        self.inner().level()
    }

    fn set_level(&self, level: LogLevel) {
        self.inner().set_level(level);
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn flush(&self) -> Result<(), HandlerError> {
        self.inner().flush()
    }
}

impl HandlerBuilderTrait for StreamHandlerBuilder {
    type Handler = StandardStreamHandler;

    fn kind(&self) -> HandlerKind {
        HandlerKind::Stream
    }

    fn build_inner(&self) -> Result<Self::Handler, HandlerBuildError> {
        let handler = match self.target {
            StreamTarget::Stdout => {
                StandardStreamHandler::Stdout(self.common.finish(StreamSink::new(io::stdout())))
            }
            StreamTarget::Stderr => {
                StandardStreamHandler::Stderr(self.common.finish(StreamSink::new(io::stderr())))
            }
        };
        Ok(handler)
    }
}
