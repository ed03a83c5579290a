//! Core handler abstraction.
//!
//! A [`Handler`] decides whether a record should be emitted and how it is
//! rendered, then passes the resulting line to its [`Sink`]. The sink sits
//! behind a per-handler mutex so concurrent callers never interleave
//! partial lines. Concrete handlers are compositions of `Handler` with a
//! sink type, see [`crate::StreamHandler`] and [`crate::FileHandler`].

use std::{
    io,
    path::PathBuf,
    sync::atomic::{AtomicU8, Ordering},
};

// parking_lot avoids poisoning: a panicking writer must not disable the handler
use parking_lot::Mutex;
use thiserror::Error;

use crate::{
    formatter::{RecordFormatter, SharedFormatter},
    level::LogLevel,
    log_record::Record,
};

/// Errors surfaced by handler construction and delivery.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The sink could not be opened.
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing to an open sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Destination that durably receives formatted lines.
///
/// Implementations are only ever called with the owning handler's lock
/// held, so they may assume exclusive access.
pub trait Sink: Send {
    /// Registry key for handlers writing to this kind of sink.
    const NAME: &'static str;

    /// Write `line` followed by a line terminator and make it visible.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Push any buffered bytes to the underlying destination.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Object-safe view of a handler, used to store heterogeneous handlers in
/// one collection.
pub trait LogHandler: Send + Sync {
    /// Filter, format and deliver `record`.
    fn handle(&self, record: &Record) -> Result<(), HandlerError>;

    /// Current minimum level.
    fn level(&self) -> LogLevel;

    /// Replace the minimum level.
    fn set_level(&self, level: LogLevel);

    /// Default registry key, e.g. `"stream"` or `"file"`.
    fn name(&self) -> &'static str;

    /// Flush the sink.
    fn flush(&self) -> Result<(), HandlerError>;
}

/// Level filter and formatter bound to exactly one sink.
#[derive(Debug)]
pub struct Handler<S> {
    format_messages: bool,
    level: AtomicU8,
    formatter: SharedFormatter,
    sink: Mutex<S>,
}

impl<S: Sink> Handler<S> {
    /// Wrap `sink` with the given formatting flag and level.
    pub fn from_sink(sink: S, format_messages: bool, level: LogLevel) -> Self {
        Self {
            format_messages,
            level: AtomicU8::new(u8::from(level)),
            formatter: SharedFormatter::default(),
            sink: Mutex::new(sink),
        }
    }

    /// Replace the formatter applied when `format_messages` is enabled.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: RecordFormatter + 'static,
    {
        self.formatter = SharedFormatter::new(formatter);
        self
    }

    pub(crate) fn with_shared_formatter(mut self, formatter: SharedFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Deliver `record` unless it is below the handler level.
    ///
    /// Delivery failures are returned unchanged. Isolating one handler's
    /// failure from the others is the caller's job.
    pub fn handle(&self, record: &Record) -> Result<(), HandlerError> {
        if !self.is_enabled_for(record.level) {
            return Ok(());
        }
        let line = self.format(record);
        self.sink.lock().write_line(&line)?;
        Ok(())
    }

    /// Render `record` as the line this handler would write.
    pub fn format(&self, record: &Record) -> String {
        if self.format_messages {
            self.formatter.format(record)
        } else {
            record.message.clone()
        }
    }

    /// Whether a record at `level` passes this handler's filter.
    ///
    /// A handler at [`LogLevel::NotSet`] accepts everything.
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        let threshold = self.level();
        !threshold.is_set() || level >= threshold
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(u8::from(level), Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::try_from(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn format_messages(&self) -> bool {
        self.format_messages
    }

    pub fn name(&self) -> &'static str {
        S::NAME
    }

    /// Flush the sink.
    pub fn flush(&self) -> Result<(), HandlerError> {
        self.sink.lock().flush()?;
        Ok(())
    }

    /// Run `f` with exclusive access to the sink.
    pub(crate) fn with_sink<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut *self.sink.lock())
    }

    /// Consume the handler and return its sink.
    pub fn into_sink(self) -> S {
        self.sink.into_inner()
    }
}

impl<S: Sink> LogHandler for Handler<S> {
    fn handle(&self, record: &Record) -> Result<(), HandlerError> {
        Handler::handle(self, record)
    }

    fn level(&self) -> LogLevel {
        Handler::level(self)
    }

    fn set_level(&self, level: LogLevel) {
        Handler::set_level(self, level);
    }

    fn name(&self) -> &'static str {
        Handler::name(self)
    }

    fn flush(&self) -> Result<(), HandlerError> {
        Handler::flush(self)
    }
}
