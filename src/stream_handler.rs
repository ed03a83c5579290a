//! Stream-based logging handler implementation.
//!
//! [`StreamHandler`] writes each accepted record as one line to an
//! `io::Write` stream. Pass `&mut writer` to keep ownership of the stream
//! with the caller; the borrow then guarantees the stream outlives the
//! handler. Owned writers such as `io::Stderr` work the same way.

use std::io::{self, Write};

use crate::{
    handler::{Handler, Sink},
    handlers::HandlerKind,
    level::LogLevel,
};

/// Sink adapter over any writer.
#[derive(Debug)]
pub struct StreamSink<W> {
    writer: W,
}

impl<W> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    const NAME: &'static str = HandlerKind::Stream.default_name();

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        // One write_all per line keeps the terminator attached to the text
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.writer.write_all(buf.as_bytes())?;
        self.writer.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Handler writing to an output stream.
pub type StreamHandler<W> = Handler<StreamSink<W>>;

impl<W: Write + Send> StreamHandler<W> {
    /// Create a handler with formatting enabled and no level of its own.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, true, LogLevel::NotSet)
    }

    /// Create a handler with explicit formatting flag and level.
    pub fn with_options(writer: W, format_messages: bool, level: LogLevel) -> Self {
        Handler::from_sink(StreamSink::new(writer), format_messages, level)
    }

    /// Consume the handler and hand the stream back.
    pub fn into_writer(self) -> W {
        self.into_sink().into_inner()
    }
}

impl StreamHandler<io::Stdout> {
    /// Create a new handler writing to `stdout`.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamHandler<io::Stderr> {
    /// Create a new handler writing to `stderr`.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}
