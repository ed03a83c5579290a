//! Log-record delivery for the router harness.
//!
//! Handlers filter records by level, optionally format them and write one
//! line per record to a sink: a caller-supplied stream
//! ([`StreamHandler`]) or an owned append-mode file ([`FileHandler`]).
//! [`bounded_read`] provides a deadline-bounded "read exactly N bytes"
//! primitive for observing socket output in tests.

pub mod bounded_read;
pub mod file_handler;
pub mod formatter;
pub mod handler;
pub mod handlers;
pub mod level;
pub mod log_record;
pub mod stream_handler;

#[cfg(any(test, feature = "test-util"))]
pub mod test_utils;

pub use bounded_read::{ReadError, Readiness, read_bytes_with_timeout, read_bytes_with_timeout_ms};
pub use file_handler::{FileHandler, FileSink};
pub use formatter::{DefaultFormatter, RecordFormatter, SharedFormatter};
pub use handler::{Handler, HandlerError, LogHandler, Sink};
pub use handlers::{
    DEFAULT_NAMES, FileHandlerBuilder, HandlerBuildError, HandlerBuilderTrait, HandlerConfig,
    HandlerKind, StreamHandlerBuilder, StreamTarget,
};
pub use level::{LogLevel, ParseLevelError};
pub use log_record::Record;
pub use stream_handler::{StreamHandler, StreamSink};
