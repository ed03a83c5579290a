//! Test fixtures that provide `(SharedBuf, StreamHandler)` pairs for
//! integration and property tests. These helpers wrap a shared in-memory
//! buffer so that handlers can be exercised without touching the
//! filesystem.

use harness_logging::{LogLevel, StreamHandler};
use rstest::fixture;

use super::shared_buffer::SharedBuf;

/// Return a raw-message handler with a fresh in-memory buffer.
#[fixture]
pub fn raw_handler() -> (SharedBuf, StreamHandler<SharedBuf>) {
    let buffer = SharedBuf::default();
    let handler = StreamHandler::with_options(buffer.clone(), false, LogLevel::NotSet);
    (buffer, handler)
}

/// Return a formatting handler at `level` with a fresh in-memory buffer.
#[fixture]
pub fn leveled_handler(
    #[default(LogLevel::Info)] level: LogLevel,
) -> (SharedBuf, StreamHandler<SharedBuf>) {
    let buffer = SharedBuf::default();
    let handler = StreamHandler::with_options(buffer.clone(), true, level);
    (buffer, handler)
}
