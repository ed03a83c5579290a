//! Deadline-bounded reads from non-blocking sockets.
//!
//! [`read_bytes_with_timeout`] reads exactly `n` bytes or fails, and tells
//! apart the three ways a short read can end: the deadline passed, the peer
//! closed the connection, or the read itself failed.

mod readiness;

use std::{
    io::{self, Read},
    time::{Duration, Instant},
};

use log::debug;
use thiserror::Error;

pub use readiness::Readiness;

/// Why a bounded read returned fewer bytes than requested.
///
/// Every variant carries the number of bytes already copied into the
/// caller's buffer.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("timed out after reading {read} of {requested} bytes")]
    Timeout { read: usize, requested: usize },
    #[error("connection closed after reading {read} of {requested} bytes")]
    Eof { read: usize, requested: usize },
    #[error("read failed after {read} of {requested} bytes: {source}")]
    Io {
        read: usize,
        requested: usize,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    /// Bytes obtained before the failure.
    pub fn bytes_read(&self) -> usize {
        match self {
            ReadError::Timeout { read, .. }
            | ReadError::Eof { read, .. }
            | ReadError::Io { read, .. } => *read,
        }
    }
}

/// Read exactly `n` bytes from `source` into `buf[..n]` within `timeout`.
///
/// `source` must already be in non-blocking mode. A zero `n` returns at once
/// without touching the source; a zero `timeout` still performs one read.
/// Elapsed time is measured with [`Instant`].
///
/// # Panics
///
/// Panics if `buf` is shorter than `n`.
pub fn read_bytes_with_timeout<S>(
    source: &mut S,
    buf: &mut [u8],
    n: usize,
    timeout: Duration,
) -> Result<usize, ReadError>
where
    S: Readiness + ?Sized,
{
    assert!(
        buf.len() >= n,
        "buffer of {} bytes cannot hold {n} requested bytes",
        buf.len()
    );
    if n == 0 {
        return Ok(0);
    }

    let started = Instant::now();
    let mut read = 0;
    loop {
        match source.read(&mut buf[read..n]) {
            Ok(0) => {
                debug!("bounded read: peer closed after {read} of {n} bytes");
                return Err(ReadError::Eof { read, requested: n });
            }
            Ok(count) => {
                read += count;
                if read == n {
                    return Ok(n);
                }
            }
            Err(err) if err.kind() == io::ErrorKind::WouldBlock => {
                let remaining = timeout.saturating_sub(started.elapsed());
                if remaining.is_zero() {
                    debug!("bounded read: deadline of {timeout:?} passed after {read} of {n} bytes");
                    return Err(ReadError::Timeout { read, requested: n });
                }
                let ready = source.wait_readable(remaining).map_err(|source| ReadError::Io {
                    read,
                    requested: n,
                    source,
                })?;
                if !ready {
                    debug!("bounded read: deadline of {timeout:?} passed after {read} of {n} bytes");
                    return Err(ReadError::Timeout { read, requested: n });
                }
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(source) => {
                return Err(ReadError::Io {
                    read,
                    requested: n,
                    source,
                });
            }
        }
    }
}

/// [`read_bytes_with_timeout`] with the timeout given in milliseconds.
pub fn read_bytes_with_timeout_ms<S>(
    source: &mut S,
    buf: &mut [u8],
    n: usize,
    timeout_ms: u64,
) -> Result<usize, ReadError>
where
    S: Readiness + ?Sized,
{
    read_bytes_with_timeout(source, buf, n, Duration::from_millis(timeout_ms))
}
