//! Readiness waits for sources used by the bounded reader.

use std::{
    io::{self, Read},
    net::TcpStream,
    time::Duration,
};

/// A readable source that can block until data is pending.
pub trait Readiness: Read {
    /// Wait up to `timeout` for the source to become readable.
    ///
    /// Returns `Ok(false)` when the wait timed out. End of stream counts as
    /// readable so the following read can observe it.
    fn wait_readable(&mut self, timeout: Duration) -> io::Result<bool>;
}

impl Readiness for TcpStream {
    fn wait_readable(&mut self, timeout: Duration) -> io::Result<bool> {
        // A blocking peek with a read timeout stands in for poll(2). The
        // stream is back in non-blocking mode on every return path.
        self.set_nonblocking(false)?;
        let outcome = self
            .set_read_timeout(Some(timeout))
            .and_then(|()| peek_ready(self));
        let restored = self
            .set_read_timeout(None)
            .and_then(|()| self.set_nonblocking(true));
        let ready = outcome?;
        restored?;
        Ok(ready)
    }
}

fn peek_ready(stream: &TcpStream) -> io::Result<bool> {
    let mut peeked = [0u8; 1];
    match stream.peek(&mut peeked) {
        Ok(_) => Ok(true),
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
            ) =>
        {
            Ok(false)
        }
        Err(err) if err.kind() == io::ErrorKind::Interrupted => Ok(true),
        Err(err) => Err(err),
    }
}
