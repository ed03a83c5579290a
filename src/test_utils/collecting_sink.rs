//! A sink that accumulates lines in memory for test assertions.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::handler::Sink;

/// Sink that stores every line it receives for later inspection.
///
/// Clones share storage, so a test can keep one clone while the handler
/// owns the other.
#[derive(Clone, Default)]
pub struct CollectingSink {
    lines: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl CollectingSink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink whose writes always fail with `BrokenPipe`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Return a snapshot of all lines received so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Sink for CollectingSink {
    const NAME: &'static str = "collecting";

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.lines.lock().push(line.to_owned());
        Ok(())
    }
}
