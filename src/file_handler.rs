//! File-based logging handler.
//!
//! [`FileHandler`] owns a file opened in append mode. Every accepted record
//! is written with a single unbuffered `write_all` before `handle` returns,
//! so a failed line is never held back for a later call. The file is synced
//! and closed when the handler is dropped; failures at that point are
//! reported through the `log` facade.

use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::warn;

use crate::{
    handler::{Handler, HandlerError, Sink},
    handlers::HandlerKind,
    level::LogLevel,
};

/// Sink owning an append-mode file.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Open `path` for appending, creating it when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HandlerError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| HandlerError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    const NAME: &'static str = HandlerKind::File.default_name();

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.file.write_all(buf.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Drop for FileSink {
    /// Sync the file to storage; it closes when `file` drops.
    fn drop(&mut self) {
        if let Err(err) = self.file.sync_all() {
            warn!(
                "FileHandler: failed to sync {} on close: {err}",
                self.path.display()
            );
        }
    }
}

/// Handler that appends to a file it owns.
pub type FileHandler = Handler<FileSink>;

impl FileHandler {
    /// Open `path` with formatting enabled and no level of its own.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HandlerError> {
        Self::open_with(path, true, LogLevel::NotSet)
    }

    /// Open `path` with explicit formatting flag and level.
    pub fn open_with<P: AsRef<Path>>(
        path: P,
        format_messages: bool,
        level: LogLevel,
    ) -> Result<Self, HandlerError> {
        let sink = FileSink::open(path)?;
        Ok(Handler::from_sink(sink, format_messages, level))
    }

    /// Path the handler was opened with.
    pub fn path(&self) -> PathBuf {
        self.with_sink(|sink| sink.path().to_path_buf())
    }
}
