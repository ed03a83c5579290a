//! Formatter implementations.
//!
//! Provides the [`RecordFormatter`] trait used by handlers when
//! `format_messages` is enabled, the crate's [`DefaultFormatter`] and a
//! cheaply clonable [`SharedFormatter`] wrapper.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::log_record::Record;

/// `strftime` layout of the timestamp written by [`DefaultFormatter`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trait for formatting log records into strings.
///
/// Implementors must be thread-safe (`Send + Sync`) because a handler may
/// format records from several threads at once. Implementations must be
/// pure: equal records always yield equal output.
pub trait RecordFormatter: Send + Sync {
    /// Format a log record into a single line, without a terminator.
    fn format(&self, record: &Record) -> String;
}

/// Shared formatter trait object used across handlers.
#[derive(Clone)]
pub struct SharedFormatter {
    inner: Arc<dyn RecordFormatter>,
}

impl SharedFormatter {
    /// Create a shared formatter from an owned formatter implementation.
    pub fn new<F>(formatter: F) -> Self
    where
        F: RecordFormatter + 'static,
    {
        Self {
            inner: Arc::new(formatter),
        }
    }

    /// Format a log record using the wrapped formatter instance.
    pub fn format(&self, record: &Record) -> String {
        self.inner.format(record)
    }
}

impl Default for SharedFormatter {
    fn default() -> Self {
        Self::new(DefaultFormatter)
    }
}

impl fmt::Debug for SharedFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedFormatter(<dyn RecordFormatter>)")
    }
}

/// Writes `<timestamp> <domain> <LEVEL> [pid <id>] <message>`.
///
/// The timestamp is rendered in UTC with second precision using
/// [`TIMESTAMP_FORMAT`].
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultFormatter;

impl RecordFormatter for DefaultFormatter {
    fn format(&self, record: &Record) -> String {
        let created: DateTime<Utc> = record.timestamp.into();
        format!(
            "{} {} {} [pid {}] {}",
            created.format(TIMESTAMP_FORMAT),
            record.domain,
            record.level,
            record.process_id,
            record.message
        )
    }
}

impl<F> RecordFormatter for F
where
    F: Fn(&Record) -> String + Send + Sync,
{
    fn format(&self, record: &Record) -> String {
        self(record)
    }
}
