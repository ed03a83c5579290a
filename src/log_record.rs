//! Log record representation.
//!
//! A [`Record`] is produced by the caller and handed to handlers by
//! reference. Handlers never keep a record beyond a single `handle` call.

use std::process;
use std::time::SystemTime;

use crate::level::LogLevel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Severity of the record.
    pub level: LogLevel,
    /// Time the record was created.
    pub timestamp: SystemTime,
    /// Identifier of the component that produced the record.
    pub domain: String,
    /// The log message content.
    pub message: String,
    /// ID of the process that created the record.
    pub process_id: u32,
}

impl Record {
    /// Construct a record stamped with the current time and process.
    pub fn new(level: LogLevel, domain: &str, message: &str) -> Self {
        Self {
            level,
            timestamp: SystemTime::now(),
            domain: domain.to_owned(),
            message: message.to_owned(),
            process_id: process::id(),
        }
    }

    /// Replace the capture time, mainly for reproducible output.
    pub fn with_timestamp(mut self, timestamp: SystemTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_process_id(mut self, process_id: u32) -> Self {
        self.process_id = process_id;
        self
    }
}
