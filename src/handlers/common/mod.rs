//! Shared builder options.
//!
//! Stores fields common to every handler builder and applies them to a
//! freshly constructed handler.

use crate::{
    formatter::{RecordFormatter, SharedFormatter},
    handler::{Handler, Sink},
    level::LogLevel,
};

#[derive(Clone, Debug)]
pub struct CommonBuilder {
    pub(crate) level: LogLevel,
    pub(crate) format_messages: bool,
    pub(crate) formatter: Option<SharedFormatter>,
}

impl Default for CommonBuilder {
    fn default() -> Self {
        Self {
            level: LogLevel::NotSet,
            format_messages: true,
            formatter: None,
        }
    }
}

impl CommonBuilder {
    pub(crate) fn set_formatter<F>(&mut self, formatter: F)
    where
        F: RecordFormatter + 'static,
    {
        self.formatter = Some(SharedFormatter::new(formatter));
    }

    /// Wrap `sink` in a handler carrying the configured options.
    pub(crate) fn finish<S: Sink>(&self, sink: S) -> Handler<S> {
        let handler = Handler::from_sink(sink, self.format_messages, self.level);
        match &self.formatter {
            Some(formatter) => handler.with_shared_formatter(formatter.clone()),
            None => handler,
        }
    }
}
