//! Handler builders and associated traits.
//!
//! Provides a minimal builder API for constructing handlers in a
//! type-safe manner. Each builder implements [`HandlerBuilderTrait`]
//! which returns a boxed [`LogHandler`] ready for registration with a
//! registry. [`HandlerConfig`] describes the same builders as data so
//! they can be loaded from configuration documents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::handler::{HandlerError, LogHandler};

mod common;
pub mod config;
pub mod file_builder;
pub mod stream_builder;

pub use config::HandlerConfig;
pub use file_builder::FileHandlerBuilder;
pub use stream_builder::{StreamHandlerBuilder, StreamTarget};

/// Errors that may occur while building a handler.
#[derive(Debug, Error)]
pub enum HandlerBuildError {
    /// Invalid user supplied configuration.
    #[error("invalid handler configuration: {0}")]
    InvalidConfig(String),
    /// The configuration document could not be parsed.
    #[error("malformed handler configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The handler's sink could not be created.
    #[error(transparent)]
    Handler(#[from] HandlerError),
}

/// Kinds of sink a handler can be built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    Stream,
    File,
}

impl HandlerKind {
    /// Conventional registry key for handlers of this kind.
    ///
    /// Registries holding several handlers of one kind are expected to
    /// derive keys from it, e.g. `"file:audit"`.
    pub const fn default_name(self) -> &'static str {
        match self {
            HandlerKind::Stream => "stream",
            HandlerKind::File => "file",
        }
    }
}

/// Default registry keys for every handler kind.
pub const DEFAULT_NAMES: [(HandlerKind, &str); 2] = [
    (HandlerKind::Stream, HandlerKind::Stream.default_name()),
    (HandlerKind::File, HandlerKind::File.default_name()),
];

/// Trait implemented by all handler builders.
///
/// Builders return boxed [`LogHandler`] objects so the caller can register
/// them without knowing the concrete handler type.
pub trait HandlerBuilderTrait: Send + Sync {
    type Handler: LogHandler + 'static;

    /// Kind of handler produced by this builder.
    fn kind(&self) -> HandlerKind;

    /// Build the concrete handler.
    fn build_inner(&self) -> Result<Self::Handler, HandlerBuildError>;

    /// Build the handler instance behind a trait object.
    fn build(&self) -> Result<Box<dyn LogHandler>, HandlerBuildError> {
        Ok(Box::new(self.build_inner()?))
    }
}
