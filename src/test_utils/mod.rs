//! Test helpers shared between unit and integration tests.
//!
//! Compiled for unit tests and for consumers enabling the `test-util`
//! feature.

pub mod collecting_sink;

pub use collecting_sink::CollectingSink;
