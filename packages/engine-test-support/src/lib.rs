//! Shared helpers for the engine's integration tests.

pub mod recorder;
pub mod test_logging;
