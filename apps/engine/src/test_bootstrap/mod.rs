//! Test-only helpers wired into unit tests.

pub mod logging;
