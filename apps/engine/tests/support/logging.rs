//! Logging for integration test binaries.
//!
//! Integration tests cannot see the crate's test-only bootstrap, so they go
//! through `engine-test-support`. Level precedence: `TEST_LOG`, `RUST_LOG`,
//! then `"warn"`.

/// Runs once per integration test binary, before any test.
#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    engine_test_support::test_logging::init();
}
