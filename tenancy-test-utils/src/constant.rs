//! Test configuration constants.
//!
//! Placeholder values shared by tests that build an application state or talk to the
//! mock error-logging sink.

/// Path of the mock error-logging sink endpoint on the mockito server.
pub static TEST_ERROR_SINK_PATH: &str = "/api/error-logs";

/// Origin reported by the error reporter during tests.
pub static TEST_SERVICE_NAME: &str = "tenant-and-contract-test";
