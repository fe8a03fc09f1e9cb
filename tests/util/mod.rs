//! Shared helpers for integration tests.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use tenancy::server::{model::app::AppState, reporter::ErrorReporter};
use tenancy_test_utils::{constant::TEST_SERVICE_NAME, TestContext};

/// Extension trait for TestContext to build the application state
pub trait TestContextExt {
    /// Application state sharing the test database, reporting errors to the mock sink
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let error_reporter = ErrorReporter::new(TEST_SERVICE_NAME, Some(self.error_sink_url()))
            .expect("Failed to build error reporter");

        AppState::from((self.db.clone(), error_reporter))
    }
}

/// Reads and deserializes a JSON response body
pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
