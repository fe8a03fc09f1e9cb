//! Mock error-logging sink endpoint.

use mockito::Mock;

use crate::{constant::TEST_ERROR_SINK_PATH, TestContext};

impl TestContext {
    pub fn error_sink<'a>(&'a mut self) -> ErrorSinkFixtures<'a> {
        ErrorSinkFixtures { setup: self }
    }
}

pub struct ErrorSinkFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ErrorSinkFixtures<'a> {
    /// Create a mock POST endpoint accepting error reports.
    ///
    /// # Arguments
    /// - `status` - HTTP status returned to the reporter
    /// - `expected_requests` - Number of times this endpoint should be called
    pub async fn create_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_ERROR_SINK_PATH)
            .match_header("content-type", "application/json")
            .with_status(status)
            .expect(expected_requests)
            .create_async()
            .await
    }
}
