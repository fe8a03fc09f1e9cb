//! Error-logging sink client.
//!
//! Error responses carry an [`ErrorContext`] extension. The [`report_errors`] middleware turns
//! it into an [`ErrorReport`] and hands it to the [`ErrorReporter`], which POSTs the report to
//! the configured sink on a spawned task. Delivery failures are logged and swallowed so that
//! reporting never affects the response returned to the caller.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use serde_json::json;

use crate::server::model::app::AppState;

/// Error details captured while rendering an error response.
#[derive(Clone, Debug)]
pub struct ErrorContext {
    /// Display message of the error
    pub message: String,
    /// Debug rendering of the error followed by its source chain
    pub stack: String,
}

impl ErrorContext {
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        let mut stack = format!("{:?}", error);
        let mut source = error.source();
        while let Some(cause) = source {
            stack.push_str(&format!("\ncaused by: {}", cause));
            source = cause.source();
        }

        Self {
            message: error.to_string(),
            stack,
        }
    }
}

/// Payload accepted by the error-logging sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub origin: String,
    pub message: String,
    pub stack: Option<String>,
    pub status_code: u16,
    pub metadata: serde_json::Value,
}

/// Client for the error-logging sink.
///
/// Reporting is disabled when no sink URL is configured.
#[derive(Clone)]
pub struct ErrorReporter {
    client: reqwest::Client,
    origin: String,
    url: Option<String>,
}

impl ErrorReporter {
    const REQUEST_TIMEOUT_SECS: u64 = 5;

    /// Creates a reporter sending reports tagged with `origin` to `url`.
    pub fn new(origin: &str, url: Option<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            origin: origin.to_string(),
            url,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    /// Sends the report in the background; failures are logged at debug level and dropped.
    pub fn report(&self, report: ErrorReport) {
        if !self.is_enabled() {
            return;
        }

        let reporter = self.clone();
        tokio::spawn(async move {
            if let Err(err) = reporter.send(&report).await {
                tracing::debug!("Failed to deliver error report to sink: {}", err);
            }
        });
    }

    /// Sends the report and waits for the sink to acknowledge it.
    pub async fn send(&self, report: &ErrorReport) -> Result<(), reqwest::Error> {
        let Some(url) = &self.url else {
            return Ok(());
        };

        self.client
            .post(url)
            .json(report)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Middleware forwarding error responses to the error-logging sink.
pub async fn report_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    if let Some(context) = response.extensions().get::<ErrorContext>() {
        state.error_reporter.report(ErrorReport {
            origin: state.error_reporter.origin().to_string(),
            message: context.message.clone(),
            stack: Some(context.stack.clone()),
            status_code: response.status().as_u16(),
            metadata: json!({ "method": method, "path": path }),
        });
    }

    response
}
