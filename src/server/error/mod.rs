//! Error types for the tenancy server.
//!
//! Domain errors are grouped per concern (validation, tenants, contracts) and aggregated into
//! [`Error`], which every service and controller returns. All of them implement
//! `IntoResponse`; the rendered response carries an [`ErrorContext`] extension that the
//! reporting middleware forwards to the error-logging sink. [`config::ConfigError`] stays out
//! of the tree since it only occurs before the server starts.

pub mod config;
pub mod contract;
pub mod tenant;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{contract::ContractError, tenant::TenantError, validation::ValidationError},
        reporter::ErrorContext,
    },
};

/// Main error type for the tenancy server.
///
/// Uses `thiserror`'s `#[from]` so domain errors and store errors convert via `?`.
///
/// # Error Categories
/// - Validation errors (malformed request payloads, nothing persisted)
/// - Tenant errors (not found, conditional delete blocked, duplicate mapping)
/// - Contract errors (not found)
/// - Database errors (unavailable store or unexpected query failure)
#[derive(Error, Debug)]
pub enum Error {
    /// Request payload failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Tenant or tenant mapping error.
    #[error(transparent)]
    TenantError(#[from] TenantError),
    /// Contract error.
    #[error(transparent)]
    ContractError(#[from] ContractError),
    /// Internal error indicating a bug in the service.
    #[error("Internal error, this indicates a bug in the tenancy service: {0:?}")]
    InternalError(String),
    /// Database error (connection failure, query failure, constraint violation).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// HTTP client error while building the error reporter.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
}

impl Error {
    /// Whether the error means the store could not be reached rather than a failed query.
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(
            self,
            Self::DbErr(sea_orm::DbErr::Conn(_)) | Self::DbErr(sea_orm::DbErr::ConnectionAcquire(_))
        )
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(ValidationError::MalformedBody(rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and malformed JSON bodies
/// - 404 Not Found - Missing tenants, mappings or contracts
/// - 409 Conflict - Tenant deletion blocked or duplicate active mapping
/// - 503 Service Unavailable - Database unreachable
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let context = ErrorContext::from_error(&self);

        let mut response = if self.is_upstream_unavailable() {
            UpstreamUnavailable(self).into_response()
        } else {
            match self {
                Self::ValidationError(err) => err.into_response(),
                Self::TenantError(err) => err.into_response(),
                Self::ContractError(err) => err.into_response(),
                err => InternalServerError(err).into_response(),
            }
        };

        response.extensions_mut().insert(context);
        response
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Wrapper type for errors caused by the database being unreachable.
///
/// Callers may retry these; the service itself never does.
pub struct UpstreamUnavailable<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for UpstreamUnavailable<E> {
    fn into_response(self) -> Response {
        tracing::error!("Database unavailable: {}", self.0);

        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Service temporarily unavailable, please retry",
        )
    }
}
