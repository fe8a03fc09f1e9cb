use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::server::error::error_response;

/// Request payload rejected before anything was persisted.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid request payload: {0}")]
    InvalidFields(#[from] validator::ValidationErrors),
    /// Body could not be parsed into the expected JSON shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Contract start date {start_date} is after end date {end_date}")]
    InvalidDateRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    #[error("Rent amount must not be negative, got {0}")]
    NegativeRent(Decimal),
    #[error("Unknown tenant ID(s) in contract roster: {0:?}")]
    UnknownTenants(Vec<i32>),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
