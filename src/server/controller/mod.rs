//! HTTP controller endpoints for the tenancy web API.
//!
//! Axum handlers parse path parameters, query-string filters and JSON bodies into DTOs,
//! delegate to the services and return JSON responses. Every handler is annotated with
//! utoipa for the OpenAPI document served at `/api/docs`.

pub mod contract;
pub mod property_part;
pub mod tenant;
pub mod util;
