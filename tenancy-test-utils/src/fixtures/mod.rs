//! Test fixture modules for database rows and HTTP mocks.
//!
//! - `tenancy` - tenants, property part mappings, contracts and roster rows
//! - `error_sink` - mock error-logging sink endpoint

pub mod error_sink;
pub mod tenancy;
