//! Utility functions and helpers for server operations.
//!
//! This module provides the contract date-range defaults used by the query engine and the
//! input validation shared by the tenant and contract services.

pub mod time;
pub mod validate;
