//! Service layer for business logic.
//!
//! Services validate requests, open transactions for multi-statement operations,
//! coordinate the repositories and project rows into the API's read DTOs.

pub mod contract;
pub mod tenant;
