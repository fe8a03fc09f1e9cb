//! Request and response DTOs exchanged over the REST API.

pub mod api;
pub mod contract;
pub mod lenient;
pub mod tenant;
pub mod validate;
