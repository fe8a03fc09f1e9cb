//! Server application models and type definitions.
//!
//! Application state shared by the HTTP handlers and database model type aliases.

pub mod app;
pub mod db;
