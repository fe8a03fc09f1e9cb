//! Server application core modules.
//!
//! This module contains all server-side functionality of the tenancy service: HTTP routing,
//! request handlers, the tenant and contract services, the query engine, database
//! repositories and the error-logging sink client.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod query;
pub mod reporter;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
