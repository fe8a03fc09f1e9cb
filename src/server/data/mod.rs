//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the services can run them
//! against the shared connection or inside an open transaction.

pub mod contract;
pub mod contract_tenant;
pub mod tenant;
pub mod tenant_property_part;
