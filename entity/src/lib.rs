//! SeaORM entities for the tenancy schema.

pub mod prelude;

pub mod contract;
pub mod contract_tenant;
pub mod tenant;
pub mod tenant_property_part;
