//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main tenancy crate to keep fixture signatures short.

/// Type alias for tenant database model.
pub type TenantModel = entity::tenant::Model;

/// Type alias for tenant property part mapping database model.
pub type PropertyPartMappingModel = entity::tenant_property_part::Model;

/// Type alias for contract database model.
pub type ContractModel = entity::contract::Model;

/// Type alias for contract roster join row database model.
pub type ContractTenantModel = entity::contract_tenant::Model;
