pub use super::contract::Entity as Contract;
pub use super::contract_tenant::Entity as ContractTenant;
pub use super::tenant::Entity as Tenant;
pub use super::tenant_property_part::Entity as TenantPropertyPart;
