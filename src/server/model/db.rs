//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models of the `entity` crate.

/// Type alias for tenant database model.
///
/// # Fields (from `entity::tenant::Model`)
/// - `id` - Primary key
/// - `name`, `contact`, `email` - Tenant details
/// - `is_active` - Whether the tenant has been activated; tenants start inactive
/// - `created_at` / `updated_at` - Row timestamps
pub type TenantModel = entity::tenant::Model;

/// Type alias for tenant property part mapping database model.
///
/// Represents "this tenant occupies this property part". Organization, property and part
/// names are snapshots copied when the row was written and are never refreshed.
///
/// # Fields (from `entity::tenant_property_part::Model`)
/// - `id` - Primary key
/// - `tenant_id` - Foreign key to the tenant
/// - `organization_id` / `organization_name` - Organization snapshot
/// - `property_id` / `property_name` - Property snapshot
/// - `property_part_id` / `property_part_name` - Property part snapshot
/// - `is_active` - Whether the occupancy is current
/// - `created_at` / `updated_at` - Row timestamps
pub type PropertyPartMappingModel = entity::tenant_property_part::Model;

/// Type alias for contract database model.
pub type ContractModel = entity::contract::Model;
