//! Factory functions for in-memory tenancy models.
//!
//! These do not touch the database and suit unit tests of projection code.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    fixtures::tenancy::PartRef,
    model::{ContractModel, ContractTenantModel, PropertyPartMappingModel, TenantModel},
};

/// Create a mock tenant model with the provided id.
pub fn mock_tenant_model(id: i32) -> TenantModel {
    let now = Utc::now().naive_utc();
    TenantModel {
        id,
        name: format!("Tenant {}", id),
        contact: "555-0100".to_string(),
        email: format!("tenant{}@example.com", id),
        is_active: false,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock active mapping model of `tenant_id` onto `part`.
pub fn mock_mapping_model(id: i32, tenant_id: i32, part: PartRef) -> PropertyPartMappingModel {
    let now = Utc::now().naive_utc();
    PropertyPartMappingModel {
        id,
        tenant_id,
        organization_id: part.organization_id,
        organization_name: part.organization_name(),
        property_id: part.property_id,
        property_name: part.property_name(),
        property_part_id: part.property_part_id,
        property_part_name: part.property_part_name(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock active contract model on `part` for calendar year 2025.
pub fn mock_contract_model(id: i32, part: PartRef) -> ContractModel {
    let now = Utc::now().naive_utc();
    ContractModel {
        id,
        property_id: part.property_id,
        property_name: part.property_name(),
        property_part_id: part.property_part_id,
        property_part_name: part.property_part_name(),
        organization_id: part.organization_id,
        organization_name: part.organization_name(),
        rent_amount: Decimal::new(125050, 2),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        tds_applicable: true,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock roster row.
pub fn mock_contract_tenant_model(id: i32, contract_id: i32, tenant_id: i32) -> ContractTenantModel {
    ContractTenantModel {
        id,
        contract_id,
        tenant_id,
        created_at: Utc::now().naive_utc(),
    }
}
