//! Projection of store rows into the read DTOs returned by the API.

use std::collections::{BTreeSet, HashMap};

use crate::{
    model::{
        contract::ContractWithTenantsDto,
        tenant::{ContractSummaryDto, PropertyPartMappingDto, TenantDto, TenantWithMappingsDto},
    },
    server::model::db::{ContractModel, PropertyPartMappingModel, TenantModel},
};

impl From<TenantModel> for TenantDto {
    fn from(tenant: TenantModel) -> Self {
        Self {
            id: tenant.id,
            name: tenant.name,
            contact: tenant.contact,
            email: tenant.email,
            is_active: tenant.is_active,
            created_at: tenant.created_at,
            updated_at: tenant.updated_at,
        }
    }
}

impl From<PropertyPartMappingModel> for PropertyPartMappingDto {
    fn from(mapping: PropertyPartMappingModel) -> Self {
        Self {
            id: mapping.id,
            tenant_id: mapping.tenant_id,
            organization_id: mapping.organization_id,
            organization_name: mapping.organization_name,
            property_id: mapping.property_id,
            property_name: mapping.property_name,
            property_part_id: mapping.property_part_id,
            property_part_name: mapping.property_part_name,
            is_active: mapping.is_active,
            created_at: mapping.created_at,
            updated_at: mapping.updated_at,
        }
    }
}

impl From<ContractModel> for ContractSummaryDto {
    fn from(contract: ContractModel) -> Self {
        Self {
            id: contract.id,
            property_id: contract.property_id,
            property_name: contract.property_name,
            property_part_id: contract.property_part_id,
            property_part_name: contract.property_part_name,
            rent_amount: contract.rent_amount,
            start_date: contract.start_date,
            end_date: contract.end_date,
            is_active: contract.is_active,
        }
    }
}

/// Combines a contract row with its roster
pub fn contract_with_tenants(
    contract: ContractModel,
    tenant_ids: Vec<i32>,
) -> ContractWithTenantsDto {
    ContractWithTenantsDto {
        id: contract.id,
        organization_id: contract.organization_id,
        organization_name: contract.organization_name,
        property_id: contract.property_id,
        property_name: contract.property_name,
        property_part_id: contract.property_part_id,
        property_part_name: contract.property_part_name,
        rent_amount: contract.rent_amount,
        start_date: contract.start_date,
        end_date: contract.end_date,
        tds_applicable: contract.tds_applicable,
        is_active: contract.is_active,
        tenant_ids,
        created_at: contract.created_at,
        updated_at: contract.updated_at,
    }
}

/// Groups `(contract_id, tenant_id)` pairs into ascending, deduplicated rosters
pub fn group_rosters(pairs: Vec<(i32, i32)>) -> HashMap<i32, Vec<i32>> {
    let mut rosters: HashMap<i32, BTreeSet<i32>> = HashMap::new();
    for (contract_id, tenant_id) in pairs {
        rosters.entry(contract_id).or_default().insert(tenant_id);
    }

    rosters
        .into_iter()
        .map(|(contract_id, tenant_ids)| (contract_id, tenant_ids.into_iter().collect()))
        .collect()
}

/// Attaches rosters to contracts, keeping the contract order
///
/// Contracts without roster rows get an empty `tenant_ids`.
pub fn contracts_with_tenants(
    contracts: Vec<ContractModel>,
    pairs: Vec<(i32, i32)>,
) -> Vec<ContractWithTenantsDto> {
    let mut rosters = group_rosters(pairs);

    contracts
        .into_iter()
        .map(|contract| {
            let tenant_ids = rosters.remove(&contract.id).unwrap_or_default();
            contract_with_tenants(contract, tenant_ids)
        })
        .collect()
}

/// Attaches mappings and, when requested, contracts to tenants, keeping the tenant order
///
/// Each tenant receives the contracts whose property part appears in its attached mappings.
///
/// # Arguments
/// - `tenants` - Tenants to project
/// - `mappings` - Attached mappings of those tenants
/// - `contracts` - `Some` when contracts were requested, holding every candidate contract
pub fn tenants_with_mappings(
    tenants: Vec<TenantModel>,
    mappings: Vec<PropertyPartMappingModel>,
    contracts: Option<Vec<ContractModel>>,
) -> Vec<TenantWithMappingsDto> {
    let mut mappings_by_tenant: HashMap<i32, Vec<PropertyPartMappingModel>> =
        HashMap::new();
    for mapping in mappings {
        mappings_by_tenant
            .entry(mapping.tenant_id)
            .or_default()
            .push(mapping);
    }

    tenants
        .into_iter()
        .map(|tenant| {
            let mappings = mappings_by_tenant.remove(&tenant.id).unwrap_or_default();

            let tenant_contracts = contracts.as_ref().map(|contracts| {
                let part_ids: BTreeSet<i32> =
                    mappings.iter().map(|m| m.property_part_id).collect();

                contracts
                    .iter()
                    .filter(|contract| part_ids.contains(&contract.property_part_id))
                    .cloned()
                    .map(ContractSummaryDto::from)
                    .collect()
            });

            TenantWithMappingsDto {
                id: tenant.id,
                name: tenant.name,
                contact: tenant.contact,
                email: tenant.email,
                is_active: tenant.is_active,
                created_at: tenant.created_at,
                updated_at: tenant.updated_at,
                property_parts: mappings.into_iter().map(PropertyPartMappingDto::from).collect(),
                contracts: tenant_contracts,
            }
        })
        .collect()
}
