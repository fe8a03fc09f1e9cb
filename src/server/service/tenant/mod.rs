//! Tenant lifecycle service.
//!
//! This module covers tenant records and their property part mappings. Tenants are created
//! inactive and can only be deleted once no mapping or contract roster references them.

pub mod property_part;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use sea_orm::{ColumnTrait, Condition, DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::{
    model::tenant::{
        CreateTenantDto, TenantDto, TenantFilterDto, TenantQueryDto, TenantWithMappingsDto,
        UpdateTenantDto,
    },
    server::{
        data::{
            contract::ContractRepository, contract_tenant::ContractTenantRepository,
            tenant::TenantRepository, tenant_property_part::TenantPropertyPartRepository,
        },
        error::{tenant::TenantError, validation::ValidationError, Error},
        query::{projection::tenants_with_mappings, tenant::TenantQuery},
    },
};

/// Service for managing tenants and their property part mappings.
pub struct TenantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TenantService<'a> {
    /// Creates a new instance of [`TenantService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tenant, always inactive.
    ///
    /// # Returns
    /// - `Ok(TenantDto)` - Created tenant
    /// - `Err(Error::ValidationError)` - Blank field or malformed email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_tenant(&self, tenant: CreateTenantDto) -> Result<TenantDto, Error> {
        tenant.validate().map_err(ValidationError::from)?;

        let tenant = TenantRepository::new(self.db)
            .create(tenant.name, tenant.contact, tenant.email)
            .await?;

        tracing::debug!(tenant_id = %tenant.id, "Created tenant");

        Ok(tenant.into())
    }

    /// Updates the present tenant fields, validating them as on creation.
    ///
    /// Mappings and contract rosters are never touched.
    ///
    /// # Returns
    /// - `Ok(TenantDto)` - Updated tenant
    /// - `Err(Error::TenantError(TenantError::NotFound))` - No tenant with this ID
    /// - `Err(Error::ValidationError)` - Blank field or malformed email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_tenant(
        &self,
        tenant_id: i32,
        changes: UpdateTenantDto,
    ) -> Result<TenantDto, Error> {
        changes.validate().map_err(ValidationError::from)?;

        let tenant = TenantRepository::new(self.db)
            .update(tenant_id, changes.name, changes.contact, changes.email)
            .await?
            .ok_or(TenantError::NotFound(tenant_id))?;

        Ok(tenant.into())
    }

    /// Sets the tenant's activity flag.
    ///
    /// # Returns
    /// - `Ok(TenantDto)` - Updated tenant
    /// - `Err(Error::TenantError(TenantError::NotFound))` - No tenant with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn change_tenant_status(
        &self,
        tenant_id: i32,
        is_active: bool,
    ) -> Result<TenantDto, Error> {
        let tenant = TenantRepository::new(self.db)
            .set_active(tenant_id, is_active)
            .await?
            .ok_or(TenantError::NotFound(tenant_id))?;

        Ok(tenant.into())
    }

    /// Deletes a tenant that no mapping or contract roster references.
    ///
    /// The tenant row is locked for the duration of the transaction so no reference can be
    /// added between counting and deleting.
    ///
    /// # Returns
    /// - `Ok(())` - Tenant deleted
    /// - `Err(Error::TenantError(TenantError::NotFound))` - No tenant with this ID
    /// - `Err(Error::TenantError(TenantError::HasDependents))` - Mappings or roster rows
    ///   still reference the tenant, nothing deleted
    /// - `Err(Error::DbErr)` - Database operation failed, nothing deleted
    pub async fn delete_tenant(&self, tenant_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let tenant_repo = TenantRepository::new(&txn);

        tenant_repo
            .get_by_id_for_update(tenant_id)
            .await?
            .ok_or(TenantError::NotFound(tenant_id))?;

        let mappings = TenantPropertyPartRepository::new(&txn)
            .count_by_tenant(tenant_id)
            .await?;
        let contracts = ContractTenantRepository::new(&txn)
            .count_by_tenant(tenant_id)
            .await?;

        if mappings > 0 || contracts > 0 {
            return Err(TenantError::HasDependents {
                tenant_id,
                mappings,
                contracts,
            }
            .into());
        }

        tenant_repo.delete(tenant_id).await?;

        txn.commit().await?;

        tracing::debug!(tenant_id = %tenant_id, "Deleted tenant");

        Ok(())
    }

    /// Gets a single tenant with its active mappings and, when requested, the contracts on
    /// those mappings' property parts.
    ///
    /// # Returns
    /// - `Ok(TenantWithMappingsDto)` - Tenant found
    /// - `Err(Error::TenantError(TenantError::NotFound))` - No tenant with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_tenant(
        &self,
        tenant_id: i32,
        options: TenantQueryDto,
    ) -> Result<TenantWithMappingsDto, Error> {
        self.query_tenants(
            TenantQuery::for_tenant(tenant_id),
            options.include_contracts.unwrap_or(false),
            options.contract_is_active,
        )
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| TenantError::NotFound(tenant_id).into())
    }

    /// Lists tenants matching the filter, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<TenantWithMappingsDto>)` - Matching tenants, possibly empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_tenants(
        &self,
        filter: TenantFilterDto,
    ) -> Result<Vec<TenantWithMappingsDto>, Error> {
        self.query_tenants(
            TenantQuery::from_filter(&filter),
            filter.include_contracts.unwrap_or(false),
            filter.contract_is_active,
        )
        .await
    }

    /// Runs a tenant query and attaches mappings and optional contracts
    ///
    /// Three batched queries at most: tenants, their attached mappings, then contracts on
    /// the mapped property parts.
    async fn query_tenants(
        &self,
        query: TenantQuery,
        include_contracts: bool,
        contract_is_active: Option<bool>,
    ) -> Result<Vec<TenantWithMappingsDto>, Error> {
        let tenants = TenantRepository::new(self.db)
            .find(query.tenant_condition())
            .await?;
        if tenants.is_empty() {
            return Ok(Vec::new());
        }

        let tenant_ids: Vec<i32> = tenants.iter().map(|t| t.id).collect();
        let mappings = TenantPropertyPartRepository::new(self.db)
            .find(
                Condition::all()
                    .add(query.mapping_condition())
                    .add(entity::tenant_property_part::Column::TenantId.is_in(tenant_ids)),
            )
            .await?;

        let contracts = if include_contracts {
            let property_part_ids: Vec<i32> = mappings
                .iter()
                .map(|m| m.property_part_id)
                .collect::<BTreeSet<i32>>()
                .into_iter()
                .collect();

            Some(
                ContractRepository::new(self.db)
                    .find_by_property_part_ids(&property_part_ids, contract_is_active)
                    .await?,
            )
        } else {
            None
        };

        Ok(tenants_with_mappings(tenants, mappings, contracts))
    }
}
