//! Contract lifecycle service.
//!
//! Contracts are written together with their tenant roster. Every multi-statement
//! operation runs inside a single transaction so a contract is never visible without its
//! roster, and a deleted contract never leaves roster rows behind.

#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashSet};

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::contract::{
        ContractFilterDto, ContractWithTenantsDto, CreateContractDto, UpdateContractDto,
    },
    server::{
        data::{
            contract::ContractRepository, contract_tenant::ContractTenantRepository,
            tenant::TenantRepository, tenant_property_part::TenantPropertyPartRepository,
        },
        error::{contract::ContractError, validation::ValidationError, Error},
        query::{
            contract::contract_condition,
            projection::{contract_with_tenants, contracts_with_tenants},
        },
        util::validate,
    },
};

/// Service for managing contracts and their tenant rosters.
pub struct ContractService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContractService<'a> {
    /// Creates a new instance of [`ContractService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists contracts matching the filter, ordered by ID, each with its complete roster.
    ///
    /// The default upper bound of the date window is evaluated against the current UTC date.
    ///
    /// # Returns
    /// - `Ok(Vec<ContractWithTenantsDto>)` - Matching contracts, possibly empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_contracts(
        &self,
        filter: ContractFilterDto,
    ) -> Result<Vec<ContractWithTenantsDto>, Error> {
        let condition = contract_condition(&filter, Utc::now().date_naive())?;

        let contracts = ContractRepository::new(self.db).find(condition).await?;
        let contract_ids: Vec<i32> = contracts.iter().map(|c| c.id).collect();
        let pairs = ContractTenantRepository::new(self.db)
            .get_pairs_by_contract_ids(&contract_ids)
            .await?;

        Ok(contracts_with_tenants(contracts, pairs))
    }

    /// Gets a single contract with its roster.
    ///
    /// # Returns
    /// - `Ok(ContractWithTenantsDto)` - Contract found
    /// - `Err(Error::ContractError(ContractError::NotFound))` - No contract with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_contract(&self, contract_id: i32) -> Result<ContractWithTenantsDto, Error> {
        let contract = ContractRepository::new(self.db)
            .get_by_id(contract_id)
            .await?
            .ok_or(ContractError::NotFound(contract_id))?;
        let tenant_ids = ContractTenantRepository::new(self.db)
            .get_tenant_ids(contract_id)
            .await?;

        Ok(contract_with_tenants(contract, tenant_ids))
    }

    /// Creates an active contract and its roster in one transaction.
    ///
    /// When `tenant_ids` is omitted every tenant actively mapped to the contract's property
    /// part is attached. An explicit list, even an empty one, is used as given after
    /// removing duplicates.
    ///
    /// # Returns
    /// - `Ok(ContractWithTenantsDto)` - Created contract with its roster
    /// - `Err(Error::ValidationError)` - Invalid terms or unknown tenant IDs, nothing persisted
    /// - `Err(Error::DbErr)` - Database operation failed, nothing persisted
    pub async fn create_contract(
        &self,
        contract: CreateContractDto,
    ) -> Result<ContractWithTenantsDto, Error> {
        validate::contract_terms(contract.start_date, contract.end_date, contract.rent_amount)?;

        let txn = self.db.begin().await?;

        let tenant_ids = resolve_roster(
            &txn,
            contract.property_part_id,
            contract.tenant_ids.as_deref(),
        )
        .await?;

        let created = ContractRepository::new(&txn).create(&contract).await?;
        ContractTenantRepository::new(&txn)
            .create_many(created.id, &tenant_ids)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            contract_id = %created.id,
            tenants = tenant_ids.len(),
            "Created contract"
        );

        Ok(contract_with_tenants(created, tenant_ids))
    }

    /// Updates the present contract fields and, when `tenant_ids` is given, replaces the
    /// roster entirely. Both happen in one transaction.
    ///
    /// The resulting date range and rent are validated against the merged values.
    ///
    /// # Returns
    /// - `Ok(ContractWithTenantsDto)` - Updated contract with its roster
    /// - `Err(Error::ContractError(ContractError::NotFound))` - No contract with this ID
    /// - `Err(Error::ValidationError)` - Invalid terms or unknown tenant IDs, nothing persisted
    /// - `Err(Error::DbErr)` - Database operation failed, nothing persisted
    pub async fn update_contract(
        &self,
        contract_id: i32,
        changes: UpdateContractDto,
    ) -> Result<ContractWithTenantsDto, Error> {
        let txn = self.db.begin().await?;

        let contract_repo = ContractRepository::new(&txn);
        let roster_repo = ContractTenantRepository::new(&txn);

        let contract = contract_repo
            .get_by_id(contract_id)
            .await?
            .ok_or(ContractError::NotFound(contract_id))?;

        validate::contract_terms(
            changes.start_date.unwrap_or(contract.start_date),
            changes.end_date.unwrap_or(contract.end_date),
            changes.rent_amount.unwrap_or(contract.rent_amount),
        )?;

        let contract = contract_repo.update(contract, &changes).await?;

        let tenant_ids = match changes.tenant_ids.as_deref() {
            Some(requested) => {
                let tenant_ids =
                    resolve_roster(&txn, contract.property_part_id, Some(requested)).await?;

                roster_repo.delete_by_contract_id(contract_id).await?;
                roster_repo.create_many(contract_id, &tenant_ids).await?;

                tenant_ids
            }
            None => roster_repo.get_tenant_ids(contract_id).await?,
        };

        txn.commit().await?;

        Ok(contract_with_tenants(contract, tenant_ids))
    }

    /// Sets the contract's activity flag, leaving its roster untouched.
    ///
    /// # Returns
    /// - `Ok(ContractWithTenantsDto)` - Updated contract with its roster
    /// - `Err(Error::ContractError(ContractError::NotFound))` - No contract with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn change_contract_status(
        &self,
        contract_id: i32,
        is_active: bool,
    ) -> Result<ContractWithTenantsDto, Error> {
        let contract = ContractRepository::new(self.db)
            .set_active(contract_id, is_active)
            .await?
            .ok_or(ContractError::NotFound(contract_id))?;
        let tenant_ids = ContractTenantRepository::new(self.db)
            .get_tenant_ids(contract_id)
            .await?;

        Ok(contract_with_tenants(contract, tenant_ids))
    }

    /// Deletes a contract, removing its roster rows first within the same transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Contract and roster deleted
    /// - `Err(Error::ContractError(ContractError::NotFound))` - No contract with this ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing deleted
    pub async fn delete_contract(&self, contract_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        ContractTenantRepository::new(&txn)
            .delete_by_contract_id(contract_id)
            .await?;
        let result = ContractRepository::new(&txn).delete(contract_id).await?;

        if result.rows_affected == 0 {
            return Err(ContractError::NotFound(contract_id).into());
        }

        txn.commit().await?;

        tracing::debug!(contract_id = %contract_id, "Deleted contract");

        Ok(())
    }
}

/// Determines the roster of a contract being written
///
/// Without an explicit list the tenants actively mapped to the property part are used.
/// An explicit list is deduplicated and every ID must belong to an existing tenant.
async fn resolve_roster<C: ConnectionTrait>(
    db: &C,
    property_part_id: i32,
    requested: Option<&[i32]>,
) -> Result<Vec<i32>, Error> {
    let requested = match requested {
        Some(requested) => requested,
        None => {
            return Ok(TenantPropertyPartRepository::new(db)
                .get_active_tenant_ids_by_property_part(property_part_id)
                .await?)
        }
    };

    let tenant_ids: Vec<i32> = requested
        .iter()
        .copied()
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect();

    let existing: HashSet<i32> = TenantRepository::new(db)
        .get_existing_ids(&tenant_ids)
        .await?
        .into_iter()
        .collect();
    let unknown: Vec<i32> = tenant_ids
        .iter()
        .copied()
        .filter(|tenant_id| !existing.contains(tenant_id))
        .collect();

    if !unknown.is_empty() {
        return Err(ValidationError::UnknownTenants(unknown).into());
    }

    Ok(tenant_ids)
}
