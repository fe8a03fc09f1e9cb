//! Database fixture insertion.

use chrono::{Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::tenancy::{PartRef, TenancyFixtures},
    model::{ContractModel, ContractTenantModel, PropertyPartMappingModel, TenantModel},
};

impl<'a> TenancyFixtures<'a> {
    /// Insert a tenant named `name` with a contact and email derived from the name.
    pub async fn insert_tenant(
        &self,
        name: &str,
        is_active: bool,
    ) -> Result<TenantModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Tenant::insert(entity::tenant::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                contact: ActiveValue::Set("555-0100".to_string()),
                email: ActiveValue::Set(format!("{}@example.com", name.to_lowercase())),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mapping of `tenant_id` onto the property part identified by `part`.
    pub async fn insert_mapping(
        &self,
        tenant_id: i32,
        part: PartRef,
        is_active: bool,
    ) -> Result<PropertyPartMappingModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::TenantPropertyPart::insert(
            entity::tenant_property_part::ActiveModel {
                tenant_id: ActiveValue::Set(tenant_id),
                organization_id: ActiveValue::Set(part.organization_id),
                organization_name: ActiveValue::Set(part.organization_name()),
                property_id: ActiveValue::Set(part.property_id),
                property_name: ActiveValue::Set(part.property_name()),
                property_part_id: ActiveValue::Set(part.property_part_id),
                property_part_name: ActiveValue::Set(part.property_part_name()),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a contract on `part` starting at `start_date` and running for one year.
    ///
    /// Rent is fixed at 1000 and TDS is not applicable.
    pub async fn insert_contract(
        &self,
        part: PartRef,
        start_date: NaiveDate,
        is_active: bool,
    ) -> Result<ContractModel, TestError> {
        let now = Utc::now().naive_utc();
        let end_date = start_date
            .checked_add_months(Months::new(12))
            .ok_or_else(|| TestError::InvalidFixture(format!("start date {}", start_date)))?;

        Ok(
            entity::prelude::Contract::insert(entity::contract::ActiveModel {
                property_id: ActiveValue::Set(part.property_id),
                property_name: ActiveValue::Set(part.property_name()),
                property_part_id: ActiveValue::Set(part.property_part_id),
                property_part_name: ActiveValue::Set(part.property_part_name()),
                organization_id: ActiveValue::Set(part.organization_id),
                organization_name: ActiveValue::Set(part.organization_name()),
                rent_amount: ActiveValue::Set(Decimal::new(1000, 0)),
                start_date: ActiveValue::Set(start_date),
                end_date: ActiveValue::Set(end_date),
                tds_applicable: ActiveValue::Set(false),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Attach `tenant_id` to the roster of `contract_id`.
    pub async fn insert_contract_tenant(
        &self,
        contract_id: i32,
        tenant_id: i32,
    ) -> Result<ContractTenantModel, TestError> {
        Ok(
            entity::prelude::ContractTenant::insert(entity::contract_tenant::ActiveModel {
                contract_id: ActiveValue::Set(contract_id),
                tenant_id: ActiveValue::Set(tenant_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a contract on `part` and attach every tenant in `tenant_ids` to its roster.
    pub async fn insert_contract_with_tenants(
        &self,
        part: PartRef,
        start_date: NaiveDate,
        tenant_ids: &[i32],
    ) -> Result<ContractModel, TestError> {
        let contract = self.insert_contract(part, start_date, true).await?;

        for tenant_id in tenant_ids {
            self.insert_contract_tenant(contract.id, *tenant_id).await?;
        }

        Ok(contract)
    }
}
