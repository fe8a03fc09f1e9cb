use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::contract::{CreateContractDto, UpdateContractDto};

pub struct ContractRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContractRepository<'a, C> {
    /// Creates a new instance of [`ContractRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active contract
    ///
    /// The roster in [`CreateContractDto::tenant_ids`] is not written here, see
    /// [`ContractTenantRepository`](crate::server::data::contract_tenant::ContractTenantRepository).
    pub async fn create(
        &self,
        contract: &CreateContractDto,
    ) -> Result<entity::contract::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let contract = entity::contract::ActiveModel {
            property_id: ActiveValue::Set(contract.property_id),
            property_name: ActiveValue::Set(contract.property_name.clone()),
            property_part_id: ActiveValue::Set(contract.property_part_id),
            property_part_name: ActiveValue::Set(contract.property_part_name.clone()),
            organization_id: ActiveValue::Set(contract.organization_id),
            organization_name: ActiveValue::Set(contract.organization_name.clone()),
            rent_amount: ActiveValue::Set(contract.rent_amount),
            start_date: ActiveValue::Set(contract.start_date),
            end_date: ActiveValue::Set(contract.end_date),
            tds_applicable: ActiveValue::Set(contract.tds_applicable),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        contract.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        contract_id: i32,
    ) -> Result<Option<entity::contract::Model>, DbErr> {
        entity::prelude::Contract::find_by_id(contract_id)
            .one(self.db)
            .await
    }

    /// Gets all contracts matching the condition, ordered by ID
    pub async fn find(&self, condition: Condition) -> Result<Vec<entity::contract::Model>, DbErr> {
        entity::prelude::Contract::find()
            .filter(condition)
            .order_by_asc(entity::contract::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets contracts on any of the provided property parts
    ///
    /// # Arguments
    /// - `property_part_ids` - Property parts to match, returns nothing when empty
    /// - `is_active` - Optional activity filter
    pub async fn find_by_property_part_ids(
        &self,
        property_part_ids: &[i32],
        is_active: Option<bool>,
    ) -> Result<Vec<entity::contract::Model>, DbErr> {
        if property_part_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.find(
            Condition::all()
                .add(
                    entity::contract::Column::PropertyPartId
                        .is_in(property_part_ids.iter().copied()),
                )
                .add_option(is_active.map(|is_active| entity::contract::Column::IsActive.eq(is_active))),
        )
        .await
    }

    /// Applies the present fields of `changes` to an already loaded contract
    ///
    /// [`UpdateContractDto::tenant_ids`] is ignored, roster replacement is handled separately.
    pub async fn update(
        &self,
        contract: entity::contract::Model,
        changes: &UpdateContractDto,
    ) -> Result<entity::contract::Model, DbErr> {
        let mut contract_am = contract.into_active_model();
        if let Some(organization_id) = changes.organization_id {
            contract_am.organization_id = ActiveValue::Set(organization_id);
        }
        if let Some(organization_name) = &changes.organization_name {
            contract_am.organization_name = ActiveValue::Set(organization_name.clone());
        }
        if let Some(property_id) = changes.property_id {
            contract_am.property_id = ActiveValue::Set(property_id);
        }
        if let Some(property_name) = &changes.property_name {
            contract_am.property_name = ActiveValue::Set(property_name.clone());
        }
        if let Some(property_part_id) = changes.property_part_id {
            contract_am.property_part_id = ActiveValue::Set(property_part_id);
        }
        if let Some(property_part_name) = &changes.property_part_name {
            contract_am.property_part_name = ActiveValue::Set(property_part_name.clone());
        }
        if let Some(rent_amount) = changes.rent_amount {
            contract_am.rent_amount = ActiveValue::Set(rent_amount);
        }
        if let Some(start_date) = changes.start_date {
            contract_am.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = changes.end_date {
            contract_am.end_date = ActiveValue::Set(end_date);
        }
        if let Some(tds_applicable) = changes.tds_applicable {
            contract_am.tds_applicable = ActiveValue::Set(tds_applicable);
        }
        contract_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        contract_am.update(self.db).await
    }

    /// Sets the contract's activity flag
    ///
    /// Returns `Ok(None)` if the contract does not exist.
    pub async fn set_active(
        &self,
        contract_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::contract::Model>, DbErr> {
        let contract = match self.get_by_id(contract_id).await? {
            Some(contract) => contract,
            None => return Ok(None),
        };

        let mut contract_am = contract.into_active_model();
        contract_am.is_active = ActiveValue::Set(is_active);
        contract_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let contract = contract_am.update(self.db).await?;

        Ok(Some(contract))
    }

    /// Deletes a contract row
    ///
    /// Roster rows must be removed beforehand. Returns OK regardless of the contract
    /// existing, check [`DeleteResult::rows_affected`] to confirm.
    pub async fn delete(&self, contract_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Contract::delete_by_id(contract_id)
            .exec(self.db)
            .await
    }
}
