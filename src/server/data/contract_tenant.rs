use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct ContractTenantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContractTenantRepository<'a, C> {
    /// Creates a new instance of [`ContractTenantRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Attaches tenants to a contract's roster
    ///
    /// Callers are expected to pass deduplicated IDs, a repeated pair violates the
    /// `(contract_id, tenant_id)` unique index.
    pub async fn create_many(&self, contract_id: i32, tenant_ids: &[i32]) -> Result<(), DbErr> {
        if tenant_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let rows = tenant_ids
            .iter()
            .map(|tenant_id| entity::contract_tenant::ActiveModel {
                contract_id: ActiveValue::Set(contract_id),
                tenant_id: ActiveValue::Set(*tenant_id),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::ContractTenant::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets `(contract_id, tenant_id)` pairs for the provided contracts
    ///
    /// Pairs are ordered by contract then tenant ID so grouped rosters come out sorted.
    pub async fn get_pairs_by_contract_ids(
        &self,
        contract_ids: &[i32],
    ) -> Result<Vec<(i32, i32)>, DbErr> {
        if contract_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ContractTenant::find()
            .select_only()
            .column(entity::contract_tenant::Column::ContractId)
            .column(entity::contract_tenant::Column::TenantId)
            .filter(entity::contract_tenant::Column::ContractId.is_in(contract_ids.iter().copied()))
            .order_by_asc(entity::contract_tenant::Column::ContractId)
            .order_by_asc(entity::contract_tenant::Column::TenantId)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }

    /// Gets the IDs of tenants on a contract's roster, ascending
    pub async fn get_tenant_ids(&self, contract_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ContractTenant::find()
            .select_only()
            .column(entity::contract_tenant::Column::TenantId)
            .filter(entity::contract_tenant::Column::ContractId.eq(contract_id))
            .order_by_asc(entity::contract_tenant::Column::TenantId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Counts roster rows referencing the tenant
    pub async fn count_by_tenant(&self, tenant_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ContractTenant::find()
            .filter(entity::contract_tenant::Column::TenantId.eq(tenant_id))
            .count(self.db)
            .await
    }

    /// Removes every roster row of a contract
    pub async fn delete_by_contract_id(&self, contract_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ContractTenant::delete_many()
            .filter(entity::contract_tenant::Column::ContractId.eq(contract_id))
            .exec(self.db)
            .await
    }
}
