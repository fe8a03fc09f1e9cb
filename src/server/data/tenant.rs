use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

pub struct TenantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TenantRepository<'a, C> {
    /// Creates a new instance of [`TenantRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new tenant
    ///
    /// Tenants are always provisioned inactive until explicitly activated.
    pub async fn create(
        &self,
        name: String,
        contact: String,
        email: String,
    ) -> Result<entity::tenant::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let tenant = entity::tenant::ActiveModel {
            name: ActiveValue::Set(name),
            contact: ActiveValue::Set(contact),
            email: ActiveValue::Set(email),
            is_active: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        tenant.insert(self.db).await
    }

    pub async fn get_by_id(&self, tenant_id: i32) -> Result<Option<entity::tenant::Model>, DbErr> {
        entity::prelude::Tenant::find_by_id(tenant_id)
            .one(self.db)
            .await
    }

    /// Gets a tenant while holding an exclusive row lock until the transaction ends
    ///
    /// Inserting rows that reference the tenant blocks on this lock, so counts taken
    /// afterwards in the same transaction stay valid. Backends without row locking
    /// (SQLite) serialize writers at the database level instead.
    pub async fn get_by_id_for_update(
        &self,
        tenant_id: i32,
    ) -> Result<Option<entity::tenant::Model>, DbErr> {
        entity::prelude::Tenant::find_by_id(tenant_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Returns which of the provided tenant IDs exist
    pub async fn get_existing_ids(&self, tenant_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if tenant_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tenant::find()
            .select_only()
            .column(entity::tenant::Column::Id)
            .filter(entity::tenant::Column::Id.is_in(tenant_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets all tenants matching the condition, ordered by ID
    pub async fn find(&self, condition: Condition) -> Result<Vec<entity::tenant::Model>, DbErr> {
        entity::prelude::Tenant::find()
            .filter(condition)
            .order_by_asc(entity::tenant::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the provided tenant fields, leaving absent fields untouched
    ///
    /// # Returns
    /// - `Ok(Some(_))` - Updated tenant
    /// - `Ok(None)` - Tenant not found
    pub async fn update(
        &self,
        tenant_id: i32,
        name: Option<String>,
        contact: Option<String>,
        email: Option<String>,
    ) -> Result<Option<entity::tenant::Model>, DbErr> {
        let tenant = match self.get_by_id(tenant_id).await? {
            Some(tenant) => tenant,
            None => return Ok(None),
        };

        let mut tenant_am = tenant.into_active_model();
        if let Some(name) = name {
            tenant_am.name = ActiveValue::Set(name);
        }
        if let Some(contact) = contact {
            tenant_am.contact = ActiveValue::Set(contact);
        }
        if let Some(email) = email {
            tenant_am.email = ActiveValue::Set(email);
        }
        tenant_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let tenant = tenant_am.update(self.db).await?;

        Ok(Some(tenant))
    }

    /// Sets the tenant's activity flag
    ///
    /// Returns `Ok(None)` if the tenant does not exist.
    pub async fn set_active(
        &self,
        tenant_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::tenant::Model>, DbErr> {
        let tenant = match self.get_by_id(tenant_id).await? {
            Some(tenant) => tenant,
            None => return Ok(None),
        };

        let mut tenant_am = tenant.into_active_model();
        tenant_am.is_active = ActiveValue::Set(is_active);
        tenant_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let tenant = tenant_am.update(self.db).await?;

        Ok(Some(tenant))
    }

    /// Deletes a tenant
    ///
    /// Returns OK regardless of the tenant existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, tenant_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Tenant::delete_by_id(tenant_id)
            .exec(self.db)
            .await
    }
}
