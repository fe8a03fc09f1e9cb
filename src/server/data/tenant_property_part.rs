use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::tenant::{CreatePropertyPartMappingDto, UpdatePropertyPartMappingDto};

pub struct TenantPropertyPartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TenantPropertyPartRepository<'a, C> {
    /// Creates a new instance of [`TenantPropertyPartRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new tenant to property part mapping
    ///
    /// Mappings are active unless the request says otherwise.
    pub async fn create(
        &self,
        mapping: CreatePropertyPartMappingDto,
    ) -> Result<entity::tenant_property_part::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mapping = entity::tenant_property_part::ActiveModel {
            tenant_id: ActiveValue::Set(mapping.tenant_id),
            organization_id: ActiveValue::Set(mapping.organization_id),
            organization_name: ActiveValue::Set(mapping.organization_name),
            property_id: ActiveValue::Set(mapping.property_id),
            property_name: ActiveValue::Set(mapping.property_name),
            property_part_id: ActiveValue::Set(mapping.property_part_id),
            property_part_name: ActiveValue::Set(mapping.property_part_name),
            is_active: ActiveValue::Set(mapping.is_active.unwrap_or(true)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        mapping.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        mapping_id: i32,
    ) -> Result<Option<entity::tenant_property_part::Model>, DbErr> {
        entity::prelude::TenantPropertyPart::find_by_id(mapping_id)
            .one(self.db)
            .await
    }

    /// Gets all mappings matching the condition, ordered by ID
    pub async fn find(
        &self,
        condition: Condition,
    ) -> Result<Vec<entity::tenant_property_part::Model>, DbErr> {
        entity::prelude::TenantPropertyPart::find()
            .filter(condition)
            .order_by_asc(entity::tenant_property_part::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the IDs of tenants actively mapped onto a property part, ascending and deduplicated
    pub async fn get_active_tenant_ids_by_property_part(
        &self,
        property_part_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TenantPropertyPart::find()
            .select_only()
            .column(entity::tenant_property_part::Column::TenantId)
            .distinct()
            .filter(entity::tenant_property_part::Column::PropertyPartId.eq(property_part_id))
            .filter(entity::tenant_property_part::Column::IsActive.eq(true))
            .order_by_asc(entity::tenant_property_part::Column::TenantId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Counts mappings of any activity state referencing the tenant
    pub async fn count_by_tenant(&self, tenant_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TenantPropertyPart::find()
            .filter(entity::tenant_property_part::Column::TenantId.eq(tenant_id))
            .count(self.db)
            .await
    }

    /// Checks whether another active mapping pairs the tenant with the property part
    ///
    /// # Arguments
    /// - `exclude_id` - Mapping ID to ignore, used when re-activating an existing mapping
    pub async fn exists_active(
        &self,
        tenant_id: i32,
        property_part_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::TenantPropertyPart::find()
            .filter(
                Condition::all()
                    .add(entity::tenant_property_part::Column::TenantId.eq(tenant_id))
                    .add(entity::tenant_property_part::Column::PropertyPartId.eq(property_part_id))
                    .add(entity::tenant_property_part::Column::IsActive.eq(true))
                    .add_option(
                        exclude_id.map(|id| entity::tenant_property_part::Column::Id.ne(id)),
                    ),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates the provided mapping fields, leaving absent fields untouched
    ///
    /// Returns `Ok(None)` if the mapping does not exist.
    pub async fn update(
        &self,
        mapping_id: i32,
        changes: UpdatePropertyPartMappingDto,
    ) -> Result<Option<entity::tenant_property_part::Model>, DbErr> {
        let mapping = match self.get_by_id(mapping_id).await? {
            Some(mapping) => mapping,
            None => return Ok(None),
        };

        let mut mapping_am = mapping.into_active_model();
        if let Some(organization_id) = changes.organization_id {
            mapping_am.organization_id = ActiveValue::Set(organization_id);
        }
        if let Some(organization_name) = changes.organization_name {
            mapping_am.organization_name = ActiveValue::Set(organization_name);
        }
        if let Some(property_id) = changes.property_id {
            mapping_am.property_id = ActiveValue::Set(property_id);
        }
        if let Some(property_name) = changes.property_name {
            mapping_am.property_name = ActiveValue::Set(property_name);
        }
        if let Some(property_part_id) = changes.property_part_id {
            mapping_am.property_part_id = ActiveValue::Set(property_part_id);
        }
        if let Some(property_part_name) = changes.property_part_name {
            mapping_am.property_part_name = ActiveValue::Set(property_part_name);
        }
        if let Some(is_active) = changes.is_active {
            mapping_am.is_active = ActiveValue::Set(is_active);
        }
        mapping_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let mapping = mapping_am.update(self.db).await?;

        Ok(Some(mapping))
    }

    /// Deletes a mapping, returning the removed row
    ///
    /// Returns `Ok(None)` if the mapping does not exist.
    pub async fn delete(
        &self,
        mapping_id: i32,
    ) -> Result<Option<entity::tenant_property_part::Model>, DbErr> {
        let mapping = match self.get_by_id(mapping_id).await? {
            Some(mapping) => mapping,
            None => return Ok(None),
        };

        entity::prelude::TenantPropertyPart::delete_by_id(mapping_id)
            .exec(self.db)
            .await?;

        Ok(Some(mapping))
    }
}
