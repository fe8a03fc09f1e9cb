//! Tenant to property part mapping operations.

use sea_orm::{ColumnTrait, Condition, TransactionTrait};
use validator::Validate;

use crate::{
    model::tenant::{
        CreatePropertyPartMappingDto, PropertyPartMappingDto, PropertyPartMappingFilterDto,
        UpdatePropertyPartMappingDto,
    },
    server::{
        data::{tenant::TenantRepository, tenant_property_part::TenantPropertyPartRepository},
        error::{tenant::TenantError, validation::ValidationError, Error},
        service::tenant::TenantService,
    },
};

impl<'a> TenantService<'a> {
    /// Lists mappings ordered by ID, optionally restricted to one tenant.
    pub async fn list_tenant_property_parts(
        &self,
        filter: PropertyPartMappingFilterDto,
    ) -> Result<Vec<PropertyPartMappingDto>, Error> {
        let mappings = TenantPropertyPartRepository::new(self.db)
            .find(Condition::all().add_option(
                filter
                    .tenant_id
                    .map(|tenant_id| entity::tenant_property_part::Column::TenantId.eq(tenant_id)),
            ))
            .await?;

        Ok(mappings.into_iter().map(PropertyPartMappingDto::from).collect())
    }

    /// Maps a tenant onto a property part, active unless stated otherwise.
    ///
    /// The tenant row stays locked until commit, the same lock tenant deletion takes.
    ///
    /// # Returns
    /// - `Ok(PropertyPartMappingDto)` - Created mapping
    /// - `Err(Error::ValidationError)` - Blank snapshot name
    /// - `Err(Error::TenantError(TenantError::NotFound))` - No tenant with this ID
    /// - `Err(Error::TenantError(TenantError::DuplicateMapping))` - The tenant already has an
    ///   active mapping on this property part
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_tenant_property_part(
        &self,
        mapping: CreatePropertyPartMappingDto,
    ) -> Result<PropertyPartMappingDto, Error> {
        mapping.validate().map_err(ValidationError::from)?;

        let txn = self.db.begin().await?;

        // Serializes mapping writes per tenant so the duplicate check below holds at commit
        TenantRepository::new(&txn)
            .get_by_id_for_update(mapping.tenant_id)
            .await?
            .ok_or(TenantError::NotFound(mapping.tenant_id))?;

        let mapping_repo = TenantPropertyPartRepository::new(&txn);

        if mapping.is_active.unwrap_or(true)
            && mapping_repo
                .exists_active(mapping.tenant_id, mapping.property_part_id, None)
                .await?
        {
            return Err(TenantError::DuplicateMapping {
                tenant_id: mapping.tenant_id,
                property_part_id: mapping.property_part_id,
            }
            .into());
        }

        let created = mapping_repo.create(mapping).await?;

        txn.commit().await?;

        tracing::debug!(
            mapping_id = %created.id,
            tenant_id = %created.tenant_id,
            property_part_id = %created.property_part_id,
            "Created tenant property part mapping"
        );

        Ok(created.into())
    }

    /// Updates the present mapping fields.
    ///
    /// When the mapping ends up active the duplicate rule is checked against the resulting
    /// property part.
    ///
    /// # Returns
    /// - `Ok(PropertyPartMappingDto)` - Updated mapping
    /// - `Err(Error::ValidationError)` - Blank snapshot name
    /// - `Err(Error::TenantError(TenantError::MappingNotFound))` - No mapping with this ID
    /// - `Err(Error::TenantError(TenantError::DuplicateMapping))` - Another active mapping
    ///   pairs the tenant with the property part
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_tenant_property_part(
        &self,
        mapping_id: i32,
        changes: UpdatePropertyPartMappingDto,
    ) -> Result<PropertyPartMappingDto, Error> {
        changes.validate().map_err(ValidationError::from)?;

        let txn = self.db.begin().await?;

        let mapping_repo = TenantPropertyPartRepository::new(&txn);

        let existing = mapping_repo
            .get_by_id(mapping_id)
            .await?
            .ok_or(TenantError::MappingNotFound(mapping_id))?;

        TenantRepository::new(&txn)
            .get_by_id_for_update(existing.tenant_id)
            .await?
            .ok_or(TenantError::NotFound(existing.tenant_id))?;

        let is_active = changes.is_active.unwrap_or(existing.is_active);
        let property_part_id = changes
            .property_part_id
            .unwrap_or(existing.property_part_id);

        if is_active
            && mapping_repo
                .exists_active(existing.tenant_id, property_part_id, Some(mapping_id))
                .await?
        {
            return Err(TenantError::DuplicateMapping {
                tenant_id: existing.tenant_id,
                property_part_id,
            }
            .into());
        }

        let updated = mapping_repo
            .update(mapping_id, changes)
            .await?
            .ok_or(TenantError::MappingNotFound(mapping_id))?;

        txn.commit().await?;

        Ok(updated.into())
    }

    /// Deletes a mapping and returns it.
    ///
    /// # Returns
    /// - `Ok(PropertyPartMappingDto)` - The deleted mapping
    /// - `Err(Error::TenantError(TenantError::MappingNotFound))` - No mapping with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_tenant_property_part(
        &self,
        mapping_id: i32,
    ) -> Result<PropertyPartMappingDto, Error> {
        let txn = self.db.begin().await?;

        let deleted = TenantPropertyPartRepository::new(&txn)
            .delete(mapping_id)
            .await?
            .ok_or(TenantError::MappingNotFound(mapping_id))?;

        txn.commit().await?;

        Ok(deleted.into())
    }
}
