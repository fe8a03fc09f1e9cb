use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_tenant::Tenant;

static IDX_TENANT_PROPERTY_PART_TENANT_ID: &str = "idx-tenant_property_part-tenant_id";
static IDX_TENANT_PROPERTY_PART_PART_ACTIVE: &str =
    "idx-tenant_property_part-property_part_id-is_active";
static FK_TENANT_PROPERTY_PART_TENANT_ID: &str = "fk-tenant_property_part-tenant_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TenantPropertyPart::Table)
                    .if_not_exists()
                    .col(pk_auto(TenantPropertyPart::Id))
                    .col(integer(TenantPropertyPart::TenantId))
                    .col(integer(TenantPropertyPart::OrganizationId))
                    .col(string(TenantPropertyPart::OrganizationName))
                    .col(integer(TenantPropertyPart::PropertyId))
                    .col(string(TenantPropertyPart::PropertyName))
                    .col(integer(TenantPropertyPart::PropertyPartId))
                    .col(string(TenantPropertyPart::PropertyPartName))
                    .col(boolean(TenantPropertyPart::IsActive).default(true))
                    .col(timestamp(TenantPropertyPart::CreatedAt))
                    .col(timestamp(TenantPropertyPart::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TENANT_PROPERTY_PART_TENANT_ID)
                    .table(TenantPropertyPart::Table)
                    .col(TenantPropertyPart::TenantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TENANT_PROPERTY_PART_PART_ACTIVE)
                    .table(TenantPropertyPart::Table)
                    .col(TenantPropertyPart::PropertyPartId)
                    .col(TenantPropertyPart::IsActive)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TENANT_PROPERTY_PART_TENANT_ID)
                    .from_tbl(TenantPropertyPart::Table)
                    .from_col(TenantPropertyPart::TenantId)
                    .to_tbl(Tenant::Table)
                    .to_col(Tenant::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TENANT_PROPERTY_PART_TENANT_ID)
                    .table(TenantPropertyPart::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TENANT_PROPERTY_PART_PART_ACTIVE)
                    .table(TenantPropertyPart::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TENANT_PROPERTY_PART_TENANT_ID)
                    .table(TenantPropertyPart::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TenantPropertyPart::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TenantPropertyPart {
    Table,
    Id,
    TenantId,
    OrganizationId,
    OrganizationName,
    PropertyId,
    PropertyName,
    PropertyPartId,
    PropertyPartName,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
