use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_tenant::Tenant, m20251101_000003_contract::Contract};

static IDX_CONTRACT_TENANT_CONTRACT_ID_TENANT_ID: &str =
    "idx-contract_tenant-contract_id-tenant_id";
static IDX_CONTRACT_TENANT_TENANT_ID: &str = "idx-contract_tenant-tenant_id";
static FK_CONTRACT_TENANT_CONTRACT_ID: &str = "fk-contract_tenant-contract_id";
static FK_CONTRACT_TENANT_TENANT_ID: &str = "fk-contract_tenant-tenant_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContractTenant::Table)
                    .if_not_exists()
                    .col(pk_auto(ContractTenant::Id))
                    .col(integer(ContractTenant::ContractId))
                    .col(integer(ContractTenant::TenantId))
                    .col(timestamp(ContractTenant::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // A tenant appears at most once in a contract's roster
        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRACT_TENANT_CONTRACT_ID_TENANT_ID)
                    .table(ContractTenant::Table)
                    .col(ContractTenant::ContractId)
                    .col(ContractTenant::TenantId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRACT_TENANT_TENANT_ID)
                    .table(ContractTenant::Table)
                    .col(ContractTenant::TenantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONTRACT_TENANT_CONTRACT_ID)
                    .from_tbl(ContractTenant::Table)
                    .from_col(ContractTenant::ContractId)
                    .to_tbl(Contract::Table)
                    .to_col(Contract::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONTRACT_TENANT_TENANT_ID)
                    .from_tbl(ContractTenant::Table)
                    .from_col(ContractTenant::TenantId)
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
                    .name(FK_CONTRACT_TENANT_TENANT_ID)
                    .table(ContractTenant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONTRACT_TENANT_CONTRACT_ID)
                    .table(ContractTenant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRACT_TENANT_TENANT_ID)
                    .table(ContractTenant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRACT_TENANT_CONTRACT_ID_TENANT_ID)
                    .table(ContractTenant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ContractTenant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ContractTenant {
    Table,
    Id,
    ContractId,
    TenantId,
    CreatedAt,
}
