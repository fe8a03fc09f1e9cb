use sea_orm_migration::{prelude::*, schema::*};

static IDX_CONTRACT_PROPERTY_PART_ID: &str = "idx-contract-property_part_id";
static IDX_CONTRACT_START_DATE: &str = "idx-contract-start_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contract::Table)
                    .if_not_exists()
                    .col(pk_auto(Contract::Id))
                    .col(integer(Contract::PropertyId))
                    .col(string(Contract::PropertyName))
                    .col(integer(Contract::PropertyPartId))
                    .col(string(Contract::PropertyPartName))
                    .col(integer(Contract::OrganizationId))
                    .col(string(Contract::OrganizationName))
                    .col(decimal_len(Contract::RentAmount, 12, 2))
                    .col(date(Contract::StartDate))
                    .col(date(Contract::EndDate))
                    .col(boolean(Contract::TdsApplicable).default(false))
                    .col(boolean(Contract::IsActive).default(true))
                    .col(timestamp(Contract::CreatedAt))
                    .col(timestamp(Contract::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRACT_PROPERTY_PART_ID)
                    .table(Contract::Table)
                    .col(Contract::PropertyPartId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRACT_START_DATE)
                    .table(Contract::Table)
                    .col(Contract::StartDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRACT_START_DATE)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRACT_PROPERTY_PART_ID)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Contract::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Contract {
    Table,
    Id,
    PropertyId,
    PropertyName,
    PropertyPartId,
    PropertyPartName,
    OrganizationId,
    OrganizationName,
    RentAmount,
    StartDate,
    EndDate,
    TdsApplicable,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
