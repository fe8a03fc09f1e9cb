//! Rental contract covering a single property part.
//!
//! `property_name`, `property_part_name`, `organization_id` and `organization_name` are
//! write-time snapshots of the upstream property service.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contract")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    pub property_name: String,
    pub property_part_id: i32,
    pub property_part_name: String,
    pub organization_id: i32,
    pub organization_name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub rent_amount: Decimal,
    pub start_date: Date,
    pub end_date: Date,
    pub tds_applicable: bool,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::contract_tenant::Entity")]
    ContractTenant,
}

impl Related<super::contract_tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContractTenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
