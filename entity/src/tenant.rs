use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tenant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tenant_property_part::Entity")]
    TenantPropertyPart,
    #[sea_orm(has_many = "super::contract_tenant::Entity")]
    ContractTenant,
}

impl Related<super::tenant_property_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TenantPropertyPart.def()
    }
}

impl Related<super::contract_tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContractTenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
