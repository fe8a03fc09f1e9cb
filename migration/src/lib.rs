pub use sea_orm_migration::prelude::*;

mod m20251101_000001_tenant;
mod m20251101_000002_tenant_property_part;
mod m20251101_000003_contract;
mod m20251101_000004_contract_tenant;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_tenant::Migration),
            Box::new(m20251101_000002_tenant_property_part::Migration),
            Box::new(m20251101_000003_contract::Migration),
            Box::new(m20251101_000004_contract_tenant::Migration),
        ]
    }
}
