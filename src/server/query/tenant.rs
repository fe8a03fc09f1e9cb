use sea_orm::{sea_query::Query, ColumnTrait, Condition};

use crate::{model::tenant::TenantFilterDto, server::query::scope::Scope};

/// Tenant listing query split into the tenant condition and the condition selecting which
/// property part mappings are attached to each tenant.
#[derive(Clone, Debug)]
pub struct TenantQuery {
    tenant: Condition,
    mapping: Condition,
    requires_mapping: bool,
}

impl TenantQuery {
    /// Builds the query for a listing filter
    ///
    /// Scope and `createdAfter` restrict mappings, and tenants without a matching mapping
    /// are then excluded. Mappings must be active unless `contract_id` is given.
    pub fn from_filter(filter: &TenantFilterDto) -> Self {
        let scope = Scope::resolve(
            filter.organization_id,
            filter.property_id,
            filter.property_part_id,
        );
        let requires_mapping = scope.is_some() || filter.created_after.is_some();

        let mapping = Condition::all()
            .add_option(scope.map(|scope| scope.mapping_condition()))
            .add_option(filter.created_after.map(|created_after| {
                entity::tenant_property_part::Column::CreatedAt.gt(created_after)
            }))
            .add_option(
                filter
                    .contract_id
                    .is_none()
                    .then(|| entity::tenant_property_part::Column::IsActive.eq(true)),
            );

        let tenant = Condition::all()
            .add_option(
                filter
                    .is_active
                    .map(|is_active| entity::tenant::Column::IsActive.eq(is_active)),
            )
            .add_option(filter.contract_id.map(|contract_id| {
                entity::tenant::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::contract_tenant::Column::TenantId)
                        .from(entity::contract_tenant::Entity)
                        .and_where(entity::contract_tenant::Column::ContractId.eq(contract_id))
                        .to_owned(),
                )
            }));

        Self {
            tenant,
            mapping,
            requires_mapping,
        }
    }

    /// Builds the query for a single tenant with its active mappings
    pub fn for_tenant(tenant_id: i32) -> Self {
        Self {
            tenant: Condition::all().add(entity::tenant::Column::Id.eq(tenant_id)),
            mapping: Condition::all().add(entity::tenant_property_part::Column::IsActive.eq(true)),
            requires_mapping: false,
        }
    }

    /// Condition on the tenant table
    pub fn tenant_condition(&self) -> Condition {
        if !self.requires_mapping {
            return self.tenant.clone();
        }

        self.tenant.clone().add(
            entity::tenant::Column::Id.in_subquery(
                Query::select()
                    .column(entity::tenant_property_part::Column::TenantId)
                    .from(entity::tenant_property_part::Entity)
                    .cond_where(self.mapping.clone())
                    .to_owned(),
            ),
        )
    }

    /// Condition selecting the mappings attached to the listed tenants
    ///
    /// Callers add the tenant ID restriction.
    pub fn mapping_condition(&self) -> Condition {
        self.mapping.clone()
    }
}
