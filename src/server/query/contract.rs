use chrono::NaiveDate;
use sea_orm::{sea_query::Query, ColumnTrait, Condition};

use crate::{
    model::contract::ContractFilterDto,
    server::{error::Error, query::scope::Scope, util::time::contract_date_range},
};

/// Builds the contract listing condition from a filter
///
/// Roster membership (`tenant_id`) is expressed as a subquery on the join table so the
/// contracts returned still carry their complete roster.
///
/// # Arguments
/// - `filter` - Parsed query-string filter
/// - `today` - Current UTC date, used for the default upper bound of the date window
///
/// # Returns
/// - `Ok(Condition)` - Conjunction of every present filter, empty when none are present
/// - `Err(Error::InternalError)` - Default date window could not be computed
pub fn contract_condition(filter: &ContractFilterDto, today: NaiveDate) -> Result<Condition, Error> {
    let scope = Scope::resolve(
        filter.organization_id,
        filter.property_id,
        filter.property_part_id,
    );
    let date_range = contract_date_range(filter.start_date, filter.end_date, today)?;

    Ok(Condition::all()
        .add_option(scope.map(|scope| scope.contract_condition()))
        .add_option(
            filter
                .is_active
                .map(|is_active| entity::contract::Column::IsActive.eq(is_active)),
        )
        .add_option(
            filter
                .tds_applicable
                .map(|tds| entity::contract::Column::TdsApplicable.eq(tds)),
        )
        .add_option(filter.tenant_id.map(|tenant_id| {
            entity::contract::Column::Id.in_subquery(
                Query::select()
                    .column(entity::contract_tenant::Column::ContractId)
                    .from(entity::contract_tenant::Entity)
                    .and_where(entity::contract_tenant::Column::TenantId.eq(tenant_id))
                    .to_owned(),
            )
        }))
        .add_option(
            date_range.map(|(from, to)| entity::contract::Column::StartDate.between(from, to)),
        )
        .add_option(
            filter
                .created_after
                .map(|created_after| entity::contract::Column::CreatedAt.gt(created_after)),
        )
        .add_option(
            filter
                .updated_after
                .map(|updated_after| entity::contract::Column::UpdatedAt.gt(updated_after)),
        ))
}
