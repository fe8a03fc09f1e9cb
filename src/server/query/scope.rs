use sea_orm::{ColumnTrait, Condition};

/// Organizational scope of a filter.
///
/// Only one scope applies per query. When several are supplied the most general wins, in
/// the order organization, property, property part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Organization(i32),
    Property(i32),
    PropertyPart(i32),
}

impl Scope {
    /// Picks the first present scope in priority order
    pub fn resolve(
        organization_id: Option<i32>,
        property_id: Option<i32>,
        property_part_id: Option<i32>,
    ) -> Option<Self> {
        organization_id
            .map(Scope::Organization)
            .or(property_id.map(Scope::Property))
            .or(property_part_id.map(Scope::PropertyPart))
    }

    /// Equality condition on the contract snapshot columns
    pub fn contract_condition(&self) -> Condition {
        let expr = match *self {
            Scope::Organization(id) => entity::contract::Column::OrganizationId.eq(id),
            Scope::Property(id) => entity::contract::Column::PropertyId.eq(id),
            Scope::PropertyPart(id) => entity::contract::Column::PropertyPartId.eq(id),
        };

        Condition::all().add(expr)
    }

    /// Equality condition on the mapping snapshot columns
    pub fn mapping_condition(&self) -> Condition {
        let expr = match *self {
            Scope::Organization(id) => entity::tenant_property_part::Column::OrganizationId.eq(id),
            Scope::Property(id) => entity::tenant_property_part::Column::PropertyId.eq(id),
            Scope::PropertyPart(id) => {
                entity::tenant_property_part::Column::PropertyPartId.eq(id)
            }
        };

        Condition::all().add(expr)
    }
}
