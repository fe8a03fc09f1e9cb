use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::lenient::{lenient, lenient_datetime};

/// Contract projection including its tenant roster.
///
/// Organization, property and part names are snapshots taken when the contract was written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContractWithTenantsDto {
    pub id: i32,
    pub organization_id: i32,
    pub organization_name: String,
    pub property_id: i32,
    pub property_name: String,
    pub property_part_id: i32,
    pub property_part_name: String,
    #[schema(value_type = String)]
    pub rent_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub tds_applicable: bool,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Ids of the tenants on this contract's roster, ascending
    pub tenant_ids: Vec<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateContractDto {
    pub organization_id: i32,
    pub organization_name: String,
    pub property_id: i32,
    pub property_name: String,
    pub property_part_id: i32,
    pub property_part_name: String,
    #[schema(value_type = String)]
    pub rent_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub tds_applicable: bool,
    /// Explicit roster. When omitted, every tenant actively mapped to the property part is
    /// attached; an explicit empty list attaches nobody.
    #[serde(default)]
    pub tenant_ids: Option<Vec<i32>>,
}

/// Partial contract update; absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateContractDto {
    pub organization_id: Option<i32>,
    pub organization_name: Option<String>,
    pub property_id: Option<i32>,
    pub property_name: Option<String>,
    pub property_part_id: Option<i32>,
    pub property_part_name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub rent_amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub tds_applicable: Option<bool>,
    /// When present the roster is replaced entirely by this list
    pub tenant_ids: Option<Vec<i32>>,
}

/// Query-string filter for listing contracts.
///
/// Only the first present of `organization_id`, `property_id`, `property_part_id` is applied.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContractFilterDto {
    #[serde(default, deserialize_with = "lenient")]
    pub organization_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub property_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub property_part_id: Option<i32>,
    #[serde(rename = "isActive", default, deserialize_with = "lenient")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub tds_applicable: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub tenant_id: Option<i32>,
    #[serde(rename = "startDate", default, deserialize_with = "lenient")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default, deserialize_with = "lenient")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "createdAfter", default, deserialize_with = "lenient_datetime")]
    pub created_after: Option<NaiveDateTime>,
    #[serde(rename = "updatedAfter", default, deserialize_with = "lenient_datetime")]
    pub updated_after: Option<NaiveDateTime>,
}
