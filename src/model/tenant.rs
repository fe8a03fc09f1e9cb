use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::{
    lenient::{lenient, lenient_datetime},
    validate::non_blank,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TenantDto {
    pub id: i32,
    pub name: String,
    pub contact: String,
    pub email: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Tenant occupancy of a property part with snapshot names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyPartMappingDto {
    pub id: i32,
    pub tenant_id: i32,
    pub organization_id: i32,
    pub organization_name: String,
    pub property_id: i32,
    pub property_name: String,
    pub property_part_id: i32,
    pub property_part_name: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Lightweight contract listing attached to a tenant when contracts are requested.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContractSummaryDto {
    pub id: i32,
    pub property_id: i32,
    pub property_name: String,
    pub property_part_id: i32,
    pub property_part_name: String,
    #[schema(value_type = String)]
    pub rent_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TenantWithMappingsDto {
    pub id: i32,
    pub name: String,
    pub contact: String,
    pub email: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub property_parts: Vec<PropertyPartMappingDto>,
    /// Present only when contracts were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contracts: Option<Vec<ContractSummaryDto>>,
}

/// New tenant. Tenants are always created inactive.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateTenantDto {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    #[validate(custom(function = "non_blank"))]
    pub contact: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateTenantDto {
    #[validate(custom(function = "non_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub contact: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
}

/// Query-string filter for listing tenants.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TenantFilterDto {
    #[serde(default, deserialize_with = "lenient")]
    pub organization_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub property_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub property_part_id: Option<i32>,
    #[serde(rename = "isActive", default, deserialize_with = "lenient")]
    pub is_active: Option<bool>,
    /// Restrict to tenants on this contract's roster
    #[serde(default, deserialize_with = "lenient")]
    pub contract_id: Option<i32>,
    /// Only mappings created after this instant
    #[serde(rename = "createdAfter", default, deserialize_with = "lenient_datetime")]
    pub created_after: Option<NaiveDateTime>,
    #[serde(rename = "includeContracts", default, deserialize_with = "lenient")]
    pub include_contracts: Option<bool>,
    /// Activity filter for contracts attached when `includeContracts` is set
    #[serde(rename = "contractIsActive", default, deserialize_with = "lenient")]
    pub contract_is_active: Option<bool>,
}

/// Query-string options for fetching a single tenant.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TenantQueryDto {
    #[serde(rename = "includeContracts", default, deserialize_with = "lenient")]
    pub include_contracts: Option<bool>,
    #[serde(rename = "contractIsActive", default, deserialize_with = "lenient")]
    pub contract_is_active: Option<bool>,
}

/// New mapping of a tenant onto a property part. Names are stored as snapshots.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePropertyPartMappingDto {
    pub tenant_id: i32,
    pub organization_id: i32,
    #[validate(custom(function = "non_blank"))]
    pub organization_name: String,
    pub property_id: i32,
    #[validate(custom(function = "non_blank"))]
    pub property_name: String,
    pub property_part_id: i32,
    #[validate(custom(function = "non_blank"))]
    pub property_part_name: String,
    /// Defaults to active
    #[serde(rename = "isActive", default)]
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePropertyPartMappingDto {
    pub organization_id: Option<i32>,
    #[validate(custom(function = "non_blank"))]
    pub organization_name: Option<String>,
    pub property_id: Option<i32>,
    #[validate(custom(function = "non_blank"))]
    pub property_name: Option<String>,
    pub property_part_id: Option<i32>,
    #[validate(custom(function = "non_blank"))]
    pub property_part_name: Option<String>,
    #[serde(rename = "isActive", default)]
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropertyPartMappingFilterDto {
    #[serde(default, deserialize_with = "lenient")]
    pub tenant_id: Option<i32>,
}
