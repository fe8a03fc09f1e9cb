use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        tenant::{
            CreatePropertyPartMappingDto, PropertyPartMappingDto, PropertyPartMappingFilterDto,
            UpdatePropertyPartMappingDto,
        },
    },
    server::{
        controller::util::json::ApiJson, error::Error, model::app::AppState,
        service::tenant::TenantService,
    },
};

pub static PROPERTY_PART_TAG: &str = "tenant-property-part";

/// List tenant to property part mappings, optionally for a single tenant
#[utoipa::path(
    get,
    path = "/api/tenant-property-parts",
    tag = PROPERTY_PART_TAG,
    params(PropertyPartMappingFilterDto),
    responses(
        (status = 200, description = "Matching mappings", body = Vec<PropertyPartMappingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tenant_property_parts(
    State(state): State<AppState>,
    Query(filter): Query<PropertyPartMappingFilterDto>,
) -> Result<impl IntoResponse, Error> {
    let mappings = TenantService::new(&state.db)
        .list_tenant_property_parts(filter)
        .await?;

    Ok((StatusCode::OK, Json(mappings)))
}

/// Map a tenant onto a property part
#[utoipa::path(
    post,
    path = "/api/tenant-property-parts",
    tag = PROPERTY_PART_TAG,
    request_body = CreatePropertyPartMappingDto,
    responses(
        (status = 201, description = "Mapping created", body = PropertyPartMappingDto),
        (status = 400, description = "Blank snapshot name or malformed body", body = ErrorDto),
        (status = 404, description = "Tenant not found", body = ErrorDto),
        (status = 409, description = "Tenant already actively mapped to the property part", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tenant_property_part(
    State(state): State<AppState>,
    ApiJson(mapping): ApiJson<CreatePropertyPartMappingDto>,
) -> Result<impl IntoResponse, Error> {
    let mapping = TenantService::new(&state.db)
        .create_tenant_property_part(mapping)
        .await?;

    Ok((StatusCode::CREATED, Json(mapping)))
}

#[utoipa::path(
    patch,
    path = "/api/tenant-property-parts/{id}",
    tag = PROPERTY_PART_TAG,
    params(("id" = i32, Path, description = "Mapping ID")),
    request_body = UpdatePropertyPartMappingDto,
    responses(
        (status = 200, description = "Mapping updated", body = PropertyPartMappingDto),
        (status = 400, description = "Blank snapshot name or malformed body", body = ErrorDto),
        (status = 404, description = "Mapping not found", body = ErrorDto),
        (status = 409, description = "Tenant already actively mapped to the property part", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tenant_property_part(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(changes): ApiJson<UpdatePropertyPartMappingDto>,
) -> Result<impl IntoResponse, Error> {
    let mapping = TenantService::new(&state.db)
        .update_tenant_property_part(id, changes)
        .await?;

    Ok((StatusCode::OK, Json(mapping)))
}

/// Delete a mapping, returning the removed row
#[utoipa::path(
    delete,
    path = "/api/tenant-property-parts/{id}",
    tag = PROPERTY_PART_TAG,
    params(("id" = i32, Path, description = "Mapping ID")),
    responses(
        (status = 200, description = "Mapping deleted", body = PropertyPartMappingDto),
        (status = 404, description = "Mapping not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tenant_property_part(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let mapping = TenantService::new(&state.db)
        .delete_tenant_property_part(id)
        .await?;

    Ok((StatusCode::OK, Json(mapping)))
}
