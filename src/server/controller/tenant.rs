use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        tenant::{
            CreateTenantDto, TenantDto, TenantFilterDto, TenantQueryDto, TenantWithMappingsDto,
            UpdateTenantDto,
        },
    },
    server::{
        controller::util::json::ApiJson, error::Error, model::app::AppState,
        service::tenant::TenantService,
    },
};

pub static TENANT_TAG: &str = "tenant";

/// List tenants with their property part mappings
///
/// Scope and `createdAfter` filters apply to mappings; tenants without a matching mapping
/// are left out. Contracts on the mapped property parts are attached when
/// `includeContracts=true`.
#[utoipa::path(
    get,
    path = "/api/tenants",
    tag = TENANT_TAG,
    params(TenantFilterDto),
    responses(
        (status = 200, description = "Matching tenants", body = Vec<TenantWithMappingsDto>),
        (status = 503, description = "Database unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tenants(
    State(state): State<AppState>,
    Query(filter): Query<TenantFilterDto>,
) -> Result<impl IntoResponse, Error> {
    let tenants = TenantService::new(&state.db).list_tenants(filter).await?;

    Ok((StatusCode::OK, Json(tenants)))
}

/// Get a single tenant with its active property part mappings
#[utoipa::path(
    get,
    path = "/api/tenants/{id}",
    tag = TENANT_TAG,
    params(("id" = i32, Path, description = "Tenant ID"), TenantQueryDto),
    responses(
        (status = 200, description = "Tenant found", body = TenantWithMappingsDto),
        (status = 404, description = "Tenant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tenant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(options): Query<TenantQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let tenant = TenantService::new(&state.db)
        .get_tenant(id, options)
        .await?;

    Ok((StatusCode::OK, Json(tenant)))
}

/// Create a tenant
///
/// New tenants are always inactive.
#[utoipa::path(
    post,
    path = "/api/tenants",
    tag = TENANT_TAG,
    request_body = CreateTenantDto,
    responses(
        (status = 201, description = "Tenant created", body = TenantDto),
        (status = 400, description = "Blank field, malformed email or malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tenant(
    State(state): State<AppState>,
    ApiJson(tenant): ApiJson<CreateTenantDto>,
) -> Result<impl IntoResponse, Error> {
    let tenant = TenantService::new(&state.db).create_tenant(tenant).await?;

    Ok((StatusCode::CREATED, Json(tenant)))
}

#[utoipa::path(
    patch,
    path = "/api/tenants/{id}",
    tag = TENANT_TAG,
    params(("id" = i32, Path, description = "Tenant ID")),
    request_body = UpdateTenantDto,
    responses(
        (status = 200, description = "Tenant updated", body = TenantDto),
        (status = 400, description = "Blank field, malformed email or malformed body", body = ErrorDto),
        (status = 404, description = "Tenant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tenant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(changes): ApiJson<UpdateTenantDto>,
) -> Result<impl IntoResponse, Error> {
    let tenant = TenantService::new(&state.db)
        .update_tenant(id, changes)
        .await?;

    Ok((StatusCode::OK, Json(tenant)))
}

/// Activate or deactivate a tenant
#[utoipa::path(
    patch,
    path = "/api/tenants/{id}/status",
    tag = TENANT_TAG,
    params(("id" = i32, Path, description = "Tenant ID")),
    request_body = StatusDto,
    responses(
        (status = 200, description = "Tenant status changed", body = TenantDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 404, description = "Tenant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_tenant_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(status): ApiJson<StatusDto>,
) -> Result<impl IntoResponse, Error> {
    let tenant = TenantService::new(&state.db)
        .change_tenant_status(id, status.is_active)
        .await?;

    Ok((StatusCode::OK, Json(tenant)))
}

/// Delete a tenant
///
/// Fails with 409 while any property part mapping or contract roster references the tenant.
#[utoipa::path(
    delete,
    path = "/api/tenants/{id}",
    tag = TENANT_TAG,
    params(("id" = i32, Path, description = "Tenant ID")),
    responses(
        (status = 204, description = "Tenant deleted"),
        (status = 404, description = "Tenant not found", body = ErrorDto),
        (status = 409, description = "Tenant still referenced by mappings or contracts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tenant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    TenantService::new(&state.db).delete_tenant(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
