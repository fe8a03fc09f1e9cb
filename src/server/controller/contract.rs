use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        contract::{
            ContractFilterDto, ContractWithTenantsDto, CreateContractDto, UpdateContractDto,
        },
    },
    server::{
        controller::util::json::ApiJson, error::Error, model::app::AppState,
        service::contract::ContractService,
    },
};

pub static CONTRACT_TAG: &str = "contract";

/// List contracts matching the query-string filter
///
/// Only the first present of `organization_id`, `property_id` and `property_part_id` is
/// applied. Malformed filter values are ignored.
#[utoipa::path(
    get,
    path = "/api/contracts",
    tag = CONTRACT_TAG,
    params(ContractFilterDto),
    responses(
        (status = 200, description = "Matching contracts with their tenant rosters", body = Vec<ContractWithTenantsDto>),
        (status = 503, description = "Database unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_contracts(
    State(state): State<AppState>,
    Query(filter): Query<ContractFilterDto>,
) -> Result<impl IntoResponse, Error> {
    let contracts = ContractService::new(&state.db)
        .list_contracts(filter)
        .await?;

    Ok((StatusCode::OK, Json(contracts)))
}

/// Get a single contract with its tenant roster
#[utoipa::path(
    get,
    path = "/api/contracts/{id}",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    responses(
        (status = 200, description = "Contract found", body = ContractWithTenantsDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contract(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let contract = ContractService::new(&state.db).get_contract(id).await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Create a contract
///
/// When `tenant_ids` is omitted every tenant actively mapped to the property part is
/// attached. An explicit empty list attaches nobody.
#[utoipa::path(
    post,
    path = "/api/contracts",
    tag = CONTRACT_TAG,
    request_body = CreateContractDto,
    responses(
        (status = 201, description = "Contract created", body = ContractWithTenantsDto),
        (status = 400, description = "Invalid contract terms, unknown tenants or malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contract(
    State(state): State<AppState>,
    ApiJson(contract): ApiJson<CreateContractDto>,
) -> Result<impl IntoResponse, Error> {
    let contract = ContractService::new(&state.db)
        .create_contract(contract)
        .await?;

    Ok((StatusCode::CREATED, Json(contract)))
}

/// Update a contract, replacing its roster when `tenant_ids` is present
#[utoipa::path(
    patch,
    path = "/api/contracts/{id}",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    request_body = UpdateContractDto,
    responses(
        (status = 200, description = "Contract updated", body = ContractWithTenantsDto),
        (status = 400, description = "Invalid contract terms, unknown tenants or malformed body", body = ErrorDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contract(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(changes): ApiJson<UpdateContractDto>,
) -> Result<impl IntoResponse, Error> {
    let contract = ContractService::new(&state.db)
        .update_contract(id, changes)
        .await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Activate or deactivate a contract
#[utoipa::path(
    patch,
    path = "/api/contracts/{id}/status",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    request_body = StatusDto,
    responses(
        (status = 200, description = "Contract status changed", body = ContractWithTenantsDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_contract_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(status): ApiJson<StatusDto>,
) -> Result<impl IntoResponse, Error> {
    let contract = ContractService::new(&state.db)
        .change_contract_status(id, status.is_active)
        .await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Delete a contract together with its roster
#[utoipa::path(
    delete,
    path = "/api/contracts/{id}",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    responses(
        (status = 204, description = "Contract deleted"),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contract(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ContractService::new(&state.db).delete_contract(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
