use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use tenancy::{
    model::{
        api::{ErrorDto, StatusDto},
        contract::{ContractFilterDto, ContractWithTenantsDto, CreateContractDto, UpdateContractDto},
    },
    server::controller::{
        contract::{
            change_contract_status, create_contract, delete_contract, get_contract, list_contracts,
            update_contract,
        },
        util::json::ApiJson,
    },
};

use super::*;

fn create_dto(part: PartRef, tenant_ids: Option<Vec<i32>>) -> CreateContractDto {
    CreateContractDto {
        organization_id: part.organization_id,
        organization_name: part.organization_name(),
        property_id: part.property_id,
        property_name: part.property_name(),
        property_part_id: part.property_part_id,
        property_part_name: part.property_part_name(),
        rent_amount: Decimal::new(150000, 2),
        start_date: date(2025, 1, 1),
        end_date: date(2025, 12, 31),
        tds_applicable: true,
        tenant_ids,
    }
}

/// Expect 201 Created with the auto-assigned roster
#[tokio::test]
async fn create_returns_created_with_roster() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let part = PartRef::new(1, 10, 100);
    let tenant = test.tenancy().insert_tenant("A", true).await?;
    test.tenancy().insert_mapping(tenant.id, part, true).await?;

    let result = create_contract(
        State(test.into_app_state()),
        ApiJson(create_dto(part, None)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let contract: ContractWithTenantsDto = body_json(resp).await;
    assert_eq!(contract.tenant_ids, vec![tenant.id]);
    assert!(contract.is_active);
    assert!(contract.tds_applicable);

    Ok(())
}

/// Expect 400 Bad Request when the roster names unknown tenants
#[tokio::test]
async fn create_rejects_unknown_tenants() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;

    let result = create_contract(
        State(test.into_app_state()),
        ApiJson(create_dto(PartRef::new(1, 10, 100), Some(vec![42]))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert!(error.error.contains("42"));

    Ok(())
}

/// Expect 200 OK with the contract when it exists
#[tokio::test]
async fn get_returns_contract() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant = test.tenancy().insert_tenant("A", true).await?;
    let contract = test
        .tenancy()
        .insert_contract_with_tenants(PartRef::new(1, 10, 100), date(2025, 1, 1), &[tenant.id])
        .await?;

    let result = get_contract(State(test.into_app_state()), Path(contract.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ContractWithTenantsDto = body_json(resp).await;
    assert_eq!(body.id, contract.id);
    assert_eq!(body.tenant_ids, vec![tenant.id]);

    Ok(())
}

/// Expect 404 Not Found when contract does not exist
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;

    let result = get_contract(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the listing to honour the query-string filter
#[tokio::test]
async fn list_filters_by_activity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let part = PartRef::new(1, 10, 100);
    test.tenancy()
        .insert_contract(part, date(2025, 1, 1), true)
        .await?;
    let inactive = test
        .tenancy()
        .insert_contract(part, date(2025, 1, 1), false)
        .await?;

    let result = list_contracts(
        State(test.into_app_state()),
        Query(ContractFilterDto {
            is_active: Some(false),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let contracts: Vec<ContractWithTenantsDto> = body_json(resp).await;
    assert_eq!(
        contracts.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![inactive.id]
    );

    Ok(())
}

/// Expect 200 OK with the replaced roster
#[tokio::test]
async fn update_replaces_roster() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant_a = test.tenancy().insert_tenant("A", true).await?;
    let tenant_b = test.tenancy().insert_tenant("B", true).await?;
    let contract = test
        .tenancy()
        .insert_contract_with_tenants(PartRef::new(1, 10, 100), date(2025, 1, 1), &[tenant_a.id])
        .await?;

    let result = update_contract(
        State(test.into_app_state()),
        Path(contract.id),
        ApiJson(UpdateContractDto {
            tenant_ids: Some(vec![tenant_b.id]),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ContractWithTenantsDto = body_json(resp).await;
    assert_eq!(body.tenant_ids, vec![tenant_b.id]);

    Ok(())
}

/// Expect 200 OK with the contract deactivated
#[tokio::test]
async fn change_status_deactivates_contract() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let contract = test
        .tenancy()
        .insert_contract(PartRef::new(1, 10, 100), date(2025, 1, 1), true)
        .await?;

    let result = change_contract_status(
        State(test.into_app_state()),
        Path(contract.id),
        ApiJson(StatusDto { is_active: false }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ContractWithTenantsDto = body_json(resp).await;
    assert!(!body.is_active);

    Ok(())
}

/// Expect 204 No Content, then 404 Not Found for the same contract
#[tokio::test]
async fn delete_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant = test.tenancy().insert_tenant("A", true).await?;
    let contract = test
        .tenancy()
        .insert_contract_with_tenants(PartRef::new(1, 10, 100), date(2025, 1, 1), &[tenant.id])
        .await?;

    let result = delete_contract(State(test.into_app_state()), Path(contract.id)).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    let result = delete_contract(State(test.into_app_state()), Path(contract.id)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 500 Internal Server Error when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = list_contracts(
        State(test.into_app_state()),
        Query(ContractFilterDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
