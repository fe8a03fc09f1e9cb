use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tenancy::{
    model::{
        api::{ErrorDto, StatusDto},
        tenant::{
            CreateTenantDto, TenantDto, TenantFilterDto, TenantQueryDto, TenantWithMappingsDto,
            UpdateTenantDto,
        },
    },
    server::controller::{
        tenant::{
            change_tenant_status, create_tenant, delete_tenant, get_tenant, list_tenants,
            update_tenant,
        },
        util::json::ApiJson,
    },
};

use super::*;

/// Expect 201 Created with an inactive tenant
#[tokio::test]
async fn create_returns_inactive_tenant() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;

    let result = create_tenant(
        State(test.into_app_state()),
        ApiJson(CreateTenantDto {
            name: "A".to_string(),
            contact: "123".to_string(),
            email: "a@x.com".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let tenant: TenantDto = body_json(resp).await;
    assert!(!tenant.is_active);
    assert_eq!(tenant.name, "A");

    Ok(())
}

/// Expect 400 Bad Request for a malformed email
#[tokio::test]
async fn create_rejects_malformed_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;

    let result = create_tenant(
        State(test.into_app_state()),
        ApiJson(CreateTenantDto {
            name: "A".to_string(),
            contact: "123".to_string(),
            email: "not-an-email".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK with contracts attached when requested
#[tokio::test]
async fn get_includes_contracts_when_requested() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let part = PartRef::new(1, 10, 100);
    let tenant = test.tenancy().insert_tenant("A", true).await?;
    test.tenancy().insert_mapping(tenant.id, part, true).await?;
    let contract = test
        .tenancy()
        .insert_contract(part, date(2025, 1, 1), true)
        .await?;

    let result = get_tenant(
        State(test.into_app_state()),
        Path(tenant.id),
        Query(TenantQueryDto {
            include_contracts: Some(true),
            contract_is_active: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: TenantWithMappingsDto = body_json(resp).await;
    assert_eq!(body.property_parts.len(), 1);
    assert_eq!(
        body.contracts
            .map(|c| c.iter().map(|c| c.id).collect::<Vec<_>>()),
        Some(vec![contract.id])
    );

    Ok(())
}

/// Expect 404 Not Found when tenant does not exist
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;

    let result = get_tenant(
        State(test.into_app_state()),
        Path(1),
        Query(TenantQueryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect only tenants mapped within the scope to be listed
#[tokio::test]
async fn list_applies_scope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant_a = test.tenancy().insert_tenant("A", true).await?;
    let tenant_b = test.tenancy().insert_tenant("B", true).await?;
    test.tenancy()
        .insert_mapping(tenant_a.id, PartRef::new(1, 10, 100), true)
        .await?;
    test.tenancy()
        .insert_mapping(tenant_b.id, PartRef::new(1, 11, 110), true)
        .await?;

    let result = list_tenants(
        State(test.into_app_state()),
        Query(TenantFilterDto {
            property_id: Some(11),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let tenants: Vec<TenantWithMappingsDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(
        tenants.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![tenant_b.id]
    );

    Ok(())
}

/// Expect 200 OK with the updated contact
#[tokio::test]
async fn update_changes_contact() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant = test.tenancy().insert_tenant("A", true).await?;

    let result = update_tenant(
        State(test.into_app_state()),
        Path(tenant.id),
        ApiJson(UpdateTenantDto {
            contact: Some("555-0199".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let body: TenantDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(body.contact, "555-0199");

    Ok(())
}

/// Expect 200 OK with the tenant activated
#[tokio::test]
async fn change_status_activates_tenant() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant = test.tenancy().insert_tenant("A", false).await?;

    let result = change_tenant_status(
        State(test.into_app_state()),
        Path(tenant.id),
        ApiJson(StatusDto { is_active: true }),
    )
    .await;

    assert!(result.is_ok());
    let body: TenantDto = body_json(result.unwrap().into_response()).await;
    assert!(body.is_active);

    Ok(())
}

/// Expect 409 Conflict naming both counts while the tenant is referenced
#[tokio::test]
async fn delete_conflicts_while_referenced() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let part = PartRef::new(1, 10, 100);
    let tenant = test.tenancy().insert_tenant("A", true).await?;
    test.tenancy().insert_mapping(tenant.id, part, true).await?;
    test.tenancy()
        .insert_contract_with_tenants(part, date(2025, 1, 1), &[tenant.id])
        .await?;

    let result = delete_tenant(State(test.into_app_state()), Path(tenant.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let error: ErrorDto = body_json(resp).await;
    assert!(error.error.contains("1 property part mapping(s)"));
    assert!(error.error.contains("1 contract(s)"));

    Ok(())
}

/// Expect 204 No Content for an orphaned tenant
#[tokio::test]
async fn delete_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant = test.tenancy().insert_tenant("A", true).await?;

    let result = delete_tenant(State(test.into_app_state()), Path(tenant.id)).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    Ok(())
}
