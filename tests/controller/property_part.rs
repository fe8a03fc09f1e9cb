use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tenancy::{
    model::tenant::{
        CreatePropertyPartMappingDto, PropertyPartMappingDto, PropertyPartMappingFilterDto,
        UpdatePropertyPartMappingDto,
    },
    server::controller::{
        property_part::{
            create_tenant_property_part, delete_tenant_property_part, list_tenant_property_parts,
            update_tenant_property_part,
        },
        util::json::ApiJson,
    },
};

use super::*;

fn create_dto(tenant_id: i32, part: PartRef) -> CreatePropertyPartMappingDto {
    CreatePropertyPartMappingDto {
        tenant_id,
        organization_id: part.organization_id,
        organization_name: part.organization_name(),
        property_id: part.property_id,
        property_name: part.property_name(),
        property_part_id: part.property_part_id,
        property_part_name: part.property_part_name(),
        is_active: None,
    }
}

/// Expect 201 Created with an active mapping
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant = test.tenancy().insert_tenant("A", true).await?;

    let result = create_tenant_property_part(
        State(test.into_app_state()),
        ApiJson(create_dto(tenant.id, PartRef::new(1, 10, 100))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let mapping: PropertyPartMappingDto = body_json(resp).await;
    assert!(mapping.is_active);
    assert_eq!(mapping.tenant_id, tenant.id);

    Ok(())
}

/// Expect 404 Not Found when the tenant does not exist
#[tokio::test]
async fn create_returns_not_found_for_unknown_tenant() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;

    let result = create_tenant_property_part(
        State(test.into_app_state()),
        ApiJson(create_dto(1, PartRef::new(1, 10, 100))),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 409 Conflict for a second active mapping of the same pair
#[tokio::test]
async fn create_conflicts_on_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let part = PartRef::new(1, 10, 100);
    let tenant = test.tenancy().insert_tenant("A", true).await?;
    test.tenancy().insert_mapping(tenant.id, part, true).await?;

    let result = create_tenant_property_part(
        State(test.into_app_state()),
        ApiJson(create_dto(tenant.id, part)),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::CONFLICT
    );

    Ok(())
}

/// Expect the listing to be restricted to the requested tenant
#[tokio::test]
async fn list_filters_by_tenant() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let part = PartRef::new(1, 10, 100);
    let tenant_a = test.tenancy().insert_tenant("A", true).await?;
    let tenant_b = test.tenancy().insert_tenant("B", true).await?;
    test.tenancy().insert_mapping(tenant_a.id, part, true).await?;
    let own = test.tenancy().insert_mapping(tenant_b.id, part, true).await?;

    let result = list_tenant_property_parts(
        State(test.into_app_state()),
        Query(PropertyPartMappingFilterDto {
            tenant_id: Some(tenant_b.id),
        }),
    )
    .await;

    assert!(result.is_ok());
    let mappings: Vec<PropertyPartMappingDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(
        mappings.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![own.id]
    );

    Ok(())
}

/// Expect 200 OK with the mapping deactivated
#[tokio::test]
async fn update_deactivates_mapping() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant = test.tenancy().insert_tenant("A", true).await?;
    let mapping = test
        .tenancy()
        .insert_mapping(tenant.id, PartRef::new(1, 10, 100), true)
        .await?;

    let result = update_tenant_property_part(
        State(test.into_app_state()),
        Path(mapping.id),
        ApiJson(UpdatePropertyPartMappingDto {
            is_active: Some(false),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let body: PropertyPartMappingDto = body_json(result.unwrap().into_response()).await;
    assert!(!body.is_active);

    Ok(())
}

/// Expect 200 OK with the deleted mapping, then 404 Not Found
#[tokio::test]
async fn delete_returns_deleted_mapping() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant = test.tenancy().insert_tenant("A", true).await?;
    let mapping = test
        .tenancy()
        .insert_mapping(tenant.id, PartRef::new(1, 10, 100), true)
        .await?;

    let result = delete_tenant_property_part(State(test.into_app_state()), Path(mapping.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: PropertyPartMappingDto = body_json(resp).await;
    assert_eq!(body.id, mapping.id);

    let result = delete_tenant_property_part(State(test.into_app_state()), Path(mapping.id)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
