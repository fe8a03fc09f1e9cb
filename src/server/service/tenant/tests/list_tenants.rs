use chrono::{Duration, Utc};

use crate::{model::tenant::TenantFilterDto, server::service::tenant::TenantService};

use super::*;

/// Expect tenants without mappings to be listed when no mapping filter is given
#[tokio::test]
async fn lists_all_tenants_without_filters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let mapped = test.tenancy().insert_tenant("A", true).await?;
    let unmapped = test.tenancy().insert_tenant("B", false).await?;
    test.tenancy()
        .insert_mapping(mapped.id, PartRef::new(1, 10, 100), true)
        .await?;

    let tenant_service = TenantService::new(&test.db);
    let tenants = tenant_service
        .list_tenants(TenantFilterDto::default())
        .await
        .unwrap();

    assert_eq!(
        tenants.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![mapped.id, unmapped.id]
    );
    assert_eq!(tenants[0].property_parts.len(), 1);
    assert!(tenants[1].property_parts.is_empty());

    Ok(())
}

/// Expect the organization scope to win and attach only matching mappings
#[tokio::test]
async fn scope_restricts_tenants_and_mappings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant_a = test.tenancy().insert_tenant("A", true).await?;
    let tenant_b = test.tenancy().insert_tenant("B", true).await?;
    let in_scope = test
        .tenancy()
        .insert_mapping(tenant_a.id, PartRef::new(1, 10, 100), true)
        .await?;
    test.tenancy()
        .insert_mapping(tenant_a.id, PartRef::new(2, 20, 200), true)
        .await?;
    test.tenancy()
        .insert_mapping(tenant_b.id, PartRef::new(2, 20, 201), true)
        .await?;

    let tenant_service = TenantService::new(&test.db);
    let tenants = tenant_service
        .list_tenants(TenantFilterDto {
            organization_id: Some(1),
            property_id: Some(20),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].id, tenant_a.id);
    assert_eq!(
        tenants[0]
            .property_parts
            .iter()
            .map(|m| m.id)
            .collect::<Vec<_>>(),
        vec![in_scope.id]
    );

    Ok(())
}

/// Expect createdAfter to exclude tenants whose mappings are all older
#[tokio::test]
async fn created_after_requires_recent_mapping() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant = test.tenancy().insert_tenant("A", true).await?;
    test.tenancy()
        .insert_mapping(tenant.id, PartRef::new(1, 10, 100), true)
        .await?;

    let tenant_service = TenantService::new(&test.db);

    let recent = tenant_service
        .list_tenants(TenantFilterDto {
            created_after: Some(Utc::now().naive_utc() - Duration::days(1)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);

    let future = tenant_service
        .list_tenants(TenantFilterDto {
            created_after: Some(Utc::now().naive_utc() + Duration::days(1)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(future.is_empty());

    Ok(())
}

/// Expect the contract filter to list roster tenants with contracts when requested
#[tokio::test]
async fn contract_filter_lists_roster_with_contracts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let part = PartRef::new(1, 10, 100);
    let on_roster = test.tenancy().insert_tenant("A", true).await?;
    let off_roster = test.tenancy().insert_tenant("B", true).await?;
    test.tenancy().insert_mapping(on_roster.id, part, true).await?;
    test.tenancy().insert_mapping(off_roster.id, part, true).await?;
    let contract = test
        .tenancy()
        .insert_contract_with_tenants(part, date(2025, 1, 1), &[on_roster.id])
        .await?;

    let tenant_service = TenantService::new(&test.db);
    let tenants = tenant_service
        .list_tenants(TenantFilterDto {
            contract_id: Some(contract.id),
            include_contracts: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].id, on_roster.id);
    assert_eq!(
        tenants[0]
            .contracts
            .as_ref()
            .map(|c| c.iter().map(|c| c.id).collect::<Vec<_>>()),
        Some(vec![contract.id])
    );

    Ok(())
}
