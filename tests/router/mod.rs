//! End-to-end tests through the full router, middleware and state.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tenancy::{model::api::ErrorDto, server::router::app};
use tenancy_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, TestContextExt};

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

fn contract_body(tenant_ids: Option<Vec<i32>>) -> Value {
    let mut body = json!({
        "organization_id": 1,
        "organization_name": "Acme Estates",
        "property_id": 10,
        "property_name": "Harbour View",
        "property_part_id": 100,
        "property_part_name": "Unit 4B",
        "rent_amount": "1500.00",
        "start_date": "2025-01-01",
        "end_date": "2025-12-31",
        "tds_applicable": false
    });
    if let Some(tenant_ids) = tenant_ids {
        body["tenant_ids"] = json!(tenant_ids);
    }

    body
}

/// Expect the tenant lifecycle to flow through mappings, rosters and conditional delete
#[tokio::test]
async fn tenant_and_contract_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let app = app(test.into_app_state());

    let resp = send(
        &app,
        "POST",
        "/api/tenants",
        Some(json!({ "name": "A", "contact": "123", "email": "a@x.com" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let tenant: Value = body_json(resp).await;
    assert_eq!(tenant["isActive"], json!(false));
    let tenant_id = tenant["id"].as_i64().unwrap() as i32;

    let resp = send(
        &app,
        "PATCH",
        &format!("/api/tenants/{}/status", tenant_id),
        Some(json!({ "isActive": true })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(
        &app,
        "POST",
        "/api/tenant-property-parts",
        Some(json!({
            "tenant_id": tenant_id,
            "organization_id": 1,
            "organization_name": "Acme Estates",
            "property_id": 10,
            "property_name": "Harbour View",
            "property_part_id": 100,
            "property_part_name": "Unit 4B"
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let mapping: Value = body_json(resp).await;
    let mapping_id = mapping["id"].as_i64().unwrap();

    // Explicit empty roster
    let resp = send(&app, "POST", "/api/contracts", Some(contract_body(Some(vec![])))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let empty: Value = body_json(resp).await;
    assert_eq!(empty["tenant_ids"], json!([]));

    // Roster auto-assigned from active mappings
    let resp = send(&app, "POST", "/api/contracts", Some(contract_body(None))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let assigned: Value = body_json(resp).await;
    assert_eq!(assigned["tenant_ids"], json!([tenant_id]));
    let assigned_id = assigned["id"].as_i64().unwrap();

    let resp = send(&app, "DELETE", &format!("/api/tenants/{}", tenant_id), None).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let error: Value = body_json(resp).await;
    let message = error["error"].as_str().unwrap();
    assert!(message.contains("1 property part mapping(s)"));
    assert!(message.contains("1 contract(s)"));

    // Unparseable filter values are ignored rather than rejected
    let resp = send(&app, "GET", "/api/contracts?property_part_id=abc", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let contracts: Vec<Value> = body_json(resp).await;
    assert_eq!(contracts.len(), 2);

    let resp = send(&app, "DELETE", &format!("/api/contracts/{}", assigned_id), None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = send(
        &app,
        "DELETE",
        &format!("/api/tenant-property-parts/{}", mapping_id),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, "DELETE", &format!("/api/tenants/{}", tenant_id), None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, "GET", &format!("/api/tenants/{}", tenant_id), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the activity flag in a create body to be ignored
#[tokio::test]
async fn create_tenant_ignores_activity_flag() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let app = app(test.into_app_state());

    let resp = send(
        &app,
        "POST",
        "/api/tenants",
        Some(json!({
            "name": "A",
            "contact": "123",
            "email": "a@x.com",
            "isActive": true
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let tenant: Value = body_json(resp).await;
    assert_eq!(tenant["isActive"], json!(false));

    Ok(())
}

/// Expect a body missing a required field to be a reported 400 with an error body
#[tokio::test]
async fn malformed_body_is_reported_validation_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tenancy_tables()
        .with_error_sink_endpoint(201, 1)
        .build()
        .await?;
    let app = app(test.into_app_state());

    let resp = send(&app, "POST", "/api/tenants", Some(json!({ "name": "A" }))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let error: ErrorDto = body_json(resp).await;
    assert!(error.error.contains("contact"));

    assert!(test.wait_for_mocks(Duration::from_secs(5)).await);
    test.assert_mocks();

    Ok(())
}

/// Expect a mistyped field on a status change to be rejected with 400
#[tokio::test]
async fn mistyped_status_body_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tenancy_tables().build().await?;
    let tenant = test.tenancy().insert_tenant("A", false).await?;
    let app = app(test.into_app_state());

    let resp = send(
        &app,
        "PATCH",
        &format!("/api/tenants/{}/status", tenant.id),
        Some(json!({ "isActive": "yes" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect an error response to be forwarded to the error-logging sink
#[tokio::test]
async fn reports_errors_to_sink() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tenancy_tables()
        .with_error_sink_endpoint(201, 1)
        .build()
        .await?;
    let app = app(test.into_app_state());

    let resp = send(&app, "GET", "/api/contracts/42", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert!(test.wait_for_mocks(Duration::from_secs(5)).await);
    test.assert_mocks();

    Ok(())
}

/// Expect the response to be returned unchanged when the sink fails
#[tokio::test]
async fn sink_failure_does_not_affect_response() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tenancy_tables()
        .with_error_sink_endpoint(500, 1)
        .build()
        .await?;
    let app = app(test.into_app_state());

    let resp = send(&app, "GET", "/api/tenants/42", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: Value = body_json(resp).await;
    assert_eq!(error["error"], json!("Tenant ID 42 not found"));

    assert!(test.wait_for_mocks(Duration::from_secs(5)).await);

    Ok(())
}

/// Expect successful responses not to be reported
#[tokio::test]
async fn does_not_report_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tenancy_tables()
        .with_error_sink_endpoint(201, 0)
        .build()
        .await?;
    let app = app(test.into_app_state());

    let resp = send(&app, "GET", "/api/tenants", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(100)).await;
    test.assert_mocks();

    Ok(())
}

/// Expect the OpenAPI document to list every resource path
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.into_app_state());

    let resp = send(&app, "GET", "/api/docs/openapi.json", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = body_json(resp).await;

    for path in [
        "/api/contracts",
        "/api/contracts/{id}",
        "/api/contracts/{id}/status",
        "/api/tenants",
        "/api/tenants/{id}",
        "/api/tenants/{id}/status",
        "/api/tenant-property-parts",
        "/api/tenant-property-parts/{id}",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing path {}", path);
    }

    Ok(())
}
