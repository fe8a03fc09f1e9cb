//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState, reporter::report_errors};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together since `routes!` groups methods by path.
///
/// # Registered Endpoints
/// - `GET|POST /api/contracts` - List or create contracts
/// - `GET|PATCH|DELETE /api/contracts/{id}` - Get, update or delete a contract
/// - `PATCH /api/contracts/{id}/status` - Activate or deactivate a contract
/// - `GET|POST /api/tenants` - List or create tenants
/// - `GET|PATCH|DELETE /api/tenants/{id}` - Get, update or delete a tenant
/// - `PATCH /api/tenants/{id}/status` - Activate or deactivate a tenant
/// - `GET|POST /api/tenant-property-parts` - List or create mappings
/// - `PATCH|DELETE /api/tenant-property-parts/{id}` - Update or delete a mapping
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` with every route registered, see [`app`] for the router with
/// state and the error reporting middleware applied.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Tenancy", description = "Tenant and contract API"), tags(
        (name = controller::contract::CONTRACT_TAG, description = "Rental contracts and their tenant rosters"),
        (name = controller::tenant::TENANT_TAG, description = "Tenant records"),
        (name = controller::property_part::PROPERTY_PART_TAG, description = "Tenant occupancy of property parts"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::contract::list_contracts,
            controller::contract::create_contract
        ))
        .routes(routes!(
            controller::contract::get_contract,
            controller::contract::update_contract,
            controller::contract::delete_contract
        ))
        .routes(routes!(controller::contract::change_contract_status))
        .routes(routes!(
            controller::tenant::list_tenants,
            controller::tenant::create_tenant
        ))
        .routes(routes!(
            controller::tenant::get_tenant,
            controller::tenant::update_tenant,
            controller::tenant::delete_tenant
        ))
        .routes(routes!(controller::tenant::change_tenant_status))
        .routes(routes!(
            controller::property_part::list_tenant_property_parts,
            controller::property_part::create_tenant_property_part
        ))
        .routes(routes!(
            controller::property_part::update_tenant_property_part,
            controller::property_part::delete_tenant_property_part
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application: every route, the error reporting middleware and state.
///
/// # Example
/// ```ignore
/// let app_state = AppState::from((db, error_reporter));
/// axum::serve(listener, app(app_state)).await?;
/// ```
pub fn app(state: AppState) -> Router {
    routes()
        .layer(middleware::from_fn_with_state(state.clone(), report_errors))
        .with_state(state)
}
