use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum TenantError {
    #[error("Tenant ID {0} not found")]
    NotFound(i32),
    #[error("Tenant property part mapping ID {0} not found")]
    MappingNotFound(i32),
    /// Conditional delete blocked by rows still referencing the tenant.
    #[error(
        "Tenant ID {tenant_id} cannot be deleted: {mappings} property part mapping(s) and \
        {contracts} contract(s) still reference it"
    )]
    HasDependents {
        tenant_id: i32,
        mappings: u64,
        contracts: u64,
    },
    #[error("Tenant ID {tenant_id} already has an active mapping to property part ID {property_part_id}")]
    DuplicateMapping {
        tenant_id: i32,
        property_part_id: i32,
    },
}

impl IntoResponse for TenantError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(tenant_id) => {
                tracing::debug!(tenant_id = %tenant_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::MappingNotFound(mapping_id) => {
                tracing::debug!(mapping_id = %mapping_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::HasDependents { tenant_id, .. } | Self::DuplicateMapping { tenant_id, .. } => {
                tracing::debug!(tenant_id = %tenant_id, "{}", self);

                error_response(StatusCode::CONFLICT, self.to_string())
            }
        }
    }
}
