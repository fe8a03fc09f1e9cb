use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Contract ID {0} not found")]
    NotFound(i32),
}

impl IntoResponse for ContractError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(contract_id) => {
                tracing::debug!(contract_id = %contract_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
        }
    }
}
