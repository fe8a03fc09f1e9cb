use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Request body toggling the activity flag of a tenant or contract
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    #[serde(rename = "isActive")]
    pub is_active: bool,
}
