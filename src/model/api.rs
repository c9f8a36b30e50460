use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Boolean outcome of a bot lifecycle operation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}
