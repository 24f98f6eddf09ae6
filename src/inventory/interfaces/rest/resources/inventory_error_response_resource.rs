use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct InventoryErrorResponseResource {
    pub message: String,
    pub error_code: String,
}
