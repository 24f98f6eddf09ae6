use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ServiceStatusResource {
    pub service: String,
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthStatusResource {
    pub status: String,
}
