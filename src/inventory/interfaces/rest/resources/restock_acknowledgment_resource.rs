use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RestockAcknowledgmentResource {
    /// One of `success`, `pending` or `failed`.
    pub status: String,
    pub message: String,
    pub tenant_id: String,
    pub product_name: String,
    pub quantity_requested: u32,
    /// Serialized as RFC 3339.
    pub timestamp: DateTime<Utc>,
}
