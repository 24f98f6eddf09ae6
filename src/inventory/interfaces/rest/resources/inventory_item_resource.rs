use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct InventoryItemResource {
    pub tenant_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub min_stock: u32,
    pub needs_restock: bool,
}
