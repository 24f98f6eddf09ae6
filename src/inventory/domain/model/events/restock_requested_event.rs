use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::inventory::domain::model::value_objects::{
    product_name::ProductName, restock_quantity::RestockQuantity, tenant_id::TenantId,
};

#[derive(Clone, Debug)]
pub struct RestockRequestedEvent {
    pub event_id: Uuid,
    pub tenant_id: TenantId,
    pub product_name: ProductName,
    pub quantity: RestockQuantity,
    pub occurred_at: DateTime<Utc>,
}

impl RestockRequestedEvent {
    pub fn new(
        tenant_id: TenantId,
        product_name: ProductName,
        quantity: RestockQuantity,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            tenant_id,
            product_name,
            quantity,
            occurred_at,
        }
    }
}
