use async_trait::async_trait;

use crate::inventory::domain::model::{
    enums::inventory_domain_error::InventoryDomainError,
    events::restock_requested_event::RestockRequestedEvent,
};

#[async_trait]
pub trait RestockAuditLogRepository: Send + Sync {
    async fn save_event(&self, event: &RestockRequestedEvent) -> Result<(), InventoryDomainError>;
}
