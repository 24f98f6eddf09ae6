use async_trait::async_trait;

use crate::inventory::domain::model::{
    commands::request_restock_command::RequestRestockCommand,
    entities::restock_acknowledgment::RestockAcknowledgment,
    enums::inventory_domain_error::InventoryDomainError,
};

#[async_trait]
pub trait InventoryCommandService: Send + Sync {
    async fn handle_request_restock(
        &self,
        command: RequestRestockCommand,
    ) -> Result<RestockAcknowledgment, InventoryDomainError>;
}
