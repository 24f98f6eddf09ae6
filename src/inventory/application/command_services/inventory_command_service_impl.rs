use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::inventory::{
    domain::{
        model::{
            commands::request_restock_command::RequestRestockCommand,
            entities::restock_acknowledgment::RestockAcknowledgment,
            enums::inventory_domain_error::InventoryDomainError,
            events::restock_requested_event::RestockRequestedEvent,
        },
        services::inventory_command_service::InventoryCommandService,
    },
    infrastructure::persistence::repositories::restock_audit_log_repository::RestockAuditLogRepository,
};

pub struct InventoryCommandServiceImpl {
    audit_log_repository: Arc<dyn RestockAuditLogRepository>,
}

impl InventoryCommandServiceImpl {
    pub fn new(audit_log_repository: Arc<dyn RestockAuditLogRepository>) -> Self {
        Self {
            audit_log_repository,
        }
    }
}

#[async_trait]
impl InventoryCommandService for InventoryCommandServiceImpl {
    // Stock records are left untouched; fulfilment belongs to the external ERP.
    async fn handle_request_restock(
        &self,
        command: RequestRestockCommand,
    ) -> Result<RestockAcknowledgment, InventoryDomainError> {
        let event = RestockRequestedEvent::new(
            command.tenant_id().clone(),
            command.product_name().clone(),
            command.quantity(),
            Utc::now(),
        );

        self.audit_log_repository.save_event(&event).await?;

        Ok(RestockAcknowledgment::submitted(
            event.tenant_id,
            event.product_name,
            event.quantity,
            event.occurred_at,
        ))
    }
}
