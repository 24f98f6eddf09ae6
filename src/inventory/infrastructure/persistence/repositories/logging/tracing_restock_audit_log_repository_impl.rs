use async_trait::async_trait;

use crate::inventory::{
    domain::model::{
        enums::inventory_domain_error::InventoryDomainError,
        events::restock_requested_event::RestockRequestedEvent,
    },
    infrastructure::persistence::repositories::restock_audit_log_repository::RestockAuditLogRepository,
};

/// Audit sink that stands in for the ERP hand-off: one structured log line per request.
#[derive(Default)]
pub struct TracingRestockAuditLogRepositoryImpl;

impl TracingRestockAuditLogRepositoryImpl {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RestockAuditLogRepository for TracingRestockAuditLogRepositoryImpl {
    async fn save_event(&self, event: &RestockRequestedEvent) -> Result<(), InventoryDomainError> {
        tracing::info!(
            target: "inventory::restock_audit",
            event_id = %event.event_id,
            tenant_id = %event.tenant_id,
            product_name = %event.product_name,
            quantity = event.quantity.value(),
            occurred_at = %event.occurred_at.to_rfc3339(),
            "{} requested restock of {} units of {}",
            event.tenant_id,
            event.quantity.value(),
            event.product_name,
        );

        Ok(())
    }
}
