use async_trait::async_trait;

use crate::inventory::domain::model::{
    enums::inventory_domain_error::InventoryDomainError, value_objects::tenant_id::TenantId,
};

#[async_trait]
pub trait KnownTenantRepository: Send + Sync {
    async fn exists(&self, tenant_id: &TenantId) -> Result<bool, InventoryDomainError>;
}
