use async_trait::async_trait;

use crate::inventory::domain::model::{
    enums::inventory_domain_error::InventoryDomainError, value_objects::tenant_id::TenantId,
};

#[async_trait]
pub trait TenantValidationService: Send + Sync {
    /// Resolves a caller-supplied tenant token into a known tenant.
    ///
    /// A missing or blank token fails with `MissingTenantId`; a token outside the
    /// known-tenant set fails with `TenantNotAuthorized`.
    async fn validate(
        &self,
        raw_tenant_id: Option<&str>,
    ) -> Result<TenantId, InventoryDomainError>;
}
