use std::sync::Arc;

use async_trait::async_trait;

use crate::inventory::{
    domain::{
        model::{
            enums::inventory_domain_error::InventoryDomainError,
            value_objects::tenant_id::TenantId,
        },
        services::tenant_validation_service::TenantValidationService,
    },
    infrastructure::persistence::repositories::known_tenant_repository::KnownTenantRepository,
};

pub struct TenantValidationServiceImpl {
    known_tenant_repository: Arc<dyn KnownTenantRepository>,
}

impl TenantValidationServiceImpl {
    pub fn new(known_tenant_repository: Arc<dyn KnownTenantRepository>) -> Self {
        Self {
            known_tenant_repository,
        }
    }
}

#[async_trait]
impl TenantValidationService for TenantValidationServiceImpl {
    async fn validate(
        &self,
        raw_tenant_id: Option<&str>,
    ) -> Result<TenantId, InventoryDomainError> {
        let raw_tenant_id = raw_tenant_id.ok_or(InventoryDomainError::MissingTenantId)?;
        let tenant_id = TenantId::new(raw_tenant_id.to_string())?;

        if !self.known_tenant_repository.exists(&tenant_id).await? {
            tracing::warn!(tenant_id = %tenant_id, "rejected unknown tenant");
            return Err(InventoryDomainError::TenantNotAuthorized(
                tenant_id.value().to_string(),
            ));
        }

        Ok(tenant_id)
    }
}
