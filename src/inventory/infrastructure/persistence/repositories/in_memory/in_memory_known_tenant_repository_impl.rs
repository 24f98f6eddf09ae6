use std::collections::HashSet;

use async_trait::async_trait;

use crate::inventory::{
    domain::model::{
        enums::inventory_domain_error::InventoryDomainError, value_objects::tenant_id::TenantId,
    },
    infrastructure::persistence::repositories::known_tenant_repository::KnownTenantRepository,
};

pub struct InMemoryKnownTenantRepositoryImpl {
    tenants: HashSet<TenantId>,
}

impl InMemoryKnownTenantRepositoryImpl {
    pub fn new(tenants: impl IntoIterator<Item = TenantId>) -> Self {
        Self {
            tenants: tenants.into_iter().collect(),
        }
    }
}

#[async_trait]
impl KnownTenantRepository for InMemoryKnownTenantRepositoryImpl {
    async fn exists(&self, tenant_id: &TenantId) -> Result<bool, InventoryDomainError> {
        Ok(self.tenants.contains(tenant_id))
    }
}
