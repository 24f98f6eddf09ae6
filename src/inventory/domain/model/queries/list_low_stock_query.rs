use crate::inventory::domain::model::value_objects::tenant_id::TenantId;

#[derive(Clone, Debug)]
pub struct ListLowStockQuery {
    tenant_id: TenantId,
}

impl ListLowStockQuery {
    pub fn new(tenant_id: TenantId) -> Self {
        Self { tenant_id }
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}
