use crate::inventory::domain::model::value_objects::tenant_id::TenantId;

#[derive(Clone, Debug)]
pub struct ListInventoryQuery {
    tenant_id: TenantId,
}

impl ListInventoryQuery {
    pub fn new(tenant_id: TenantId) -> Self {
        Self { tenant_id }
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}
