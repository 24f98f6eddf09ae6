use crate::inventory::domain::model::{
    enums::inventory_domain_error::InventoryDomainError,
    value_objects::{product_name::ProductName, tenant_id::TenantId},
};

#[derive(Clone, Debug)]
pub struct GetInventoryItemQuery {
    tenant_id: TenantId,
    product_name: ProductName,
}

impl GetInventoryItemQuery {
    pub fn new(tenant_id: TenantId, product_name: String) -> Result<Self, InventoryDomainError> {
        Ok(Self {
            tenant_id,
            product_name: ProductName::new(product_name)?,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn product_name(&self) -> &ProductName {
        &self.product_name
    }
}
