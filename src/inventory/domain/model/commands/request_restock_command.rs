use crate::inventory::domain::model::{
    enums::inventory_domain_error::InventoryDomainError,
    value_objects::{
        product_name::ProductName, restock_quantity::RestockQuantity, tenant_id::TenantId,
    },
};

#[derive(Clone, Debug)]
pub struct RequestRestockCommand {
    tenant_id: TenantId,
    product_name: ProductName,
    quantity: RestockQuantity,
}

impl RequestRestockCommand {
    pub fn new(
        tenant_id: TenantId,
        product_name: String,
        quantity: i64,
    ) -> Result<Self, InventoryDomainError> {
        Ok(Self {
            tenant_id,
            product_name: ProductName::new(product_name)?,
            quantity: RestockQuantity::new(quantity)?,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn product_name(&self) -> &ProductName {
        &self.product_name
    }

    pub fn quantity(&self) -> RestockQuantity {
        self.quantity
    }
}
