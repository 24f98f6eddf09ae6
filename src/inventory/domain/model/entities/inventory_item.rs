use crate::inventory::domain::model::{
    entities::stock_record::StockRecord,
    value_objects::{product_name::ProductName, tenant_id::TenantId},
};

/// Read view of a stock record. `needs_restock` is derived on every construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InventoryItem {
    tenant_id: TenantId,
    product_name: ProductName,
    quantity: u32,
    min_stock: u32,
    needs_restock: bool,
}

impl InventoryItem {
    pub fn from_record(tenant_id: TenantId, record: StockRecord) -> Self {
        let needs_restock = record.needs_restock();
        let quantity = record.quantity();
        let min_stock = record.min_stock();

        Self {
            tenant_id,
            product_name: record.product_name().clone(),
            quantity,
            min_stock,
            needs_restock,
        }
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn product_name(&self) -> &ProductName {
        &self.product_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn min_stock(&self) -> u32 {
        self.min_stock
    }

    pub fn needs_restock(&self) -> bool {
        self.needs_restock
    }
}
