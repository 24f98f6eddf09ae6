use crate::inventory::domain::model::{
    enums::inventory_domain_error::InventoryDomainError,
    value_objects::product_name::ProductName,
};

/// Stock level of one product inside one tenant partition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StockRecord {
    product_name: ProductName,
    quantity: u32,
    min_stock: u32,
}

impl StockRecord {
    pub fn new(
        product_name: ProductName,
        quantity: i64,
        min_stock: i64,
    ) -> Result<Self, InventoryDomainError> {
        let quantity =
            u32::try_from(quantity).map_err(|_| InventoryDomainError::InvalidStockLevel)?;
        let min_stock =
            u32::try_from(min_stock).map_err(|_| InventoryDomainError::InvalidStockLevel)?;

        Ok(Self {
            product_name,
            quantity,
            min_stock,
        })
    }

    pub fn needs_restock(&self) -> bool {
        self.quantity < self.min_stock
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
}
