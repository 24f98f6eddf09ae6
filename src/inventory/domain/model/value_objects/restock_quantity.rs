use crate::inventory::domain::model::enums::inventory_domain_error::InventoryDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RestockQuantity(u32);

impl RestockQuantity {
    pub fn new(value: i64) -> Result<Self, InventoryDomainError> {
        match u32::try_from(value) {
            Ok(quantity) if quantity > 0 => Ok(Self(quantity)),
            _ => Err(InventoryDomainError::InvalidRestockQuantity),
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}
