use std::fmt;

use crate::inventory::domain::model::enums::inventory_domain_error::InventoryDomainError;

/// Product key within a tenant partition. Kept verbatim: lookups are exact matches.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(value: String) -> Result<Self, InventoryDomainError> {
        if value.trim().is_empty() {
            return Err(InventoryDomainError::InvalidProductName);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
