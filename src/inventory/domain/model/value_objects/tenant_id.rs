use std::fmt;

use crate::inventory::domain::model::enums::inventory_domain_error::InventoryDomainError;

/// Opaque tenant identifier taken from the `x-tenant-id` header.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(value: String) -> Result<Self, InventoryDomainError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(InventoryDomainError::MissingTenantId);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
