use std::str::FromStr;

use crate::inventory::domain::model::enums::inventory_domain_error::InventoryDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RestockStatus {
    Success,
    Pending,
    Failed,
}

impl RestockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for RestockStatus {
    type Err = InventoryDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "success" => Ok(Self::Success),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            _ => Err(InventoryDomainError::UnknownRestockStatus(value.to_string())),
        }
    }
}
