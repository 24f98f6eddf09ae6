use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryDomainError {
    #[error("x-tenant-id header is required")]
    MissingTenantId,

    #[error("tenant '{0}' is not authorized or does not exist")]
    TenantNotAuthorized(String),

    #[error("product '{0}' not found in inventory")]
    ProductNotFound(String),

    #[error("product name must not be empty")]
    InvalidProductName,

    #[error("restock quantity must be a positive integer")]
    InvalidRestockQuantity,

    #[error("stock levels must be non-negative integers")]
    InvalidStockLevel,

    #[error("duplicate stock record for product '{0}'")]
    DuplicateStockRecord(String),

    #[error("tenant '{0}' is declared more than once")]
    DuplicateTenant(String),

    #[error("unknown restock status '{0}'")]
    UnknownRestockStatus(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

impl InventoryDomainError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingTenantId => "missing_tenant_id",
            Self::TenantNotAuthorized(_) => "tenant_not_authorized",
            Self::ProductNotFound(_) => "product_not_found",
            Self::InvalidProductName => "invalid_product_name",
            Self::InvalidRestockQuantity => "invalid_restock_quantity",
            Self::InvalidStockLevel => "invalid_stock_level",
            Self::DuplicateStockRecord(_) => "duplicate_stock_record",
            Self::DuplicateTenant(_) => "duplicate_tenant",
            Self::UnknownRestockStatus(_) => "unknown_restock_status",
            Self::InvalidPayload(_) => "invalid_payload",
            Self::InfrastructureError(_) => "infrastructure_error",
        }
    }
}
