use chrono::{DateTime, Utc};

use crate::inventory::domain::model::{
    enums::restock_status::RestockStatus,
    value_objects::{
        product_name::ProductName, restock_quantity::RestockQuantity, tenant_id::TenantId,
    },
};

pub const RESTOCK_SUBMITTED_MESSAGE: &str = "Restock request sent to the ERP system";

#[derive(Clone, Debug)]
pub struct RestockAcknowledgment {
    status: RestockStatus,
    message: String,
    tenant_id: TenantId,
    product_name: ProductName,
    quantity_requested: RestockQuantity,
    requested_at: DateTime<Utc>,
}

impl RestockAcknowledgment {
    pub fn submitted(
        tenant_id: TenantId,
        product_name: ProductName,
        quantity_requested: RestockQuantity,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            status: RestockStatus::Success,
            message: RESTOCK_SUBMITTED_MESSAGE.to_string(),
            tenant_id,
            product_name,
            quantity_requested,
            requested_at,
        }
    }

    pub fn status(&self) -> RestockStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn product_name(&self) -> &ProductName {
        &self.product_name
    }

    pub fn quantity_requested(&self) -> RestockQuantity {
        self.quantity_requested
    }

    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }
}
