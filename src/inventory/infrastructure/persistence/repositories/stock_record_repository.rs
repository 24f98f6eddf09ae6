use async_trait::async_trait;

use crate::inventory::domain::model::{
    entities::stock_record::StockRecord,
    enums::inventory_domain_error::InventoryDomainError,
    value_objects::{product_name::ProductName, tenant_id::TenantId},
};

pub type StockRecordPredicate = dyn Fn(&StockRecord) -> bool + Send + Sync;

/// Read-only, tenant-scoped access to stock records.
///
/// A tenant without a partition behaves exactly like a tenant with an empty one:
/// lookups yield `None` and listings yield an empty vector.
#[async_trait]
pub trait StockRecordRepository: Send + Sync {
    async fn find_by_product(
        &self,
        tenant_id: &TenantId,
        product_name: &ProductName,
    ) -> Result<Option<StockRecord>, InventoryDomainError>;

    async fn list_by_tenant(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<StockRecord>, InventoryDomainError>;

    async fn list_matching(
        &self,
        tenant_id: &TenantId,
        predicate: &StockRecordPredicate,
    ) -> Result<Vec<StockRecord>, InventoryDomainError>;

    async fn list_below_minimum(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<StockRecord>, InventoryDomainError> {
        self.list_matching(tenant_id, &|record: &StockRecord| record.needs_restock())
            .await
    }
}
