use std::collections::{BTreeMap, HashMap, btree_map::Entry};

use async_trait::async_trait;

use crate::inventory::{
    domain::model::{
        entities::stock_record::StockRecord,
        enums::inventory_domain_error::InventoryDomainError,
        value_objects::{product_name::ProductName, tenant_id::TenantId},
    },
    infrastructure::persistence::repositories::stock_record_repository::{
        StockRecordPredicate, StockRecordRepository,
    },
};

type TenantPartition = BTreeMap<ProductName, StockRecord>;

pub struct InMemoryStockRecordRepositoryImpl {
    partitions: HashMap<TenantId, TenantPartition>,
}

impl InMemoryStockRecordRepositoryImpl {
    /// Fails with `DuplicateStockRecord` when a tenant lists the same product twice.
    pub fn new(
        partitions: HashMap<TenantId, Vec<StockRecord>>,
    ) -> Result<Self, InventoryDomainError> {
        let mut keyed = HashMap::with_capacity(partitions.len());
        for (tenant_id, records) in partitions {
            let mut partition = TenantPartition::new();
            for record in records {
                match partition.entry(record.product_name().clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(record);
                    }
                    Entry::Occupied(slot) => {
                        return Err(InventoryDomainError::DuplicateStockRecord(
                            slot.key().value().to_string(),
                        ));
                    }
                }
            }
            keyed.insert(tenant_id, partition);
        }

        Ok(Self { partitions: keyed })
    }

    fn partition(&self, tenant_id: &TenantId) -> Option<&TenantPartition> {
        self.partitions.get(tenant_id)
    }
}

#[async_trait]
impl StockRecordRepository for InMemoryStockRecordRepositoryImpl {
    async fn find_by_product(
        &self,
        tenant_id: &TenantId,
        product_name: &ProductName,
    ) -> Result<Option<StockRecord>, InventoryDomainError> {
        Ok(self
            .partition(tenant_id)
            .and_then(|partition| partition.get(product_name))
            .cloned())
    }

    async fn list_by_tenant(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<StockRecord>, InventoryDomainError> {
        Ok(self
            .partition(tenant_id)
            .map(|partition| partition.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn list_matching(
        &self,
        tenant_id: &TenantId,
        predicate: &StockRecordPredicate,
    ) -> Result<Vec<StockRecord>, InventoryDomainError> {
        Ok(self
            .partition(tenant_id)
            .map(|partition| {
                partition
                    .values()
                    .filter(|record| predicate(*record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
